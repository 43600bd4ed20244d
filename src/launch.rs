//! Launching files with the OS default handler.

use std::path::Path;

/// Opens a path with the platform's file-association handler.
///
/// The spawned viewer is detached: the browser never waits on it, owns it,
/// or observes its exit.
pub trait Launcher {
    fn open_detached(&self, path: &Path);
}

/// Launcher backed by the platform opener (`xdg-open` and friends).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_detached(&self, path: &Path) {
        if let Err(err) = open::that_detached(path) {
            log::warn!("could not open {}: {}", path.display(), err);
        }
    }
}
