use std::path::{Path, PathBuf};

use crate::classify::FileKind;
use crate::event::{InputEvent, PointerButton};
use crate::launch::{Launcher, SystemLauncher};
use crate::model::{self, FixedRowMetrics, Listing, RowMetrics};
use crate::scroll::ScrollController;

/// Main application state.
///
/// Owns one listing at a time; navigation and the recursive toggle rebuild
/// it wholesale rather than patching rows in place. The walk runs
/// synchronously inside the event handler that triggered it.
pub struct Browser {
    root: PathBuf,
    recursive: bool,
    listing: Listing,
    scroll: ScrollController,
    metrics: Box<dyn RowMetrics>,
    launcher: Box<dyn Launcher>,
    pub should_quit: bool,
}

impl Browser {
    /// Browser rooted at `root`, with the system launcher and fixed row
    /// metrics. An unreadable root still produces a usable (parent-only)
    /// listing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_collaborators(
            root,
            Box::new(FixedRowMetrics::default()),
            Box::new(SystemLauncher),
        )
    }

    /// Browser wired to renderer-supplied metrics and a custom launcher.
    pub fn with_collaborators(
        root: impl Into<PathBuf>,
        metrics: Box<dyn RowMetrics>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        let root = root.into();
        let listing = model::build(&root, false, metrics.as_ref());
        let mut scroll = ScrollController::for_window();
        scroll.reset(listing.len());
        Self {
            root,
            recursive: false,
            listing,
            scroll,
            metrics,
            launcher,
            should_quit: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    /// React to one input event from the event loop.
    ///
    /// Only the scrollbar consumes raw pointer coordinates here; row
    /// hit-testing lives in the renderer, which reports hits through
    /// [`Browser::activate_row`].
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown {
                button: PointerButton::Left,
                x,
                y,
            } => {
                self.scroll.pointer_down(x, y, self.listing.rows());
            }
            InputEvent::PointerMove { y, .. } => {
                self.scroll.pointer_move(y, self.listing.rows_mut());
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
            } => self.scroll.pointer_up(),
            InputEvent::Quit => self.should_quit = true,
            _ => {}
        }
    }

    /// Activate a row the renderer hit-tested.
    ///
    /// Directory rows (the `..` row included) navigate; every other row is
    /// handed to the launcher, fire-and-forget.
    pub fn activate_row(&mut self, index: usize) {
        let Some(row) = self.listing.rows().get(index) else {
            return;
        };
        if row.kind == FileKind::Directory {
            let target = row.path.clone();
            self.navigate(target);
        } else {
            self.launcher.open_detached(&row.path);
        }
    }

    /// Change the listing root and rebuild the model.
    pub fn navigate(&mut self, root: PathBuf) {
        self.root = root;
        self.rebuild();
    }

    /// Toggle one-level recursive expansion and rebuild the model.
    pub fn toggle_recursive(&mut self) {
        self.recursive = !self.recursive;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.listing = model::build(&self.root, self.recursive, self.metrics.as_ref());
        self.scroll.reset(self.listing.len());
    }
}
