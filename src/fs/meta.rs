use std::fs;
use std::path::Path;

use crate::error::Result;

/// Metadata triple fetched once per entry, shared by the classifier and both
/// formatters.
#[derive(Debug, Clone, Copy)]
pub struct FileInfo {
    pub is_directory: bool,
    /// Raw `st_mode` bits on Unix; 0 elsewhere.
    pub mode: u32,
    pub size: u64,
}

impl FileInfo {
    /// Stat a path, following symlinks like the listing itself does.
    pub fn probe(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self {
            is_directory: metadata.is_dir(),
            mode: mode_bits(&metadata),
            size: metadata.len(),
        })
    }
}

#[cfg(unix)]
fn mode_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(_metadata: &fs::Metadata) -> u32 {
    0
}
