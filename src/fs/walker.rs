//! Directory walking: ordered entry discovery with optional one-level
//! recursive expansion.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// One filesystem object discovered by a directory walk.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub is_directory: bool,
    /// Nesting level below the listing root; 0 for direct children.
    pub depth: usize,
}

/// Compare two names by lowercased characters, position by position.
///
/// When one name is a case-insensitive strict prefix of the other, the
/// shorter sorts first. Listing order relies on this exact tie-break; it is
/// not interchangeable with locale-aware collation.
pub fn compare_no_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        match ca.to_ascii_lowercase().cmp(&cb.to_ascii_lowercase()) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Join `root` and `name` with a literal `/`.
///
/// Listing paths keep the textual shape `root + "/" + name` so that depth
/// can be recovered by counting separators; `Path::join` would collapse the
/// extra separator for a `/` root.
pub(crate) fn join_raw(root: &Path, name: &OsStr) -> PathBuf {
    let mut joined = root.as_os_str().to_os_string();
    joined.push("/");
    joined.push(name);
    PathBuf::from(joined)
}

/// Count `/` separators in a path's textual form.
pub(crate) fn separator_count(path: &Path) -> usize {
    path.as_os_str().to_string_lossy().matches('/').count()
}

/// List the children of `root`, sorted by [`compare_no_case`].
///
/// `.` and `..` never appear in the result; the parent row is synthesized by
/// the presentation model, not here. With `recursive`, every directory child
/// whose name does not start with `.` is expanded exactly one level: its own
/// non-recursive listing is spliced in immediately after it, with depth
/// counted from the original root. Deeper directories are listed but never
/// expanded.
pub fn list(root: &Path, recursive: bool) -> Result<Vec<Entry>> {
    let root_separators = separator_count(root);
    list_from(root, recursive, root_separators)
}

fn list_from(dir: &Path, recursive: bool, root_separators: usize) -> Result<Vec<Entry>> {
    let unavailable = || AppError::DirectoryUnavailable(dir.to_path_buf());

    let metadata = fs::metadata(dir).map_err(|_| unavailable())?;
    if !metadata.is_dir() {
        return Err(unavailable());
    }

    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|_| unavailable())? {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(_) => continue,
        }
    }
    names.sort_by(|a, b| compare_no_case(&a.to_string_lossy(), &b.to_string_lossy()));

    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let path = join_raw(dir, &name);
        let is_directory = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        let depth = separator_count(&path) - root_separators - 1;

        let expand =
            recursive && is_directory && !name.to_string_lossy().starts_with('.');

        entries.push(Entry {
            path: path.clone(),
            is_directory,
            depth,
        });

        if expand {
            // The nested call is non-recursive: only the top level expands.
            match list_from(&path, false, root_separators) {
                Ok(nested) => entries.extend(nested),
                Err(err) => log::debug!("skipping subdirectory: {}", err),
            }
        }
    }
    Ok(entries)
}
