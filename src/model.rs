//! Render-ready listing: display rows with formatted metadata and stacked
//! y coordinates.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::classify::{self, FileKind};
use crate::format;
use crate::fs::meta::FileInfo;
use crate::fs::walker::{self, Entry};

/// Horizontal indent applied per nesting level, in pixels. The renderer
/// offsets the name column by this; the value itself is computed here.
pub const INDENT_PER_DEPTH_PX: i32 = 25;

/// Vertical position of the first row, below the window header.
pub const HEADER_HEIGHT_PX: i32 = 30;

/// Supplies rendered text heights for row stacking.
///
/// The windowed renderer implements this over its font engine;
/// [`FixedRowMetrics`] serves headless fronts and tests.
pub trait RowMetrics {
    fn text_height(&self, name: &str) -> i32;
}

/// Uniform row height for headless use.
#[derive(Debug, Clone, Copy)]
pub struct FixedRowMetrics(pub i32);

impl Default for FixedRowMetrics {
    fn default() -> Self {
        Self(22)
    }
}

impl RowMetrics for FixedRowMetrics {
    fn text_height(&self, _name: &str) -> i32 {
        self.0
    }
}

/// One render-ready row of the listing.
///
/// Everything but `y` is fixed at build time; the scroll controller moves
/// `y` as the user drags the thumb.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub name: String,
    pub depth: usize,
    pub size_text: String,
    pub permission_text: String,
    pub kind: FileKind,
    pub y: i32,
    pub path: PathBuf,
}

impl DisplayRow {
    /// Horizontal offset of the name column for this row's nesting level.
    pub fn indent_px(&self) -> i32 {
        self.depth as i32 * INDENT_PER_DEPTH_PX
    }
}

/// The ordered collection of display rows for one directory view.
///
/// Row 0 is always the synthetic `..` parent row, so a listing is never
/// empty — an unreadable root still renders a usable screen.
#[derive(Debug, Clone)]
pub struct Listing {
    rows: Vec<DisplayRow>,
}

impl Listing {
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [DisplayRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the presentation model for `root`.
///
/// An unavailable root degrades to a listing holding only the parent row;
/// the failure is logged, never returned.
pub fn build(root: &Path, recursive: bool, metrics: &dyn RowMetrics) -> Listing {
    let mut entries = match walker::list(root, recursive) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("{}", err);
            Vec::new()
        }
    };
    entries.insert(0, parent_entry(root));

    let mut rows = Vec::with_capacity(entries.len());
    let mut y = HEADER_HEIGHT_PX;
    for entry in entries {
        let row = build_row(entry, y);
        y += metrics.text_height(&row.name);
        rows.push(row);
    }
    Listing { rows }
}

/// Synthetic entry for `root + "/.."`, always first regardless of sort order.
fn parent_entry(root: &Path) -> Entry {
    let path = walker::join_raw(root, OsStr::new(".."));
    let depth = walker::separator_count(&path) - walker::separator_count(root) - 1;
    Entry {
        path,
        is_directory: true,
        depth,
    }
}

fn build_row(entry: Entry, y: i32) -> DisplayRow {
    let name = display_name(&entry.path);
    let (size_text, permission_text, kind) = match FileInfo::probe(&entry.path) {
        Ok(info) => (
            format::size_text(info.size, entry.is_directory),
            format::permission_text(info.mode),
            classify::classify(entry.is_directory, info.mode, &name),
        ),
        Err(err) => {
            log::debug!("metadata unavailable for {}: {}", entry.path.display(), err);
            (
                format::UNKNOWN_SIZE.to_string(),
                format::UNKNOWN_PERMISSIONS.to_string(),
                classify::classify(entry.is_directory, 0, &name),
            )
        }
    };
    DisplayRow {
        name,
        depth: entry.depth,
        size_text,
        permission_text,
        kind,
        y,
        path: entry.path,
    }
}

/// Last path component as display text.
///
/// `Path::file_name` returns `None` for paths ending in `..`, but the parent
/// row needs that component verbatim.
fn display_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(other) => other.as_os_str().to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
