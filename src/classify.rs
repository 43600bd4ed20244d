//! Entry type classification, used by the renderer to pick a row icon.

/// Display category of a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Executable,
    Image,
    Video,
    Code,
    Other,
}

impl FileKind {
    /// Short label for headless output.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Directory => "dir",
            FileKind::Executable => "exec",
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Code => "code",
            FileKind::Other => "other",
        }
    }
}

// Matched as substrings anywhere in the filename, not as suffixes:
// `a.jpgz` counts as an image, `image.txt.bak` does not.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".tif", ".tiff", ".gif"];
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".mkv", ".avi", ".webm"];
const CODE_EXTENSIONS: &[&str] = &[".h", ".c", ".cpp", ".py", ".java", ".js"];

/// Classify an entry from metadata already fetched; no I/O here.
///
/// Checks run in order and the first match wins: directory, any exec bit,
/// then the extension lists. A directory named `script.py` is a
/// [`FileKind::Directory`].
pub fn classify(is_directory: bool, mode: u32, name: &str) -> FileKind {
    if is_directory {
        return FileKind::Directory;
    }
    if mode & 0o111 != 0 {
        return FileKind::Executable;
    }
    if IMAGE_EXTENSIONS.iter().any(|ext| name.contains(ext)) {
        return FileKind::Image;
    }
    if VIDEO_EXTENSIONS.iter().any(|ext| name.contains(ext)) {
        return FileKind::Video;
    }
    if CODE_EXTENSIONS.iter().any(|ext| name.contains(ext)) {
        return FileKind::Code;
    }
    FileKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_wins_over_everything() {
        assert_eq!(classify(true, 0o777, "script.py"), FileKind::Directory);
        assert_eq!(classify(true, 0, "photo.png"), FileKind::Directory);
    }

    #[test]
    fn exec_bit_wins_over_extension() {
        assert_eq!(classify(false, 0o755, "photo.png"), FileKind::Executable);
        assert_eq!(classify(false, 0o010, "movie.mp4"), FileKind::Executable);
        assert_eq!(classify(false, 0o001, "main.c"), FileKind::Executable);
    }

    #[test]
    fn image_extensions() {
        assert_eq!(classify(false, 0o644, "photo.png"), FileKind::Image);
        assert_eq!(classify(false, 0o644, "scan.tiff"), FileKind::Image);
        assert_eq!(classify(false, 0o644, "anim.gif"), FileKind::Image);
    }

    #[test]
    fn video_and_code_extensions() {
        assert_eq!(classify(false, 0o644, "clip.webm"), FileKind::Video);
        assert_eq!(classify(false, 0o644, "lib.cpp"), FileKind::Code);
        assert_eq!(classify(false, 0o644, "App.java"), FileKind::Code);
    }

    #[test]
    fn plain_file_is_other() {
        assert_eq!(classify(false, 0o644, "readme"), FileKind::Other);
        assert_eq!(classify(false, 0o644, "notes.txt"), FileKind::Other);
    }

    #[test]
    fn extension_match_is_substring_containment() {
        // Not a suffix check: the fragment may sit anywhere in the name.
        assert_eq!(classify(false, 0o644, "a.jpgz"), FileKind::Image);
        assert_eq!(classify(false, 0o644, "photo.png.bak"), FileKind::Image);
        assert_eq!(classify(false, 0o644, "image.txt.bak"), FileKind::Other);
    }

    #[test]
    fn dot_h_matches_aggressively() {
        // `.h` is a substring of many names; that is the documented behavior.
        assert_eq!(classify(false, 0o644, "notes.html"), FileKind::Code);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(FileKind::Directory.label(), "dir");
        assert_eq!(FileKind::Other.label(), "other");
    }
}
