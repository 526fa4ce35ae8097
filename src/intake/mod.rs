//! File intake: how a single source file gets into a review cycle.
//!
//! Two gestures resolve to the same selection: dropping a file (in a
//! terminal, pasting or dragging its path) and picking it from the browse
//! dialog. The dialog is restricted to [`ALLOWED_EXTENSIONS`]; drops and
//! explicit paths are not.

pub mod browse;
pub mod drop_zone;
pub mod paste;

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

pub use drop_zone::{DialogRequest, DragEvent, DropZone, EventResponse};

/// Source-code extensions offered by the browse dialog.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "py", "java", "go", "rs", "cs", "html", "css", "scss", "rb", "php",
    "c", "cpp", "h", "hpp",
];

/// Returns `true` when the path's extension is on the dialog allow-list.
pub fn is_allowed(path: &Path) -> bool {
    has_extension(path, ALLOWED_EXTENSIONS)
}

/// Case-insensitive extension check against `accept` (no leading dots).
pub fn has_extension(path: &Path, accept: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| accept.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// A user-selected file that has not been read yet.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Display name (no directories).
    fn name(&self) -> &str;

    /// Read the whole file as text.
    async fn read_text(&self) -> io::Result<String>;
}

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
}

impl DiskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> io::Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        // Binary input is not rejected; invalid UTF-8 becomes U+FFFD.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_matches_known_extensions() {
        assert!(is_allowed(Path::new("src/main.rs")));
        assert!(is_allowed(Path::new("App.TSX")));
        assert!(is_allowed(Path::new("include/vec.hpp")));
        assert!(!is_allowed(Path::new("notes.txt")));
        assert!(!is_allowed(Path::new("Makefile")));
    }

    #[test]
    fn has_extension_uses_given_list() {
        assert!(has_extension(Path::new("x.md"), &["md"]));
        assert!(!has_extension(Path::new("x.rs"), &["md"]));
    }

    #[test]
    fn disk_file_name_is_file_component() {
        let file = DiskFile::new("/tmp/project/src/lib.rs");
        assert_eq!(file.name(), "lib.rs");
        assert_eq!(file.path(), Path::new("/tmp/project/src/lib.rs"));
    }

    #[tokio::test]
    async fn disk_file_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.py");
        std::fs::write(&path, "print('hi')\n").unwrap();

        let text = DiskFile::new(&path).read_text().await.unwrap();
        assert_eq!(text, "print('hi')\n");
    }

    #[tokio::test]
    async fn disk_file_reads_binary_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0x6f]).unwrap();

        let text = DiskFile::new(&path).read_text().await.unwrap();
        assert_eq!(text, "fo\u{FFFD}o");
    }

    #[tokio::test]
    async fn disk_file_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DiskFile::new(dir.path().join("gone.rs")).read_text().await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
