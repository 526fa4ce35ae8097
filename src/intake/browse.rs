//! Browse dialog: list pickable source files under a directory.
//!
//! Walks with the `ignore` crate so `.gitignore`d and hidden entries never
//! show up, and keeps only files whose extension the dialog accepts.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

use super::{DiskFile, has_extension};

/// Default directory depth for the dialog listing.
pub const DEFAULT_BROWSE_DEPTH: usize = 3;

/// Errors from listing a directory.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// One pickable file in the dialog.
#[derive(Debug, Clone)]
pub struct BrowseEntry {
    /// Path relative to the browsed directory, for display.
    pub display: String,
    pub file: DiskFile,
}

/// List files under `dir` with an extension in `accept`, at most
/// `max_depth` levels deep, sorted by relative path.
pub fn browse(
    dir: &Path,
    max_depth: usize,
    accept: &[&str],
) -> Result<Vec<BrowseEntry>, BrowseError> {
    if !dir.is_dir() {
        return Err(BrowseError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkBuilder::new(dir)
        .hidden(true)
        .git_ignore(true)
        .max_depth(Some(max_depth))
        .build();

    let mut entries: Vec<BrowseEntry> = walker
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| has_extension(entry.path(), accept))
        .map(|entry| {
            let path = entry.into_path();
            let display = path
                .strip_prefix(dir)
                .unwrap_or(path.as_path())
                .display()
                .to_string();
            BrowseEntry {
                display,
                file: DiskFile::new(path),
            }
        })
        .collect();

    entries.sort_by(|a, b| a.display.cmp(&b.display));
    tracing::debug!(dir = %dir.display(), count = entries.len(), "listed browse entries");
    Ok(entries)
}
