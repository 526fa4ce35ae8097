//! Parsing of file paths dropped onto a terminal.
//!
//! Terminal emulators deliver a drag-and-drop as text: the path, shell-quoted
//! or backslash-escaped when it contains spaces, sometimes as a `file://`
//! URI, and several files separated by whitespace.

use std::path::PathBuf;

use url::Url;

/// Split a dropped line into paths, in drop order.
///
/// Unbalanced quoting falls back to the whole trimmed line as one path.
pub fn parse_dropped_paths(line: &str) -> Vec<PathBuf> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let tokens = shlex::split(trimmed).unwrap_or_else(|| vec![trimmed.to_string()]);

    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| file_uri_path(&t).unwrap_or_else(|| PathBuf::from(t)))
        .collect()
}

/// Local path of a `file:` URI. `None` for anything else, including
/// URIs that name a remote host.
fn file_uri_path(token: &str) -> Option<PathBuf> {
    if !token.starts_with("file:") {
        return None;
    }
    let url = Url::parse(token).ok()?;
    match url.to_file_path() {
        Ok(path) => Some(path),
        Err(()) => {
            tracing::debug!(uri = token, "file URI does not map to a local path");
            None
        }
    }
}
