//! Utility functions for string truncation and input discovery.
//!
//! This module provides helper functions used throughout the application:
//! - Character-safe truncation for previews and log lines
//! - `*.txt` discovery for the batch processor

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// Keep at most `max` characters of `s`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let kept = truncate_chars(s, max);
    if kept.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", kept, s.len() - kept.len())
    }
}

/// Whether a file name matches the `*.txt` glob.
pub fn is_txt_name(name: &str) -> bool {
    name.ends_with(".txt")
}

/// List regular `*.txt` files directly inside `dir`, sorted by file name.
///
/// A missing directory yields an empty list.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display()))]
pub async fn list_txt_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Input directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let matches = entry.file_name().to_str().is_some_and(is_txt_name);
        // metadata follows symlinks, so linked articles count as files
        if matches && fs::metadata(entry.path()).await?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = files.len(), "Listed article files");
    Ok(files)
}
