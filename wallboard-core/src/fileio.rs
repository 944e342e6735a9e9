//! Plain UTF-8 text file access behind the open/save dialogs.
//!
//! Both operations translate every failure (missing file, permissions,
//! non-UTF-8 bytes, disk errors) into the corresponding result object.
//! Nothing here panics or returns `Err` to the caller.

use std::path::Path;

use tracing::{debug, warn};

use crate::ipc::results::{FileReadResult, FileWriteResult};

/// Extensions offered by the open dialog next to the all-files fallback.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "json", "csv"];

/// Filters offered by the save dialog, as (name, extensions) pairs.
pub const SAVE_FILTERS: &[(&str, &[&str])] = &[
    ("Text Files", &["txt"]),
    ("CSV Files", &["csv"]),
    ("JSON Files", &["json"]),
];

/// Default file name pre-filled in the save dialog.
pub const DEFAULT_SAVE_NAME: &str = "export.txt";

/// Read `path` as UTF-8 text.
pub fn read_text_file(path: &Path) -> FileReadResult {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "file read");
            FileReadResult::ok(file_name_of(path), path.display().to_string(), content)
        }
        Err(e) => {
            warn!(path = %path.display(), "file read failed: {e}");
            FileReadResult::failure(e)
        }
    }
}

/// Write `content` to `path` as UTF-8 text, replacing any existing file.
pub fn write_text_file(path: &Path, content: &str) -> FileWriteResult {
    match std::fs::write(path, content) {
        Ok(()) => {
            debug!(path = %path.display(), bytes = content.len(), "file written");
            FileWriteResult::ok(file_name_of(path), path.display().to_string())
        }
        Err(e) => {
            warn!(path = %path.display(), "file write failed: {e}");
            FileWriteResult::failure(e)
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
