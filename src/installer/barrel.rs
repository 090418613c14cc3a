//! Barrel index maintenance
//!
//! Each install root keeps an `index.{ext}` that re-exports its modules. Lines
//! are only ever appended, and only when no existing line matches exactly.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, fs as fs_error};

use super::file_ops::ensure_parent_dir;

/// Append `line` to the index at `index_path` unless a line already matches it
///
/// Creates the index (and its directory) when missing. Returns `true` if the
/// line was appended.
pub fn ensure_export(index_path: &Path, line: &str) -> Result<bool> {
    if !index_path.exists() {
        ensure_parent_dir(index_path)?;
        std::fs::write(index_path, "").map_err(|e| fs_error::write_failed(index_path, e))?;
    }

    let content =
        std::fs::read_to_string(index_path).map_err(|e| fs_error::read_failed(index_path, e))?;
    let wanted = line.trim_end_matches(['\r', '\n']);
    if content.lines().any(|existing| existing == wanted) {
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(index_path)
        .map_err(|e| fs_error::write_failed(index_path, e))?;
    // Keep the new export off an unterminated last line
    if !content.is_empty() && !content.ends_with('\n') {
        file.write_all(b"\n")
            .map_err(|e| fs_error::write_failed(index_path, e))?;
    }
    file.write_all(line.as_bytes())
        .map_err(|e| fs_error::write_failed(index_path, e))?;

    Ok(true)
}
