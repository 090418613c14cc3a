//! Basic file operations for hook installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_dir, ensure_parent_dir)
//! - Writing fetched content (write_file)

use std::path::Path;

use crate::error::{Result, fs as fs_error};

/// Ensure `dir` and all its parents exist
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| fs_error::write_failed(dir, e))
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}

/// Write `bytes` to `target`, replacing any existing file
pub fn write_file(target: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(target, bytes).map_err(|e| fs_error::write_failed(target, e))
}
