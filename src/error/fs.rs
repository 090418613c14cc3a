//! File system errors

use std::path::Path;

use super::HookError;

/// Creates a read error for `path`
pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> HookError {
    HookError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> HookError {
    HookError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
