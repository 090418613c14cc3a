//! Dependency errors

use super::HookError;

/// Creates a circular dependency error from the visited chain
pub fn circular(chain: &[String]) -> HookError {
    HookError::CycleDetected {
        chain: chain.join(" -> "),
    }
}

/// Creates an unknown unit error
pub fn unknown_unit(name: impl Into<String>) -> HookError {
    HookError::UnknownUnit { name: name.into() }
}

/// Creates an invalid node kind error
pub fn invalid_kind(kind: impl Into<String>) -> HookError {
    HookError::InvalidNodeKind { kind: kind.into() }
}
