//! Registry and transport errors

use super::HookError;

/// Creates a registry unavailable error
pub fn unavailable(url: impl Into<String>, reason: impl std::fmt::Display) -> HookError {
    HookError::RegistryUnavailable {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a transport failure for a single URL
pub fn transport(url: impl Into<String>, reason: impl std::fmt::Display) -> HookError {
    HookError::TransportFailure {
        url: url.into(),
        reason: reason.to_string(),
    }
}
