//! Error types and handling for hookpull
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`registry`]: registry and transport errors
//! - [`deps`]: dependency resolution errors
//! - [`fs`]: file system errors

pub mod deps;
pub mod fs;
pub mod registry;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hookpull operations
#[derive(Error, Diagnostic, Debug)]
pub enum HookError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(hookpull::config::missing),
        help("Create a hookpull.json in the project root with 'typescript' and 'aliases' entries")
    )]
    ConfigurationMissing { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(hookpull::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Registry errors
    #[error("Registry unavailable at {url}: {reason}")]
    #[diagnostic(
        code(hookpull::registry::unavailable),
        help("Check the registry URL or pass --registry <url>")
    )]
    RegistryUnavailable { url: String, reason: String },

    #[error("Hook '{name}' not found in registry")]
    #[diagnostic(
        code(hookpull::registry::unknown_unit),
        help("Run 'hookpull add' without arguments to pick from the available hooks")
    )]
    UnknownUnit { name: String },

    // Path errors
    #[error("Could not resolve path alias '{alias}': {reason}")]
    #[diagnostic(
        code(hookpull::paths::unresolved),
        help("Declare the alias under compilerOptions.paths in tsconfig.json or jsconfig.json")
    )]
    PathResolutionFailure { alias: String, reason: String },

    // Dependency errors
    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(hookpull::deps::circular),
        help("The registry declares hooks that depend on each other")
    )]
    CycleDetected { chain: String },

    #[error("Invalid dependency kind: {kind}")]
    #[diagnostic(code(hookpull::deps::invalid_kind))]
    InvalidNodeKind { kind: String },

    // Transport errors
    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(code(hookpull::transport::failed))]
    TransportFailure { url: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(hookpull::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(hookpull::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(hookpull::fs::io_error))]
    IoError { message: String },

    // Interaction errors
    #[error("Prompt failed: {reason}")]
    #[diagnostic(
        code(hookpull::ui::prompt_failed),
        help("Pass --overwrite to install without interactive confirmation")
    )]
    PromptFailed { reason: String },

    #[error("{failed} of {total} file(s) failed to install")]
    #[diagnostic(
        code(hookpull::install::incomplete),
        help("Files installed before the failure were kept; re-run the command to retry")
    )]
    InstallIncomplete { failed: usize, total: usize },
}

impl From<std::io::Error> for HookError {
    fn from(err: std::io::Error) -> Self {
        HookError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        HookError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for HookError {
    fn from(err: inquire::InquireError) -> Self {
        HookError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HookError>;
