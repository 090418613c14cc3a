//! Error type tests
//!
//! Tests for HookError and its conversions.

use std::path::Path;

use crate::error::HookError;
use crate::error::deps::{circular, invalid_kind, unknown_unit};
use crate::error::fs::{read_failed, write_failed};
use crate::error::registry::{transport, unavailable};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = HookError::UnknownUnit {
        name: "useFoo".to_string(),
    };
    assert_eq!(err.to_string(), "Hook 'useFoo' not found in registry");
}

#[test]
fn test_error_code() {
    let err = unknown_unit("useFoo");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("hookpull::registry::unknown_unit".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: HookError = io_err.into();
    assert!(matches!(err, HookError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let err: HookError = parse_result.unwrap_err().into();
    assert!(matches!(err, HookError::ConfigParseFailed { .. }));
}

#[test]
fn test_circular_chain_rendering() {
    let chain = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    let err = circular(&chain);
    assert_eq!(err.to_string(), "Circular dependency detected: a -> b -> a");
}

#[test]
fn test_invalid_kind() {
    let err = invalid_kind("plugin");
    assert!(matches!(err, HookError::InvalidNodeKind { ref kind } if kind == "plugin"));
}

#[test]
fn test_prompt_failure_has_overwrite_help() {
    let err = HookError::PromptFailed {
        reason: "not a terminal".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("--overwrite"));
}

test_error_contains!(
    test_registry_unavailable,
    unavailable("https://example.com/registry.json", "HTTP 404"),
    "Registry unavailable",
    "https://example.com/registry.json",
    "HTTP 404"
);

test_error_contains!(
    test_transport_failure,
    transport("https://example.com/hooks/useFoo/useFoo.ts", "timed out"),
    "Failed to fetch",
    "useFoo.ts"
);

test_error_contains!(
    test_file_read_failed,
    read_failed(Path::new("/tmp/index.ts"), "permission denied"),
    "Failed to read file",
    "/tmp/index.ts"
);

test_error_contains!(
    test_file_write_failed,
    write_failed(Path::new("/tmp/useFoo.ts"), "disk full"),
    "Failed to write file",
    "disk full"
);

test_error_contains!(
    test_install_incomplete,
    HookError::InstallIncomplete { failed: 2, total: 5 },
    "2 of 5"
);

test_error_contains!(
    test_configuration_missing,
    HookError::ConfigurationMissing {
        path: "/project/hookpull.json".to_string()
    },
    "Configuration file not found",
    "hookpull.json"
);
