//! Registry model
//!
//! The registry is a flat JSON catalogue keyed by hook name:
//!
//! ```text
//! {
//!   "useFoo": {
//!     "name": "useFoo",
//!     "hooks": ["useBar"],        // other hooks, resolved recursively
//!     "utils": ["formatDate"],    // shared helpers
//!     "local": ["parseInput"],    // helpers private to this hook
//!     "packages": ["left-pad"]    // third-party packages
//!   }
//! }
//! ```
//!
//! It is fetched once per invocation and never mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HookError, Result, registry as registry_error};
use crate::transport::Transport;

/// Registry used when neither the command line nor the project config names one
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/hookpull/registry/main/registry.json";

/// A single hook and its declared dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Display name (falls back to the registry key)
    #[serde(default)]
    pub name: String,

    /// Other hooks this hook depends on
    #[serde(default, rename = "hooks")]
    pub units: Vec<String>,

    /// Shared helpers
    #[serde(default, rename = "utils")]
    pub helpers: Vec<String>,

    /// Helpers installed next to this hook
    #[serde(default, rename = "local")]
    pub local_helpers: Vec<String>,

    /// Third-party package names
    #[serde(default)]
    pub packages: Vec<String>,
}

/// Immutable view of the catalogue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl Registry {
    /// Build a registry from already-decoded entries
    pub fn new(entries: impl IntoIterator<Item = (String, RegistryEntry)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, mut entry)| {
                if entry.name.is_empty() {
                    entry.name.clone_from(&key);
                }
                (key, entry)
            })
            .collect();
        Self { entries }
    }

    /// Decode a registry document fetched from `url`
    ///
    /// # Errors
    ///
    /// Returns `RegistryUnavailable` when the document is not an object of
    /// entries or contains no entries at all.
    pub fn from_json(url: &str, value: serde_json::Value) -> Result<Self> {
        let entries: BTreeMap<String, RegistryEntry> = serde_json::from_value(value)
            .map_err(|e| registry_error::unavailable(url, format!("malformed registry: {e}")))?;

        if entries.is_empty() {
            return Err(registry_error::unavailable(url, "registry is empty"));
        }

        Ok(Self::new(entries))
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All hook names, sorted
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetch and decode the registry at `url`
///
/// # Errors
///
/// Any transport or decoding failure is reported as `RegistryUnavailable`.
pub fn load_registry(transport: &dyn Transport, url: &str) -> Result<Registry> {
    debug!(url, "fetching registry");

    let document = transport.fetch_json(url).map_err(|e| match e {
        HookError::TransportFailure { reason, .. } => registry_error::unavailable(url, reason),
        other => registry_error::unavailable(url, other),
    })?;

    let registry = Registry::from_json(url, document)?;
    debug!(url, hooks = registry.len(), "registry loaded");
    Ok(registry)
}

/// Base URL that hook and helper sources are served from
///
/// This is the registry URL with its final path segment removed, so a registry
/// at `https://host/repo/main/registry.json` serves sources from
/// `https://host/repo/main`.
pub fn repo_base_url(registry_url: &str) -> String {
    let trimmed = registry_url.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((base, _)) if !base.ends_with(':') && !base.ends_with('/') => base.to_string(),
        _ => trimmed.to_string(),
    }
}
