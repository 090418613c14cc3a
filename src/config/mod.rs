//! Project configuration (hookpull.json)
//!
//! ```json
//! {
//!   "typescript": true,
//!   "aliases": { "hooks": "@/hooks", "utils": "@/lib/utils" },
//!   "registry": "https://example.com/registry.json",
//!   "conflictCheck": "file"
//! }
//! ```
//!
//! `registry` and `conflictCheck` are optional.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{HookError, Result};
use crate::installer::ConflictCheck;
use crate::planner::SourceExtension;

/// Config file name, looked up in the project root
pub const CONFIG_FILE: &str = "hookpull.json";

/// Logical install roots, resolved through the path mapper
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Aliases {
    pub hooks: String,
    pub utils: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Install `.ts` sources instead of `.js`
    #[serde(default = "default_typescript")]
    pub typescript: bool,

    pub aliases: Aliases,

    /// Registry URL overriding the built-in default
    #[serde(default)]
    pub registry: Option<String>,

    #[serde(default)]
    pub conflict_check: ConflictCheck,
}

fn default_typescript() -> bool {
    true
}

impl ProjectConfig {
    /// Load `hookpull.json` from `root`
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` when the file does not exist, `ConfigParseFailed`
    /// when it cannot be read or decoded.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(HookError::ConfigurationMissing {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| HookError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_json(&content).map_err(|e| match e {
            HookError::ConfigParseFailed { reason, .. } => HookError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;

        debug!(config = %path.display(), typescript = config.typescript, "loaded project config");
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn extension(&self) -> SourceExtension {
        SourceExtension::from_typed(self.typescript)
    }
}
