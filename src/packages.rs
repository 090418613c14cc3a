//! Third-party package follow-up
//!
//! Hooks may need packages from the npm registry. hookpull never installs
//! them; it prints the command for the project's package manager instead.

use std::fmt;
use std::path::Path;

/// Package manager detected from the project's lockfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Lockfiles checked in order; the first one present wins
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// Detect the package manager used in `root`, defaulting to npm
    pub fn detect(root: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(file, _)| root.join(file).is_file())
            .map_or(PackageManager::Npm, |&(_, pm)| pm)
    }

    /// Command that adds `packages` to the project
    pub fn install_command(self, packages: &[String]) -> String {
        let verb = match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm add",
            PackageManager::Yarn => "yarn add",
            PackageManager::Bun => "bun add",
        };
        format!("{verb} {}", packages.join(" "))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        };
        f.write_str(name)
    }
}
