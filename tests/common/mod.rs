//! Common test utilities for hookpull integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory plus a local registry mirror served over `file://`
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root
    pub path: PathBuf,
    /// Registry mirror root; `registry.json` lives directly inside it
    pub mirror: PathBuf,
}

impl TestProject {
    /// Create an empty project and an empty mirror
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("app");
        let mirror = temp.path().join("mirror");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&mirror).expect("Failed to create mirror directory");
        Self { temp, path, mirror }
    }

    /// Project with `@/*` mapped to `src/*` and a config pointing at the mirror
    pub fn configured() -> Self {
        let project = Self::new();
        project.write_file(
            "tsconfig.json",
            r#"{
  // generated by a framework template
  "compilerOptions": {
    "baseUrl": ".",
    "paths": { "@/*": ["./src/*"], },
  },
}"#,
        );
        project.write_config(true);
        project
    }

    /// Write `hookpull.json` pointing at the mirror
    pub fn write_config(&self, typescript: bool) {
        let config = serde_json::json!({
            "typescript": typescript,
            "aliases": { "hooks": "@/hooks", "utils": "@/lib/utils" },
            "registry": self.registry_url(),
        });
        self.write_file("hookpull.json", &config.to_string());
    }

    /// `file://` URL of the mirror's registry document
    pub fn registry_url(&self) -> String {
        file_url(&self.mirror.join("registry.json"))
    }

    /// Write the registry document
    pub fn write_registry(&self, registry: &serde_json::Value) {
        write(&self.mirror.join("registry.json"), &registry.to_string());
    }

    /// Write a source file into the mirror, relative to its root
    pub fn write_source(&self, path: &str, content: &str) {
        write(&self.mirror.join(path), content);
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `hookpull` command rooted at this project
    pub fn cmd(&self) -> Command {
        let mut cmd = hookpull_cmd();
        cmd.arg("--cwd").arg(&self.path);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn hookpull_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hookpull").unwrap();
    cmd.env_remove("HOOKPULL_CWD")
        .env_remove("HOOKPULL_REGISTRY")
        .env_remove("RUST_LOG");
    cmd
}

pub fn file_url(path: &Path) -> String {
    reqwest::Url::from_file_path(path)
        .expect("Failed to build file URL")
        .to_string()
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
