//! Path alias resolution
//!
//! Maps the logical install roots from the project config (e.g. `@/hooks`) to
//! directories, using `compilerOptions.paths` from `tsconfig.json` or
//! `jsconfig.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use normpath::{BasePathBuf, PathExt};
use serde::Deserialize;
use tracing::debug;

use crate::error::{HookError, Result, fs};

/// Module resolution configs checked in order
const COMPILER_CONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];

/// Resolves a logical alias to an absolute directory
pub trait PathMapper {
    fn resolve(&self, alias: &str) -> Result<PathBuf>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerConfig {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    base_url: Option<String>,
    #[serde(default)]
    paths: BTreeMap<String, Vec<String>>,
}

/// Alias lookup against `compilerOptions.paths`
#[derive(Debug, Clone)]
pub struct TsconfigPathMapper {
    root: PathBuf,
    base_dir: PathBuf,
    paths: BTreeMap<String, Vec<String>>,
}

impl TsconfigPathMapper {
    /// Load the first compiler config found in `root`
    ///
    /// A project without one can still use relative aliases (`./src/hooks`).
    pub fn load(root: &Path) -> Result<Self> {
        for file_name in COMPILER_CONFIG_FILES {
            let path = root.join(file_name);
            if !path.is_file() {
                continue;
            }
            debug!(config = %path.display(), "loading path aliases");
            let content = std::fs::read_to_string(&path).map_err(|e| fs::read_failed(&path, e))?;
            return Self::parse(root, &content).map_err(|e| match e {
                HookError::ConfigParseFailed { reason, .. } => HookError::ConfigParseFailed {
                    path: path.display().to_string(),
                    reason,
                },
                other => other,
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            base_dir: root.to_path_buf(),
            paths: BTreeMap::new(),
        })
    }

    /// Parse compiler config `content` for a project rooted at `root`
    pub fn parse(root: &Path, content: &str) -> Result<Self> {
        let cleaned = strip_trailing_commas(&strip_comments(content));
        let config: CompilerConfig = serde_json::from_str(&cleaned)?;
        let options = config.compiler_options;

        let base_dir = match options.base_url {
            Some(ref base) => normalize(&root.join(base)),
            None => root.to_path_buf(),
        };

        Ok(Self {
            root: root.to_path_buf(),
            base_dir,
            paths: options.paths,
        })
    }

    /// Longest matching pattern and the text captured by its `*`
    fn best_match<'a>(&'a self, alias: &'a str) -> Option<(&'a [String], &'a str)> {
        let mut best: Option<(usize, &[String], &str)> = None;

        for (pattern, targets) in &self.paths {
            let candidate = match pattern.strip_suffix('*') {
                Some(prefix) => alias
                    .strip_prefix(prefix)
                    .map(|rest| (prefix.len(), rest)),
                // Exact patterns beat any wildcard of the same length
                None => (pattern == alias).then_some((pattern.len() + 1, "")),
            };

            if let Some((score, captured)) = candidate {
                if best.is_none_or(|(s, _, _)| score > s) {
                    best = Some((score, targets.as_slice(), captured));
                }
            }
        }

        best.map(|(_, targets, captured)| (targets, captured))
    }
}

impl PathMapper for TsconfigPathMapper {
    fn resolve(&self, alias: &str) -> Result<PathBuf> {
        if alias == "." || alias.starts_with("./") || alias.starts_with("../") {
            return Ok(normalize(&self.root.join(alias)));
        }

        let (targets, captured) =
            self.best_match(alias)
                .ok_or_else(|| HookError::PathResolutionFailure {
                    alias: alias.to_string(),
                    reason: "no matching entry in compilerOptions.paths".to_string(),
                })?;

        let target = targets
            .first()
            .ok_or_else(|| HookError::PathResolutionFailure {
                alias: alias.to_string(),
                reason: "path mapping has no targets".to_string(),
            })?;

        let resolved = normalize(&self.base_dir.join(target.replacen('*', captured, 1)));
        debug!(alias, path = %resolved.display(), "resolved alias");
        Ok(resolved)
    }
}

/// Resolve `path` the way the filesystem will
///
/// Install roots usually do not exist yet, so the longest existing ancestor is
/// normalized and the missing components are appended back onto it.
fn normalize(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return dunce::simplified(norm.as_path()).to_path_buf();
    }

    let mut existing = path;
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }

    let mut resolved = existing
        .normalize()
        .map(BasePathBuf::into_path_buf)
        .or_else(|_| dunce::canonicalize(existing))
        .unwrap_or_else(|_| existing.to_path_buf());
    resolved = dunce::simplified(&resolved).to_path_buf();
    resolved.extend(missing.iter().rev());
    resolved
}

/// Remove `//` and `/* */` comments outside of string literals
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Remove commas directly followed (ignoring whitespace) by `}` or `]`
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            if c == '\\' {
                out.push(c);
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                }
                i += 2;
                continue;
            }
            if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                i += 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ROOT: &str = "/project";

    fn mapper(content: &str) -> TsconfigPathMapper {
        TsconfigPathMapper::parse(Path::new(ROOT), content).unwrap()
    }

    #[test]
    fn test_wildcard_alias() {
        let m = mapper(r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#);
        assert_eq!(
            m.resolve("@/hooks").unwrap(),
            PathBuf::from("/project/src/hooks")
        );
        assert_eq!(
            m.resolve("@/lib/utils").unwrap(),
            PathBuf::from("/project/src/lib/utils")
        );
    }

    #[test]
    fn test_base_url_is_applied() {
        let m = mapper(
            r#"{ "compilerOptions": { "baseUrl": "./app", "paths": { "~/*": ["*"] } } }"#,
        );
        assert_eq!(m.resolve("~/hooks").unwrap(), PathBuf::from("/project/app/hooks"));
    }

    #[test]
    fn test_longest_pattern_wins() {
        let m = mapper(
            r#"{ "compilerOptions": { "paths": {
                "@/*": ["./src/*"],
                "@/hooks/*": ["./packages/hooks/*"],
                "@hooks": ["./shared/hooks"]
            } } }"#,
        );
        assert_eq!(
            m.resolve("@/hooks/extra").unwrap(),
            PathBuf::from("/project/packages/hooks/extra")
        );
        assert_eq!(
            m.resolve("@hooks").unwrap(),
            PathBuf::from("/project/shared/hooks")
        );
    }

    /// Temporary project root, canonicalized so it compares against resolved paths
    fn temp_root() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_relative_alias_needs_no_config() {
        let (_temp, root) = temp_root();
        let app = root.join("app");
        std::fs::create_dir(&app).unwrap();

        let m = TsconfigPathMapper::parse(&app, "{}").unwrap();
        assert_eq!(m.resolve("./src/hooks").unwrap(), app.join("src/hooks"));
        assert_eq!(m.resolve("../shared").unwrap(), root.join("shared"));
        assert_eq!(m.resolve(".").unwrap(), app);
    }

    #[test]
    fn test_missing_directories_are_appended_to_existing_ancestor() {
        let (_temp, root) = temp_root();
        std::fs::create_dir_all(root.join("src")).unwrap();

        let m = TsconfigPathMapper::parse(
            &root,
            r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#,
        )
        .unwrap();
        assert_eq!(
            m.resolve("@/lib/utils").unwrap(),
            root.join("src").join("lib").join("utils")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_symlink_follows_link_target() {
        let (_temp, root) = temp_root();
        let app = root.join("app");
        std::fs::create_dir_all(root.join("shared/pkg")).unwrap();
        std::fs::create_dir(&app).unwrap();
        std::os::unix::fs::symlink(root.join("shared/pkg"), app.join("link")).unwrap();

        let m = TsconfigPathMapper::parse(&app, "{}").unwrap();
        assert_eq!(
            m.resolve("./link/../hooks").unwrap(),
            root.join("shared").join("hooks")
        );
    }

    #[test]
    fn test_unknown_alias_fails() {
        let m = mapper(r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#);
        let err = m.resolve("#hooks").unwrap_err();
        assert!(matches!(err, HookError::PathResolutionFailure { ref alias, .. } if alias == "#hooks"));
    }

    #[test]
    fn test_empty_targets_fail() {
        let m = mapper(r#"{ "compilerOptions": { "paths": { "@/*": [] } } }"#);
        assert!(matches!(
            m.resolve("@/hooks").unwrap_err(),
            HookError::PathResolutionFailure { .. }
        ));
    }

    #[test]
    fn test_comments_and_trailing_commas() {
        let m = mapper(
            r#"{
                // editor settings
                "compilerOptions": {
                    /* aliases */
                    "paths": { "@/*": ["./src/*",], },
                    "outDir": "dist//build",
                },
            }"#,
        );
        assert_eq!(
            m.resolve("@/hooks").unwrap(),
            PathBuf::from("/project/src/hooks")
        );
    }

    #[test]
    fn test_strip_comments_keeps_strings() {
        let input = r#"{"url": "https://example.com/*x*/", "q": "a\"//b"} // tail"#;
        assert_eq!(
            strip_comments(input),
            r#"{"url": "https://example.com/*x*/", "q": "a\"//b"} "#
        );
    }

    #[test]
    fn test_load_prefers_tsconfig() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("tsconfig.json"),
            r#"{ "compilerOptions": { "paths": { "@/*": ["./ts/*"] } } }"#,
        )
        .unwrap();
        std::fs::write(
            temp.path().join("jsconfig.json"),
            r#"{ "compilerOptions": { "paths": { "@/*": ["./js/*"] } } }"#,
        )
        .unwrap();

        let m = TsconfigPathMapper::load(temp.path()).unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        assert_eq!(m.resolve("@/hooks").unwrap(), root.join("ts").join("hooks"));
    }

    #[test]
    fn test_load_falls_back_to_jsconfig() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("jsconfig.json"),
            r#"{ "compilerOptions": { "paths": { "@/*": ["./js/*"] } } }"#,
        )
        .unwrap();

        let m = TsconfigPathMapper::load(temp.path()).unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        assert_eq!(m.resolve("@/hooks").unwrap(), root.join("js").join("hooks"));
    }

    #[test]
    fn test_load_reports_malformed_config_path() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("tsconfig.json"), "{ nope").unwrap();

        let err = TsconfigPathMapper::load(temp.path()).unwrap_err();
        match err {
            HookError::ConfigParseFailed { path, .. } => assert!(path.ends_with("tsconfig.json")),
            other => panic!("Expected ConfigParseFailed, got {other:?}"),
        }
    }
}
