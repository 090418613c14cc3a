//! Turning a resolved dependency graph into file install plans
//!
//! | kind        | destination                                | barrel index                         |
//! |-------------|--------------------------------------------|--------------------------------------|
//! | hook        | `{hooks}/{name}/{name}.{ext}`              | `{hooks}/index.{ext}`                |
//! | helper      | `{utils}/{name}.{ext}`                     | `{utils}/index.{ext}`                |
//! | local helper| `{hooks}/{parent}/helpers/{name}.{ext}`    | `{hooks}/{parent}/helpers/index.{ext}` |
//!
//! Packages are never written to disk; they are collected for the user to
//! install with their own package manager.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::resolver::{DependencyGraph, DependencyKind, DependencyNode};

/// Source file extension, chosen once per project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceExtension {
    TypeScript,
    JavaScript,
}

impl SourceExtension {
    pub fn from_typed(typed: bool) -> Self {
        if typed {
            SourceExtension::TypeScript
        } else {
            SourceExtension::JavaScript
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceExtension::TypeScript => "ts",
            SourceExtension::JavaScript => "js",
        }
    }
}

/// Everything needed to install one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInstallPlan {
    pub name: String,
    pub kind: DependencyKind,
    pub source_url: String,
    pub destination_path: PathBuf,
    pub index_path: PathBuf,
    /// Module specifier re-exported from the barrel index, relative to it
    pub export_specifier: String,
}

impl FileInstallPlan {
    /// Directory the file is written into
    pub fn destination_dir(&self) -> &Path {
        self.destination_path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Line appended to the barrel index
    pub fn export_line(&self) -> String {
        format!("export * from './{}';\n", self.export_specifier)
    }
}

/// Where resolved files go and where they come from
#[derive(Debug, Clone)]
pub struct PlanContext<'a> {
    pub hooks_root: &'a Path,
    pub utils_root: &'a Path,
    pub repo_base_url: &'a str,
    pub extension: SourceExtension,
}

/// File plans plus the third-party packages left over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    pub files: Vec<FileInstallPlan>,
    pub packages: Vec<String>,
}

/// Build install plans for every node in `graph`, preserving its order
pub fn build_plans(graph: &DependencyGraph, ctx: &PlanContext<'_>) -> InstallPlan {
    let mut plan = InstallPlan::default();

    for node in graph.iter() {
        match file_plan(node, ctx) {
            Some(file) => plan.files.push(file),
            None => plan.packages.push(node.name.clone()),
        }
    }

    debug!(
        files = plan.files.len(),
        packages = plan.packages.len(),
        "built install plans"
    );
    plan
}

fn file_plan(node: &DependencyNode, ctx: &PlanContext<'_>) -> Option<FileInstallPlan> {
    let ext = ctx.extension.as_str();
    let base = ctx.repo_base_url.trim_end_matches('/');
    let name = node.name.as_str();
    let file_name = format!("{name}.{ext}");
    let index_name = format!("index.{ext}");

    let (destination_path, index_path, source_url) = match node.kind {
        DependencyKind::Unit => (
            ctx.hooks_root.join(name).join(&file_name),
            ctx.hooks_root.join(&index_name),
            format!("{base}/hooks/{name}/{file_name}"),
        ),
        DependencyKind::Helper => (
            ctx.utils_root.join(&file_name),
            ctx.utils_root.join(&index_name),
            format!("{base}/utils/helpers/{file_name}"),
        ),
        DependencyKind::LocalHelper => {
            let helpers_dir = ctx.hooks_root.join(&node.parent_unit).join("helpers");
            (
                helpers_dir.join(&file_name),
                helpers_dir.join(&index_name),
                format!("{base}/hooks/{}/helpers/{file_name}", node.parent_unit),
            )
        }
        DependencyKind::Package => return None,
    };

    Some(FileInstallPlan {
        name: name.to_string(),
        kind: node.kind,
        source_url,
        destination_path,
        index_path,
        export_specifier: name.to_string(),
    })
}
