//! Add command implementation
//!
//! The add process:
//! 1. Load hookpull.json and resolve both install roots
//! 2. Fetch the registry
//! 3. Pick the hooks (arguments, --all, or interactive selection)
//! 4. Resolve dependencies and build file plans
//! 5. Install files one by one and print a summary
//!
//! Steps 1-4 touch no files; any failure there aborts the run.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::AddArgs;
use crate::config::ProjectConfig;
use crate::error::{HookError, Result, deps};
use crate::installer::{InstallReport, Installer};
use crate::packages::PackageManager;
use crate::paths::{PathMapper, TsconfigPathMapper};
use crate::planner::{PlanContext, build_plans};
use crate::registry::{self, DEFAULT_REGISTRY_URL, Registry};
use crate::resolver;
use crate::transport::{HttpTransport, Transport};
use crate::ui::{
    InquirePrompter, ProgressReporter, Prompter, SilentProgressReporter, SpinnerProgressReporter,
};

/// Collaborators the add flow runs against
pub struct Session<'a> {
    pub root: &'a Path,
    pub transport: &'a dyn Transport,
    pub prompter: &'a dyn Prompter,
    pub progress: &'a mut dyn ProgressReporter,
}

/// What an add run did
#[derive(Debug)]
pub struct AddOutcome {
    pub report: InstallReport,
    /// Third-party packages the installed hooks need
    pub packages: Vec<String>,
}

/// Run add command
pub fn run(cwd: Option<PathBuf>, args: &AddArgs) -> Result<()> {
    let root = project_root(cwd)?;
    let transport = HttpTransport::new()?;
    let prompter = InquirePrompter;

    let mut spinner = SpinnerProgressReporter::new();
    let mut silent = SilentProgressReporter;
    let progress: &mut dyn ProgressReporter = if console::Term::stderr().is_term() {
        &mut spinner
    } else {
        &mut silent
    };

    let session = Session {
        root: &root,
        transport: &transport,
        prompter: &prompter,
        progress,
    };

    let Some(outcome) = execute(session, args)? else {
        println!("No hooks selected. Nothing to install.");
        return Ok(());
    };

    print_summary(&root, &outcome);
    outcome.report.into_result().map(|_| ())
}

/// Resolve and install the requested hooks
///
/// Returns `None` when the interactive selection came back empty.
pub fn execute(session: Session<'_>, args: &AddArgs) -> Result<Option<AddOutcome>> {
    let config = ProjectConfig::load(session.root)?;

    let mapper = TsconfigPathMapper::load(session.root)?;
    let hooks_root = mapper.resolve(&config.aliases.hooks)?;
    let utils_root = mapper.resolve(&config.aliases.utils)?;

    let registry_url = args
        .registry
        .clone()
        .or_else(|| config.registry.clone())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
    let registry = registry::load_registry(session.transport, &registry_url)?;

    let roots = select_roots(&registry, args, session.prompter)?;
    if roots.is_empty() {
        return Ok(None);
    }
    info!(hooks = ?roots, "adding");

    let graph = resolver::resolve(&registry, &roots)?;
    let repo_base_url = registry::repo_base_url(&registry_url);
    let plan = build_plans(
        &graph,
        &PlanContext {
            hooks_root: &hooks_root,
            utils_root: &utils_root,
            repo_base_url: &repo_base_url,
            extension: config.extension(),
        },
    );

    let report = Installer::new(session.transport, session.prompter, session.progress)
        .with_conflict_check(config.conflict_check)
        .with_overwrite(args.overwrite)
        .install(&plan.files);

    Ok(Some(AddOutcome {
        report,
        packages: plan.packages,
    }))
}

/// Hooks to install, in the order they will be resolved
fn select_roots(registry: &Registry, args: &AddArgs, prompter: &dyn Prompter) -> Result<Vec<String>> {
    if args.all {
        return Ok(registry.names());
    }

    if args.names.is_empty() {
        return prompter.select_units(&registry.names());
    }

    if let Some(missing) = args.names.iter().find(|name| !registry.contains(name)) {
        return Err(deps::unknown_unit(missing.as_str()));
    }
    Ok(args.names.clone())
}

fn project_root(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    dunce::canonicalize(&dir).map_err(|e| HookError::IoError {
        message: format!("Cannot open project directory {}: {e}", dir.display()),
    })
}

fn print_summary(root: &Path, outcome: &AddOutcome) {
    let green = Style::new().green();
    let red = Style::new().red();
    let dim = Style::new().dim();
    let report = &outcome.report;

    for result in report.installed() {
        let shown = result
            .destination
            .strip_prefix(root)
            .unwrap_or(&result.destination);
        println!("{} {}", green.apply_to("+"), shown.display());
    }

    for notice in report.skip_notices() {
        println!("{}", dim.apply_to(notice));
    }

    for (result, error) in report.failed() {
        eprintln!("{} {}: {}", red.apply_to("✗"), result.name, error);
    }

    println!(
        "\nAdded {} file(s), skipped {}, failed {}",
        report.installed().count(),
        report.skipped().count(),
        report.failed().count()
    );

    if !outcome.packages.is_empty() {
        let manager = PackageManager::detect(root);
        println!("\nThese hooks need packages; install them with {manager}:");
        println!("  {}", dim.apply_to(manager.install_command(&outcome.packages)));
    }
}
