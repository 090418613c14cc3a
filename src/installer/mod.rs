//! File installation for resolved hooks
//!
//! This module handles:
//! - Conflict checks with optional interactive confirmation
//! - Fetching each file through the [`Transport`]
//! - Writing files and appending barrel index exports
//!
//! Plans are installed strictly one after another. A failing plan is recorded
//! in the [`InstallReport`] and the remaining plans still run; nothing already
//! written is rolled back.

pub mod barrel;
pub mod file_ops;


use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::HookError;
use crate::error::Result;
use crate::planner::FileInstallPlan;
use crate::transport::Transport;
use crate::ui::{ProgressReporter, Prompter};

/// What counts as an existing install that needs confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictCheck {
    /// The destination file itself exists
    #[default]
    File,
    /// The destination's directory exists
    Directory,
}

/// Result of installing a single plan
#[derive(Debug)]
pub enum PlanOutcome {
    Installed,
    Skipped,
    Failed(HookError),
}

/// Outcome of one plan, keyed by what it installed
#[derive(Debug)]
pub struct PlanResult {
    pub name: String,
    pub destination: std::path::PathBuf,
    pub outcome: PlanOutcome,
}

/// Per-plan outcomes of an install run, in plan order
#[derive(Debug, Default)]
pub struct InstallReport {
    pub results: Vec<PlanResult>,
}

impl InstallReport {
    pub fn installed(&self) -> impl Iterator<Item = &PlanResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PlanOutcome::Installed))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &PlanResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PlanOutcome::Skipped))
    }

    /// Failed plans with their errors
    pub fn failed(&self) -> impl Iterator<Item = (&PlanResult, &HookError)> {
        self.results.iter().filter_map(|r| match r.outcome {
            PlanOutcome::Failed(ref e) => Some((r, e)),
            _ => None,
        })
    }

    /// One line per skipped plan, naming the flag that replaces existing files
    pub fn skip_notices(&self) -> impl Iterator<Item = String> + '_ {
        self.skipped().map(|r| {
            format!(
                "Skipped {} (run with --overwrite to replace existing files)",
                r.name
            )
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Convert into an error when any plan failed
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(HookError::InstallIncomplete {
            failed: self.failed().count(),
            total: self.results.len(),
        })
    }
}

/// Executes install plans against the local filesystem
pub struct Installer<'a> {
    transport: &'a dyn Transport,
    prompter: &'a dyn Prompter,
    progress: &'a mut dyn ProgressReporter,
    conflict_check: ConflictCheck,
    overwrite: bool,
}

impl<'a> Installer<'a> {
    /// Create a new installer
    pub fn new(
        transport: &'a dyn Transport,
        prompter: &'a dyn Prompter,
        progress: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            transport,
            prompter,
            progress,
            conflict_check: ConflictCheck::default(),
            overwrite: false,
        }
    }

    #[must_use]
    pub fn with_conflict_check(mut self, conflict_check: ConflictCheck) -> Self {
        self.conflict_check = conflict_check;
        self
    }

    /// Overwrite existing files without asking
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Install `plans` in order
    pub fn install(&mut self, plans: &[FileInstallPlan]) -> InstallReport {
        let mut report = InstallReport::default();
        let total = plans.len();

        for (i, plan) in plans.iter().enumerate() {
            self.progress
                .set_message(&format!("({}/{}) {}", i + 1, total, plan.name));

            let outcome = match self.install_plan(plan) {
                Ok(true) => PlanOutcome::Installed,
                Ok(false) => PlanOutcome::Skipped,
                Err(e) => {
                    debug!(hook = %plan.name, error = %e, "install failed");
                    PlanOutcome::Failed(e)
                }
            };

            report.results.push(PlanResult {
                name: plan.name.clone(),
                destination: plan.destination_path.clone(),
                outcome,
            });
        }

        self.progress.finish();
        report
    }

    /// Install one plan; `Ok(false)` means the user chose to skip it
    fn install_plan(&mut self, plan: &FileInstallPlan) -> Result<bool> {
        let dir = plan.destination_dir();

        if !self.overwrite {
            if let Some(existing) = self.conflict(plan) {
                if !self.confirm(existing)? {
                    debug!(hook = %plan.name, "overwrite declined");
                    return Ok(false);
                }
            }
        }

        file_ops::ensure_dir(dir)?;

        debug!(hook = %plan.name, kind = %plan.kind, url = %plan.source_url, "fetching");
        let bytes = self.transport.fetch_bytes(&plan.source_url)?;
        file_ops::write_file(&plan.destination_path, &bytes)?;

        if barrel::ensure_export(&plan.index_path, &plan.export_line())? {
            debug!(index = %plan.index_path.display(), "export added");
        }

        Ok(true)
    }

    fn conflict<'p>(&self, plan: &'p FileInstallPlan) -> Option<&'p Path> {
        let candidate = match self.conflict_check {
            ConflictCheck::File => plan.destination_path.as_path(),
            ConflictCheck::Directory => plan.destination_dir(),
        };
        candidate.exists().then_some(candidate)
    }

    /// Ask about `existing` with progress output out of the way
    fn confirm(&mut self, existing: &Path) -> Result<bool> {
        self.progress.pause();
        let answer = self.prompter.confirm_overwrite(existing);
        self.progress.resume();
        answer
    }
}
