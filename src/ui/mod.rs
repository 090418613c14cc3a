//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while files are fetched and written
//! - Interactive prompts (see [`prompt`])
//!
//! All progress reporting goes through the [`ProgressReporter`] trait, so the
//! installer can run with a spinner on a terminal or silently in tests.

pub mod prompt;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use prompt::{InquirePrompter, Prompter};

/// Progress reporter trait for the install loop
pub trait ProgressReporter {
    /// Show `message` as the current activity
    fn set_message(&mut self, message: &str);

    /// Hide progress output so a prompt can take the terminal
    fn pause(&mut self);

    /// Show progress output again after [`ProgressReporter::pause`]
    fn resume(&mut self);

    /// Clear progress output after the last file
    fn finish(&mut self);
}

/// Spinner shown while files are installed
#[derive(Default)]
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
    message: String,
    paused: bool,
}

impl SpinnerProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(&mut self) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map(|s| s.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]))
        {
            pb.set_style(style);
        }
        pb.set_message(self.message.clone());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }
}

impl ProgressReporter for SpinnerProgressReporter {
    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
        if self.paused {
            return;
        }
        match self.spinner {
            Some(ref pb) => pb.set_message(self.message.clone()),
            None => self.spawn(),
        }
    }

    fn pause(&mut self) {
        self.paused = true;
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn resume(&mut self) {
        self.paused = false;
        if self.spinner.is_none() {
            self.spawn();
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation used in tests and when output is not a terminal.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn set_message(&mut self, _message: &str) {}

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn finish(&mut self) {}
}
