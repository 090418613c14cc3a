//! Interactive prompts
//!
//! The install flow asks two questions: which hooks to add when none were
//! named, and whether to overwrite an existing install location.

use std::path::Path;

use inquire::{Confirm, MultiSelect};

use crate::error::Result;

/// Asks the user for decisions during an install
pub trait Prompter {
    /// Ask whether to overwrite what exists at `path`
    fn confirm_overwrite(&self, path: &Path) -> Result<bool>;

    /// Let the user pick hooks from `names`; an empty result means nothing was picked
    fn select_units(&self, names: &[String]) -> Result<Vec<String>>;
}

/// Terminal prompts backed by inquire
#[derive(Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        let question = format!("{} already exists. Overwrite?", path.display());
        let answer = Confirm::new(&question)
            .with_default(false)
            .with_help_message("Press 'y' to overwrite, Enter to skip")
            .prompt()?;
        Ok(answer)
    }

    fn select_units(&self, names: &[String]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Ok(vec![]);
        }

        println!();

        let selection = MultiSelect::new("Select hooks to add", names.to_vec())
            .with_page_size(10)
            .with_help_message(
                "  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel",
            )
            .prompt_skippable()?;

        Ok(selection.unwrap_or_default())
    }
}
