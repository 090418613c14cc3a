//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - add: Add command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;

pub use add::AddArgs;

/// hookpull - pull reusable hooks into your project
#[derive(Parser, Debug)]
#[command(
    name = "hookpull",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pull reusable hooks and their dependencies from a registry into your project",
    long_about = "hookpull copies hooks, their helpers and their sub-hooks from a JSON registry \
                  into your source tree and keeps the barrel index files up to date.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  hookpull add useToggle                 \x1b[90m# Add one hook\x1b[0m\n   \
                  hookpull add useToggle useDebounce     \x1b[90m# Add several hooks\x1b[0m\n   \
                  hookpull add --all                     \x1b[90m# Add every hook in the registry\x1b[0m\n   \
                  hookpull add                           \x1b[90m# Pick hooks interactively\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "HOOKPULL_CWD")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add hooks and their dependencies to the project
    Add(AddArgs),
}
