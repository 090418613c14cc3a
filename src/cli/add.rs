use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add hooks by name:\n    hookpull add useToggle useDebounce\n\n\
                   Add everything:\n    hookpull add --all\n\n\
                   Use another registry:\n    hookpull add useToggle --registry https://example.com/registry.json\n\n\
                   Replace existing files without asking:\n    hookpull add useToggle --overwrite")]
pub struct AddArgs {
    /// Hooks to add. If none are given, pick them interactively
    pub names: Vec<String>,

    /// Add every hook in the registry
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Registry URL (overrides the project config)
    #[arg(long, env = "HOOKPULL_REGISTRY", value_name = "URL")]
    pub registry: Option<String>,

    /// Overwrite existing files without asking
    #[arg(long, short = 'o')]
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> super::AddArgs {
        let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Add(args) => args,
        }
    }

    #[test]
    fn test_cli_parsing_add_names() {
        let args = parse(&["hookpull", "add", "useFoo", "useBar"]);
        assert_eq!(args.names, vec!["useFoo", "useBar"]);
        assert!(!args.all);
        assert!(!args.overwrite);
    }

    #[test]
    fn test_cli_parsing_add_no_names() {
        let args = parse(&["hookpull", "add"]);
        assert!(args.names.is_empty());
    }

    #[test]
    fn test_cli_parsing_add_with_options() {
        let args = parse(&[
            "hookpull",
            "add",
            "--all",
            "--overwrite",
            "--registry",
            "https://example.com/registry.json",
        ]);
        assert!(args.all);
        assert!(args.overwrite);
        assert_eq!(
            args.registry.as_deref(),
            Some("https://example.com/registry.json")
        );
    }

    #[test]
    fn test_cli_parsing_short_flags() {
        let args = parse(&["hookpull", "add", "-a", "-o"]);
        assert!(args.all);
        assert!(args.overwrite);
    }
}
