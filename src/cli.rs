use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command line surface. Without arguments the Flutter layout is created in
/// the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "flutter-skeleton",
    version,
    about = "Create the Flutter lib/ directory skeleton"
)]
pub struct Cli {
    /// Create the layout under this directory instead of the current one.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Print what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    /// Do not report each created path.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_targets_current_directory() {
        let cli = Cli::try_parse_from(["flutter-skeleton"]).unwrap();
        assert!(cli.chdir.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["flutter-skeleton", "-C", "app", "-n", "-vv", "-q"]).unwrap();
        assert_eq!(cli.chdir, Some(PathBuf::from("app")));
        assert!(cli.dry_run);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["flutter-skeleton", "lib"]).is_err());
    }
}
