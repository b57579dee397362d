//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect the deployment environment and tidy up installer downloads.
#[derive(Parser)]
#[command(name = "deployenv")]
#[command(about = "Inspect the deployment environment of a packaged desktop application")]
#[command(version)]
pub struct Cli {
    /// JSON file overriding launcher, executable and installer names
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Archive the application was loaded from (defaults to the running executable)
    #[arg(long, global = true)]
    pub archive: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "deployenv",
            "--verbose",
            "--archive",
            "/opt/Chatty/app/Chatty.jar",
            "paths",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.archive,
            Some(PathBuf::from("/opt/Chatty/app/Chatty.jar"))
        );
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_scratch_path_takes_base_name() {
        let cli = Cli::parse_from(["deployenv", "scratch-path", "Chatty_installer"]);
        assert!(matches!(
            cli.command,
            Some(Commands::ScratchPath { ref base_name }) if base_name == "Chatty_installer"
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["deployenv", "sweep", "--config", "deploy.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("deploy.json")));
        assert!(matches!(cli.command, Some(Commands::Sweep)));
    }
}
