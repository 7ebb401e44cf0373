//! CLI argument parsing for the store maintenance binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "is")]
#[command(author, version, about = "Itinerary snapshot store maintenance", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the snapshot file path
    Path,

    /// Print the raw snapshot JSON
    Dump,

    /// Show document statistics
    Stats,

    /// Reset the snapshot to the sample itinerary
    Reset,

    /// Delete the snapshot
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_path() {
        let cli = Cli::parse_from(["is", "path"]);
        assert!(matches!(cli.command, Command::Path));
    }

    #[test]
    fn test_cli_parse_stats_with_config() {
        let cli = Cli::parse_from(["is", "-c", "/tmp/config.yml", "stats"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.yml")));
        assert!(matches!(cli.command, Command::Stats));
    }
}
