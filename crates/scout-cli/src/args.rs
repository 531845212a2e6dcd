//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout - persisted snapshots of a codebase")]
#[command(
    long_about = r#"Scout - persisted snapshots of a codebase

USAGE:
  scout scan [PATH]              # Scan a project (cached unless --force)
  scout show <ID>                # Print a stored scan as markdown
  scout show <ID> --json         # Print a stored scan as JSON
  scout list                     # List stored scans
  scout delete <ID>              # Remove a stored scan"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "SCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a project directory
    Scan(ScanArgs),

    /// Print a stored scan
    Show {
        /// Project ID
        id: String,

        /// Print the structured record instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// List stored scans
    List,

    /// Remove a stored scan
    Delete {
        /// Project ID
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Project ID (derived from the path when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Display name (the directory name when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Rescan even when a stored scan exists
    #[arg(long)]
    pub force: bool,

    /// Do not call the language model
    #[arg(long)]
    pub skip_llm: bool,

    /// Maximum number of files to record
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Files at or above this size are not line-counted
    #[arg(long = "max-file-size", value_name = "BYTES")]
    pub max_file_size_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::parse_from(["scout", "scan"]);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.force);
        assert!(args.max_files.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "scout",
            "scan",
            "/work/app",
            "--max-files",
            "10",
            "--max-file-size",
            "2048",
            "-v",
        ]);
        assert!(cli.verbose);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.max_files, Some(10));
        assert_eq!(args.max_file_size_bytes, Some(2048));
    }

    #[test]
    fn test_show_json() {
        let cli = Cli::parse_from(["scout", "show", "app-1234abcd", "--json"]);
        assert!(matches!(cli.command, Commands::Show { json: true, .. }));
    }
}
