//! Command-line argument parsing
//!
//! Supports:
//! - The interactive browser (default when no subcommand is given)
//! - One-shot filesystem commands (search, ls, drives, copy, move, ...)
//! - Configuration maintenance (`config path|show|reset|check`)

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A fast, keyboard-driven file browser
#[derive(Parser, Debug)]
#[command(name = "fastfm", version, about = "A fast, keyboard-driven file browser")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Use this configuration file instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub browse: BrowseArgs,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct BrowseArgs {
    /// Directory to open at startup
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Root directory for keyword searches (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    pub search_root: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Open the interactive browser
    Browse(BrowseArgs),

    /// Search recursively for files whose name contains KEYWORD
    Search {
        keyword: String,
        /// Directory to search from
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },

    /// List a directory
    Ls {
        path: PathBuf,
        #[arg(long)]
        json: bool,
        /// Include hidden entries
        #[arg(short, long)]
        all: bool,
    },

    /// List drives and mounted volumes
    Drives {
        #[arg(long)]
        json: bool,
    },

    /// Copy files or directories into TARGET
    Copy {
        #[arg(required = true, num_args = 1..)]
        sources: Vec<PathBuf>,
        target: PathBuf,
    },

    /// Move files or directories into TARGET
    Move {
        #[arg(required = true, num_args = 1..)]
        sources: Vec<PathBuf>,
        target: PathBuf,
    },

    /// Create an empty file
    Touch { path: PathBuf },

    /// Create a directory (and any missing parents)
    Mkdir { path: PathBuf },

    /// Open a file or directory with the system handler
    Open { path: PathBuf },

    /// Print a text file after the preview checks
    Preview { path: PathBuf },

    /// Inspect or reset the key configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the configuration file location
    Path,
    /// Print the effective configuration
    Show,
    /// Overwrite the configuration with defaults
    Reset,
    /// Report malformed and conflicting bindings
    Check,
}

impl CliArgs {
    /// The subcommand to run; no subcommand means browse
    pub fn into_command(self) -> (CliCommand, Option<PathBuf>) {
        let command = self
            .command
            .unwrap_or_else(|| CliCommand::Browse(self.browse));
        (command, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut argv = vec!["fastfm"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap().into_command().0
    }

    #[test]
    fn test_no_args_browses() {
        assert_eq!(parse(&[]), CliCommand::Browse(BrowseArgs::default()));
    }

    #[test]
    fn test_bare_path_browses_there() {
        match parse(&["/tmp"]) {
            CliCommand::Browse(args) => assert_eq!(args.path, Some(PathBuf::from("/tmp"))),
            other => panic!("Expected Browse, got {:?}", other),
        }
    }

    #[test]
    fn test_search_subcommand() {
        assert_eq!(
            parse(&["search", "report", "--root", "/data", "--json"]),
            CliCommand::Search {
                keyword: "report".to_string(),
                root: Some(PathBuf::from("/data")),
                json: true,
            }
        );
    }

    #[test]
    fn test_copy_takes_last_as_target() {
        match parse(&["copy", "a.txt", "b.txt", "out"]) {
            CliCommand::Copy { sources, target } => {
                assert_eq!(sources, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert_eq!(target, PathBuf::from("out"));
            }
            other => panic!("Expected Copy, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_requires_source() {
        assert!(CliArgs::try_parse_from(["fastfm", "copy", "out"]).is_err());
    }

    #[test]
    fn test_config_check() {
        assert_eq!(
            parse(&["config", "check"]),
            CliCommand::Config {
                action: ConfigAction::Check
            }
        );
    }

    #[test]
    fn test_global_config_override() {
        let args = CliArgs::try_parse_from(["fastfm", "ls", ".", "--config", "/tmp/k.json"]).unwrap();
        let (_, config) = args.into_command();
        assert_eq!(config, Some(PathBuf::from("/tmp/k.json")));
    }
}
