//! Command-line interface for barangay.
//!
//! This module provides the CLI structure for the `brms` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddAyudaArgs, AddResidentArgs, AyudaCommand, AyudaStatusArg, AyudaTypeArg, ConfigCommand,
    ListArgs, OutputFormat, ReportCommand, ResidentStatusArg, ResidentsCommand,
};

/// brms - Barangay Record Management System
///
/// Manage the resident registry and ayuda distributions for a session and
/// export reports as CSV.
#[derive(Debug, Parser)]
#[command(name = "brms")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the resident registry
    #[command(subcommand)]
    Residents(ResidentsCommand),

    /// Manage ayuda distributions
    #[command(subcommand)]
    Ayuda(AyudaCommand),

    /// Export a report as CSV
    Report(ReportCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "brms");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["brms", "-q", "config", "path"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);

        let cli = Cli::try_parse_from(["brms", "-vv", "config", "path"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);

        let cli = Cli::try_parse_from(["brms", "config", "path"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_parse_residents_list_with_search() {
        let cli =
            Cli::try_parse_from(["brms", "residents", "list", "--search", "juan", "-f", "json"])
                .unwrap();
        match cli.command {
            Command::Residents(ResidentsCommand::List(args)) => {
                assert_eq!(args.search.as_deref(), Some("juan"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_residents_add() {
        let cli = Cli::try_parse_from([
            "brms",
            "residents",
            "add",
            "--name",
            "Maria Santos",
            "--age",
            "28",
            "--address",
            "Block 2",
            "--phone",
            "0918",
        ])
        .unwrap();
        match cli.command {
            Command::Residents(ResidentsCommand::Add(args)) => {
                assert_eq!(args.age, Some(28));
                assert_eq!(args.status, ResidentStatusArg::Active);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_residents_add_allows_incomplete_form() {
        let cli = Cli::try_parse_from(["brms", "residents", "add", "--name", "Juan"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Residents(ResidentsCommand::Add(_))
        ));
    }

    #[test]
    fn test_parse_residents_delete() {
        let cli = Cli::try_parse_from(["brms", "residents", "delete", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Residents(ResidentsCommand::Delete { id: 2 })
        ));
    }

    #[test]
    fn test_parse_ayuda_add() {
        let cli = Cli::try_parse_from([
            "brms",
            "ayuda",
            "add",
            "--recipient",
            "Pedro",
            "--type",
            "emergency",
            "--amount",
            "500",
            "--status",
            "distributed",
        ])
        .unwrap();
        match cli.command {
            Command::Ayuda(AyudaCommand::Add(args)) => {
                assert_eq!(args.kind, Some(AyudaTypeArg::Emergency));
                assert_eq!(args.status, AyudaStatusArg::Distributed);
                assert_eq!(args.notes, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_with_range() {
        let cli = Cli::try_parse_from([
            "brms",
            "report",
            "Ayuda Distribution Report",
            "--from",
            "2024-07-01",
            "--to",
            "2024-07-31",
        ])
        .unwrap();
        match cli.command {
            Command::Report(args) => {
                assert_eq!(args.name.as_deref(), Some("Ayuda Distribution Report"));
                assert_eq!(args.from.map(|d| d.to_string()).as_deref(), Some("2024-07-01"));
                assert!(!args.stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_rejects_bad_date() {
        assert!(Cli::try_parse_from(["brms", "report", "x", "--from", "July 1"]).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["brms", "-c", "/custom/config.toml", "config", "show"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
