//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::record::{AyudaDraft, AyudaStatus, AyudaType, ResidentDraft, ResidentStatus};

/// Resident registry commands.
#[derive(Debug, Subcommand)]
pub enum ResidentsCommand {
    /// List residents, optionally filtered by name or address
    List(ListArgs),

    /// Register a new resident
    Add(AddResidentArgs),

    /// Edit a resident (acknowledgement only)
    Edit {
        /// Resident id
        id: u32,
    },

    /// Delete a resident (acknowledgement only)
    Delete {
        /// Resident id
        id: u32,
    },
}

/// Ayuda distribution commands.
#[derive(Debug, Subcommand)]
pub enum AyudaCommand {
    /// List ayuda records, optionally filtered by recipient or type
    List(ListArgs),

    /// Record a new ayuda distribution
    Add(AddAyudaArgs),
}

/// Arguments shared by the list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Add-resident form.
///
/// Fields are optional here so that an incomplete form reaches the store's
/// own validation.
#[derive(Debug, Args)]
pub struct AddResidentArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Block and lot address
    #[arg(long)]
    pub address: Option<String>,

    /// Contact number
    #[arg(long)]
    pub phone: Option<String>,

    /// Residency status
    #[arg(long, value_enum, default_value = "active")]
    pub status: ResidentStatusArg,
}

impl From<AddResidentArgs> for ResidentDraft {
    fn from(args: AddResidentArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            age: args.age,
            address: args.address.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            status: args.status.into(),
        }
    }
}

/// New-ayuda-record form.
#[derive(Debug, Args)]
pub struct AddAyudaArgs {
    /// Recipient name
    #[arg(long)]
    pub recipient: Option<String>,

    /// Kind of assistance
    #[arg(long = "type", value_enum)]
    pub kind: Option<AyudaTypeArg>,

    /// Amount in pesos
    #[arg(long)]
    pub amount: Option<u64>,

    /// Distribution status
    #[arg(long, value_enum, default_value = "pending")]
    pub status: AyudaStatusArg,

    /// Additional notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<AddAyudaArgs> for AyudaDraft {
    fn from(args: AddAyudaArgs) -> Self {
        Self {
            recipient: args.recipient.unwrap_or_default(),
            kind: args.kind.map(Into::into),
            amount: args.amount,
            status: args.status.into(),
            notes: args.notes,
        }
    }
}

/// Report export arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Report name, e.g. "Monthly Residents Report"; also names the file
    pub name: Option<String>,

    /// Report type, used when no name is given
    /// (residents, ayuda, demographics, summary)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Only include records created on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only include records created on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Directory to write the CSV file into (overrides configuration)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of saving it
    #[arg(long)]
    pub stdout: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Resident status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResidentStatusArg {
    /// Active resident
    Active,
    /// Inactive resident
    Inactive,
}

impl From<ResidentStatusArg> for ResidentStatus {
    fn from(arg: ResidentStatusArg) -> Self {
        match arg {
            ResidentStatusArg::Active => Self::Active,
            ResidentStatusArg::Inactive => Self::Inactive,
        }
    }
}

/// Ayuda type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AyudaTypeArg {
    /// Food Package
    Food,
    /// Medical Assistance
    Medical,
    /// Education Allowance
    Education,
    /// Emergency Relief
    Emergency,
    /// Senior Citizen Aid
    Senior,
}

impl From<AyudaTypeArg> for AyudaType {
    fn from(arg: AyudaTypeArg) -> Self {
        match arg {
            AyudaTypeArg::Food => Self::FoodPackage,
            AyudaTypeArg::Medical => Self::MedicalAssistance,
            AyudaTypeArg::Education => Self::EducationAllowance,
            AyudaTypeArg::Emergency => Self::EmergencyRelief,
            AyudaTypeArg::Senior => Self::SeniorCitizenAid,
        }
    }
}

/// Ayuda status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AyudaStatusArg {
    /// Not yet handed out
    Pending,
    /// Handed out
    Distributed,
}

impl From<AyudaStatusArg> for AyudaStatus {
    fn from(arg: AyudaStatusArg) -> Self {
        match arg {
            AyudaStatusArg::Pending => Self::Pending,
            AyudaStatusArg::Distributed => Self::Distributed,
        }
    }
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Aligned table
    Table,
    /// JSON output
    Json,
}
