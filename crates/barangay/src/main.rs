//! `brms` - CLI for the barangay record management system
//!
//! Each invocation works on a fresh session: the stores start from the
//! sample data (unless disabled in the configuration) and are dropped when
//! the command finishes.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use barangay::cli::{
    AyudaCommand, Cli, Command, ConfigCommand, ListArgs, OutputFormat, ReportCommand,
    ResidentsCommand,
};
use barangay::export::{to_csv, DirectoryHost, DownloadHost, NoDownloadHost};
use barangay::report::{build_rows, export_report, export_report_as, DateRange, ReportKind};
use barangay::{init_logging, AyudaDraft, AyudaRecord, Config, Registry, Resident, ResidentDraft};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Residents(cmd) => {
            let mut registry = Registry::from_config(&config.store)?;
            handle_residents(&mut registry, cmd)
        }
        Command::Ayuda(cmd) => {
            let mut registry = Registry::from_config(&config.store)?;
            handle_ayuda(&mut registry, cmd)
        }
        Command::Report(cmd) => {
            let registry = Registry::from_config(&config.store)?;
            handle_report(&config, &registry, cmd)
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_residents(registry: &mut Registry, cmd: ResidentsCommand) -> anyhow::Result<()> {
    match cmd {
        ResidentsCommand::List(args) => print_residents(registry, &args)?,
        ResidentsCommand::Add(args) => {
            let resident = registry.residents.add(ResidentDraft::from(args))?;
            println!(
                "Resident Added Successfully: {} has been registered as a new resident (id {})",
                resident.name, resident.id
            );
            println!();
            print_residents(
                registry,
                &ListArgs {
                    search: None,
                    format: OutputFormat::Table,
                },
            )?;
        }
        ResidentsCommand::Edit { id } => {
            println!("{}", registry.residents.acknowledge_edit(id)?);
            println!("[Editing not yet implemented]");
        }
        ResidentsCommand::Delete { id } => {
            println!("{}", registry.residents.acknowledge_delete(id)?);
            println!("[Deletion not yet implemented]");
        }
    }
    Ok(())
}

fn handle_ayuda(registry: &mut Registry, cmd: AyudaCommand) -> anyhow::Result<()> {
    match cmd {
        AyudaCommand::List(args) => print_ayuda(registry, &args)?,
        AyudaCommand::Add(args) => {
            let record = registry.ayuda.add(AyudaDraft::from(args))?;
            println!(
                "Ayuda Record Added: new {} record for {} has been created (id {})",
                record.kind, record.recipient, record.id
            );
            println!();
            print_ayuda(
                registry,
                &ListArgs {
                    search: None,
                    format: OutputFormat::Table,
                },
            )?;
        }
    }
    Ok(())
}

fn print_residents(registry: &Registry, args: &ListArgs) -> anyhow::Result<()> {
    let residents = registry
        .residents
        .search_default(args.search.as_deref().unwrap_or(""));

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&residents)?),
        OutputFormat::Plain => {
            println!("Resident Records ({})", residents.len());
            for r in &residents {
                println!(
                    "#{} {} ({}) - {} - {} - {} - registered {}",
                    r.id, r.name, r.age, r.address, r.phone, r.status, r.date_registered
                );
            }
        }
        OutputFormat::Table => {
            println!("Resident Records ({})", residents.len());
            print_table(
                &["ID", "Name", "Age", "Address", "Phone", "Status", "Registered"],
                residents.iter().map(|r| resident_cells(r)).collect(),
            );
        }
    }
    Ok(())
}

fn print_ayuda(registry: &Registry, args: &ListArgs) -> anyhow::Result<()> {
    let records = registry
        .ayuda
        .search_default(args.search.as_deref().unwrap_or(""));

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Plain => {
            println!("Ayuda Records ({})", records.len());
            for r in &records {
                println!(
                    "#{} {} - {} - ₱{} - {} - {}{}",
                    r.id,
                    r.recipient,
                    r.kind,
                    r.amount,
                    r.date_distributed,
                    r.status,
                    if r.notes.is_empty() {
                        String::new()
                    } else {
                        format!(" - {}", r.notes)
                    }
                );
            }
        }
        OutputFormat::Table => {
            println!("Ayuda Records ({})", records.len());
            print_table(
                &["ID", "Recipient", "Type", "Amount", "Date", "Status", "Notes"],
                records.iter().map(|r| ayuda_cells(r)).collect(),
            );
        }
    }
    Ok(())
}

fn resident_cells(r: &Resident) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.name.clone(),
        r.age.to_string(),
        r.address.clone(),
        r.phone.clone(),
        r.status.to_string(),
        r.date_registered.to_string(),
    ]
}

fn ayuda_cells(r: &AyudaRecord) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.recipient.clone(),
        r.kind.to_string(),
        format!("₱{}", r.amount),
        r.date_distributed.to_string(),
        r.status.to_string(),
        r.notes.clone(),
    ]
}

fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!(
        "{}",
        render(headers.iter().map(|h| (*h).to_string()).collect())
    );
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        println!("{}", render(row));
    }
}

fn handle_report(config: &Config, registry: &Registry, cmd: ReportCommand) -> anyhow::Result<()> {
    let range = DateRange::new(cmd.from, cmd.to)?;
    let today = Local::now().date_naive();

    let (kind, report_name) = match (&cmd.name, &cmd.kind) {
        (Some(name), _) => (ReportKind::from_report_name(name), name.clone()),
        (None, kind) => {
            let kind: ReportKind = kind.as_deref().unwrap_or("").parse()?;
            (kind, format!("{kind} report"))
        }
    };

    if cmd.stdout {
        println!("{}", to_csv(&build_rows(kind, registry, range)));
        return Ok(());
    }

    let mut host: Box<dyn DownloadHost> = if config.export.enabled {
        let dir = cmd.out_dir.clone().unwrap_or_else(|| config.output_dir());
        Box::new(DirectoryHost::new(dir))
    } else {
        Box::new(NoDownloadHost)
    };

    let summary = if cmd.name.is_some() {
        export_report(&report_name, registry, range, host.as_mut(), today)?
    } else {
        export_report_as(kind, &report_name, registry, range, host.as_mut(), today)?
    };

    if summary.downloaded {
        let dir = cmd.out_dir.unwrap_or_else(|| config.output_dir());
        println!(
            "Report Downloaded: {} ({} rows) saved to {}",
            report_name,
            summary.rows,
            dir.join(&summary.filename).display()
        );
    } else {
        println!(
            "Report generated: {} ({} rows); downloads are disabled, nothing saved",
            report_name, summary.rows
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Store]");
                println!("  Seed sample data:   {}", config.store.seed_sample_data);
                println!();
                println!("[Export]");
                println!("  Enabled:            {}", config.export.enabled);
                println!("  Output directory:   {}", config.output_dir().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::check_file(&path).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
