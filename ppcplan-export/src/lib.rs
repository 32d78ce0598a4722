//! Command-line export of a saved planner workspace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ppcplan_bulksheet::writer::{default_file_name, write_csv_dir, write_xlsx};
use ppcplan_bulksheet::{BulksheetConfig, BulksheetExporter};
use ppcplan_types::{StartDate, Workspace};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One workbook with a tab per sheet
    #[default]
    Xlsx,
    /// A directory with one CSV file per sheet
    Csv,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "ppcplan-export")]
#[command(about = "Export a PPC plan workspace as an Amazon Bulksheets 2.0 document")]
pub struct ExportArgs {
    /// Workspace JSON saved by the planner
    #[arg(short, long)]
    pub workspace: PathBuf,

    /// Output file (xlsx) or directory (csv); derived from brand and date if omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// Exporter config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start date as YYYYMMDD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// What an export run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Files written, in sheet order for CSV.
    Written(Vec<PathBuf>),
    /// The workspace was absent or had nothing to export. No file was touched.
    Skipped,
}

/// Loads the workspace, assembles the bulk document and writes it out.
pub fn run(args: &ExportArgs) -> Result<ExportOutcome> {
    let json = std::fs::read_to_string(&args.workspace)
        .with_context(|| format!("Failed to read workspace {:?}", args.workspace))?;
    let workspace = Workspace::from_json(&json)
        .with_context(|| format!("Failed to parse workspace {:?}", args.workspace))?;

    let start_date = match &args.date {
        Some(date) => StartDate::parse(date)?,
        None => StartDate::today(),
    };
    let config = args
        .config
        .as_deref()
        .map(BulksheetConfig::load_from)
        .unwrap_or_default();

    let exporter = BulksheetExporter::with_config(start_date, config);
    let Some(document) = exporter.export(workspace.as_ref()) else {
        info!("Nothing to export from {:?}", args.workspace);
        return Ok(ExportOutcome::Skipped);
    };

    let brand = workspace.as_ref().map(|ws| ws.brand.as_str()).unwrap_or_default();
    let default_name = default_file_name(brand, start_date);

    match args.format {
        OutputFormat::Xlsx => {
            let path = args.out.clone().unwrap_or_else(|| PathBuf::from(&default_name));
            write_xlsx(&document, &path)
                .with_context(|| format!("Failed to write workbook {:?}", path))?;
            info!("Wrote {} sheets to {:?}", document.len(), path);
            Ok(ExportOutcome::Written(vec![path]))
        }
        OutputFormat::Csv => {
            let dir = args.out.clone().unwrap_or_else(|| {
                PathBuf::from(default_name.trim_end_matches(".xlsx"))
            });
            let paths = write_csv_dir(&document, &dir)
                .with_context(|| format!("Failed to write CSV files to {:?}", dir))?;
            info!("Wrote {} CSV files to {:?}", paths.len(), dir);
            Ok(ExportOutcome::Written(paths))
        }
    }
}
