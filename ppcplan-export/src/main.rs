//! PPC Plan bulksheet exporter
//!
//! Reads a workspace saved by the planner and writes the Amazon Bulksheets 2.0
//! document for it.
//!
//! Usage:
//!   ppcplan-export --workspace plan.json --out plan.xlsx

use anyhow::Result;
use clap::Parser;
use ppcplan_export::{ExportArgs, ExportOutcome, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = ExportArgs::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match run(&args)? {
        ExportOutcome::Written(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        ExportOutcome::Skipped => {
            println!("Nothing to export: no Sponsored Products, Brands or Display campaigns.");
        }
    }
    Ok(())
}
