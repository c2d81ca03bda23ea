use anyhow::{Context, Result};
use tracing::info_span;

use tier_cli::pipeline::run_analysis;
use tier_ingest::DatasetPaths;
use tier_report::TierReport;

use crate::cli::ReportArgs;
use crate::summary::tiers_table;

pub fn run_tiers() -> Result<()> {
    println!("{}", tiers_table());
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<TierReport> {
    let span = info_span!("analysis", data_dir = %args.data_dir.display());
    let _guard = span.enter();
    let paths = DatasetPaths::in_dir(&args.data_dir)
        .with_creatures(args.creatures.clone())
        .with_moves(args.moves.clone())
        .with_attributes(args.attributes.clone());
    run_analysis(&paths, args.preview_rows)
        .with_context(|| format!("analyze {}", args.data_dir.display()))
}

pub fn print_json(report: &TierReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}
