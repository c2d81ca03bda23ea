//! Analysis run with explicit stages.
//!
//! 1. **Ingest**: read the three source tables
//! 2. **Transform**: normalize, enrich, join
//! 3. **Report**: grouped statistics over the resulting tables
//!
//! The first failing stage aborts the run; no partial report is produced.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tier_ingest::{DatasetPaths, SourceTables, load_sources};
use tier_report::{TierReport, build_report};
use tier_transform::{PipelineOutput, run_pipeline};

/// Stage 1: load every input table.
pub fn ingest(paths: &DatasetPaths) -> Result<SourceTables> {
    let span = info_span!("ingest", creatures = %paths.creatures.path.display());
    let _guard = span.enter();
    load_sources(paths).context("load input tables")
}

/// Stage 2: normalize, enrich, and join.
pub fn transform(sources: SourceTables) -> Result<PipelineOutput> {
    run_pipeline(sources).context("transform creature table")
}

/// Stage 3: summarize the pipeline tables.
pub fn report(output: &PipelineOutput, preview_rows: usize) -> Result<TierReport> {
    let span = info_span!("report");
    let _guard = span.enter();
    build_report(output, preview_rows).context("build report")
}

/// Runs every stage in order.
pub fn run_analysis(paths: &DatasetPaths, preview_rows: usize) -> Result<TierReport> {
    let start = Instant::now();
    let sources = ingest(paths)?;
    let output = transform(sources)?;
    let report = report(&output, preview_rows)?;
    info!(
        creature_rows = report.creature_rows,
        joined_rows = report.joined_rows,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(report)
}
