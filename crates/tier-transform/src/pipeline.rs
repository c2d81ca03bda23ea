//! Normalize → enrich → join, in order.

use std::time::Instant;

use polars::prelude::DataFrame;
use tier_ingest::SourceTables;
use tracing::{info, info_span};

use crate::enrich::enrich_creatures;
use crate::error::Result;
use crate::join::join_attributes;
use crate::normalize::normalize_creatures;

/// Tables handed to reporting.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Canonical creature table with `bst` and `tier_rank`.
    pub creatures: DataFrame,
    /// `creatures` inner-joined with the attributes table.
    pub joined: DataFrame,
    /// Move-reference table as loaded.
    pub move_reference: DataFrame,
}

/// Runs every transformation stage; the first failure aborts the run.
pub fn run_pipeline(sources: SourceTables) -> Result<PipelineOutput> {
    let SourceTables {
        creatures,
        moves,
        attributes,
    } = sources;
    let start = Instant::now();

    let normalized = info_span!("normalize").in_scope(|| normalize_creatures(&creatures))?;
    info!(
        raw_rows = creatures.height(),
        rows = normalized.height(),
        "normalize complete"
    );

    let enriched = info_span!("enrich").in_scope(|| enrich_creatures(&normalized))?;
    info!(rows = enriched.height(), "enrich complete");

    let joined = info_span!("join").in_scope(|| join_attributes(&enriched, &attributes))?;
    info!(
        rows = joined.height(),
        attribute_rows = attributes.height(),
        duration_ms = start.elapsed().as_millis(),
        "join complete"
    );

    Ok(PipelineOutput {
        creatures: enriched,
        joined,
        move_reference: moves,
    })
}
