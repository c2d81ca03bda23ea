//! Derived columns on the normalized creature table.

use polars::prelude::*;
use tier_model::{BST_COLUMN, STAT_COLUMNS, TIER_COLUMN, TIER_RANK_COLUMN, Tier};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Appends `bst` and `tier_rank` to a normalized creature table.
///
/// `bst` is the plain integer sum of the six base statistics. Zero or
/// negative statistics are summed as they are.
///
/// # Errors
///
/// [`TransformError::InvariantViolation`] when any row carries a tier outside
/// the canonical six, which normalization should have made impossible.
pub fn enrich_creatures(normalized: &DataFrame) -> Result<DataFrame> {
    for stat in STAT_COLUMNS {
        let dtype = normalized.column(stat)?.dtype();
        if !dtype.is_integer() {
            return Err(TransformError::InvalidStatistic {
                column: stat.to_string(),
                message: format!("expected an integer column, found {dtype}"),
            });
        }
    }
    let ranks = tier_ranks(normalized)?;

    let bst = STAT_COLUMNS[1..]
        .iter()
        .fold(col(STAT_COLUMNS[0]).cast(DataType::Int64), |acc, stat| {
            acc + col(*stat).cast(DataType::Int64)
        });
    let mut enriched = normalized
        .clone()
        .lazy()
        .with_column(bst.alias(BST_COLUMN))
        .collect()?;
    enriched.with_column(Int64Chunked::from_vec(TIER_RANK_COLUMN.into(), ranks).into_column())?;

    debug!(rows = enriched.height(), "enriched creature table");
    Ok(enriched)
}

/// Maps every row's tier onto its rank.
pub fn tier_ranks(df: &DataFrame) -> Result<Vec<i64>> {
    df.column(TIER_COLUMN)?
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, label)| {
            label
                .and_then(|label| label.parse::<Tier>().ok())
                .map(|tier| tier.rank())
                .ok_or_else(|| TransformError::InvariantViolation {
                    row,
                    tier: label.map(str::to_string),
                })
        })
        .collect()
}
