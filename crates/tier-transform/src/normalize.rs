//! Creature table normalization.
//!
//! Produces the canonical creature table from the raw `;`-separated input:
//!
//! 1. rename columns positionally onto [`CREATURE_COLUMNS`]
//! 2. collapse sub-tiers via [`TIER_REWRITES`](tier_model::TIER_REWRITES)
//! 3. keep only rows in one of the six canonical tiers
//! 4. type the base statistics as `Int64`
//! 5. parse `moves` into a list of distinct move names

use std::borrow::Cow;

use polars::prelude::*;
use tier_model::{
    CREATURE_COLUMNS, MOVES_COLUMN, STAT_COLUMNS, TIER_COLUMN, Tier, collapse_tier,
};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::moves::parse_move_list;

/// Builds the canonical creature table. The input is left untouched.
///
/// # Errors
///
/// [`TransformError::SchemaMismatch`] when the raw table does not have
/// exactly twelve columns, [`TransformError::InvalidStatistic`] when a base
/// statistic is missing or not integral.
pub fn normalize_creatures(raw: &DataFrame) -> Result<DataFrame> {
    if raw.width() != CREATURE_COLUMNS.len() {
        return Err(TransformError::SchemaMismatch {
            expected: CREATURE_COLUMNS.len(),
            found: raw.width(),
        });
    }

    let mut df = rename_columns(raw)?;
    let rewritten = collapse_tier_column(&mut df)?;
    let mut df = retain_canonical_tiers(&df)?;
    let dropped = raw.height() - df.height();
    debug!(rewritten, dropped, kept = df.height(), "normalized tiers");

    cast_stat_columns(&mut df)?;
    parse_moves_column(&mut df)?;
    Ok(df)
}

fn rename_columns(raw: &DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = raw
        .get_column_names()
        .into_iter()
        .zip(CREATURE_COLUMNS)
        .map(|(source, target)| col(source.clone()).alias(target))
        .collect();
    Ok(raw.clone().lazy().select(exprs).collect()?)
}

/// Rewrites sub-tier labels in place, returning how many cells changed.
fn collapse_tier_column(df: &mut DataFrame) -> Result<usize> {
    let tiers = df.column(TIER_COLUMN)?.cast(&DataType::String)?;
    let labels = tiers.str()?;
    let rewritten = labels
        .into_iter()
        .flatten()
        .filter(|label| collapse_tier(label) != *label)
        .count();
    let collapsed: StringChunked =
        labels.apply_values(|label| Cow::Borrowed(collapse_tier(label)));
    df.with_column(collapsed.with_name(TIER_COLUMN.into()).into_column())?;
    Ok(rewritten)
}

fn retain_canonical_tiers(df: &DataFrame) -> Result<DataFrame> {
    let mask: BooleanChunked = df
        .column(TIER_COLUMN)?
        .str()?
        .into_iter()
        .map(|label| Some(label.is_some_and(|label| label.parse::<Tier>().is_ok())))
        .collect();
    Ok(df.filter(&mask)?)
}

fn cast_stat_columns(df: &mut DataFrame) -> Result<()> {
    for stat in STAT_COLUMNS {
        let source = df.column(stat)?;
        if source.dtype().is_float()
            && let Some(value) = source
                .cast(&DataType::Float64)?
                .f64()?
                .into_iter()
                .flatten()
                .find(|value| !value.is_finite() || value.fract() != 0.0)
        {
            return Err(TransformError::InvalidStatistic {
                column: stat.to_string(),
                message: format!("non-integral value {value}"),
            });
        }
        let typed = source
            .strict_cast(&DataType::Int64)
            .map_err(|e| TransformError::InvalidStatistic {
                column: stat.to_string(),
                message: e.to_string(),
            })?;
        if typed.null_count() > 0 {
            return Err(TransformError::InvalidStatistic {
                column: stat.to_string(),
                message: format!("{} missing values", typed.null_count()),
            });
        }
        df.with_column(typed)?;
    }
    Ok(())
}

fn parse_moves_column(df: &mut DataFrame) -> Result<()> {
    let raw = df.column(MOVES_COLUMN)?.cast(&DataType::String)?;
    let sets: Vec<Series> = raw
        .str()?
        .into_iter()
        .map(|field| {
            let moves: Vec<String> = field
                .map(parse_move_list)
                .unwrap_or_default()
                .into_iter()
                .collect();
            Series::new(PlSmallStr::EMPTY, moves)
        })
        .collect();
    let moves = if sets.is_empty() {
        Series::new_empty(
            MOVES_COLUMN.into(),
            &DataType::List(Box::new(DataType::String)),
        )
    } else {
        Series::new(MOVES_COLUMN.into(), sets)
    };
    df.with_column(moves)?;
    Ok(())
}
