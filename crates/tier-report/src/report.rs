//! Grouped breakdowns over the pipeline tables.
//!
//! Tier-level figures are computed from the enriched creature table; the
//! legendary figures come from the joined table, since only it carries the
//! legendary flag.

use polars::prelude::DataFrame;
use serde::Serialize;
use tier_ingest::{any_to_i64, any_to_string};
use tier_model::{
    BST_COLUMN, IS_LEGENDARY_COLUMN, MOVES_COLUMN, NAME_COLUMN, TIER_COLUMN, TIER_RANK_COLUMN, Tier,
};
use tier_transform::PipelineOutput;
use tracing::debug;

use crate::describe::Describe;
use crate::error::{ReportError, Result};

/// Share of creatures in one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierShare {
    pub tier: Tier,
    pub count: usize,
    pub percent: f64,
}

/// Distribution of a statistic within one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStats {
    pub tier: Tier,
    pub stats: Option<Describe>,
}

/// Distribution of `bst` for legendary or non-legendary creatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendaryStats {
    pub is_legendary: bool,
    pub stats: Option<Describe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: Tier,
    pub count: usize,
}

/// One row of the joined-table preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub name: String,
    pub tier: Tier,
    pub bst: i64,
    pub tier_rank: i64,
    pub is_legendary: bool,
}

/// Everything the analysis prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierReport {
    pub creature_rows: usize,
    pub joined_rows: usize,
    pub move_reference_rows: usize,
    pub tier_distribution: Vec<TierShare>,
    pub bst_by_tier: Vec<TierStats>,
    pub moves_by_tier: Vec<TierStats>,
    pub bst_by_legendary: Vec<LegendaryStats>,
    pub legendary_by_tier: Vec<TierCount>,
    pub preview: Vec<PreviewRow>,
}

/// Builds every section of the report.
///
/// `preview_rows` caps the number of joined rows copied into
/// [`TierReport::preview`].
pub fn build_report(output: &PipelineOutput, preview_rows: usize) -> Result<TierReport> {
    let report = TierReport {
        creature_rows: output.creatures.height(),
        joined_rows: output.joined.height(),
        move_reference_rows: output.move_reference.height(),
        tier_distribution: tier_distribution(&output.creatures)?,
        bst_by_tier: bst_by_tier(&output.creatures)?,
        moves_by_tier: moves_by_tier(&output.creatures)?,
        bst_by_legendary: bst_by_legendary(&output.joined)?,
        legendary_by_tier: legendary_by_tier(&output.joined)?,
        preview: preview(&output.joined, preview_rows)?,
    };
    debug!(
        creature_rows = report.creature_rows,
        joined_rows = report.joined_rows,
        preview_rows = report.preview.len(),
        "built report"
    );
    Ok(report)
}

/// Creature count and percentage per tier, every tier listed.
pub fn tier_distribution(creatures: &DataFrame) -> Result<Vec<TierShare>> {
    let tiers = tier_values(creatures)?;
    let total = tiers.len();
    Ok(Tier::ALL
        .into_iter()
        .map(|tier| {
            let count = tiers.iter().filter(|row| **row == tier).count();
            let percent = if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            };
            TierShare {
                tier,
                count,
                percent,
            }
        })
        .collect())
}

/// `bst` distribution per tier.
pub fn bst_by_tier(creatures: &DataFrame) -> Result<Vec<TierStats>> {
    let tiers = tier_values(creatures)?;
    let bst = integer_values(creatures, BST_COLUMN)?;
    Ok(group_by_tier(&tiers, &bst))
}

/// Distribution of move-set sizes per tier.
pub fn moves_by_tier(creatures: &DataFrame) -> Result<Vec<TierStats>> {
    let tiers = tier_values(creatures)?;
    let moves = creatures.column(MOVES_COLUMN)?.list()?;
    let sizes: Vec<i64> = moves
        .into_iter()
        .map(|set| set.map_or(0, |set| set.len() as i64))
        .collect();
    Ok(group_by_tier(&tiers, &sizes))
}

/// `bst` distribution split by the legendary flag, non-legendary first.
pub fn bst_by_legendary(joined: &DataFrame) -> Result<Vec<LegendaryStats>> {
    let flags = legendary_values(joined)?;
    let bst = integer_values(joined, BST_COLUMN)?;
    Ok([false, true]
        .into_iter()
        .map(|is_legendary| {
            let values: Vec<f64> = flags
                .iter()
                .zip(&bst)
                .filter(|(flag, _)| **flag == is_legendary)
                .map(|(_, value)| *value as f64)
                .collect();
            LegendaryStats {
                is_legendary,
                stats: Describe::from_values(&values),
            }
        })
        .collect())
}

/// Number of legendary joined rows in each tier.
pub fn legendary_by_tier(joined: &DataFrame) -> Result<Vec<TierCount>> {
    let flags = legendary_values(joined)?;
    let tiers = tier_values(joined)?;
    Ok(Tier::ALL
        .into_iter()
        .map(|tier| TierCount {
            tier,
            count: tiers
                .iter()
                .zip(&flags)
                .filter(|(row, flag)| **row == tier && **flag)
                .count(),
        })
        .collect())
}

/// The first `limit` joined rows.
pub fn preview(joined: &DataFrame, limit: usize) -> Result<Vec<PreviewRow>> {
    let head = joined.head(Some(limit));
    let names = head.column(NAME_COLUMN)?;
    let tiers = tier_values(&head)?;
    let bst = integer_values(&head, BST_COLUMN)?;
    let ranks = integer_values(&head, TIER_RANK_COLUMN)?;
    let flags = legendary_values(&head)?;

    let mut rows = Vec::with_capacity(head.height());
    for idx in 0..head.height() {
        rows.push(PreviewRow {
            name: any_to_string(names.get(idx)?),
            tier: tiers[idx],
            bst: bst[idx],
            tier_rank: ranks[idx],
            is_legendary: flags[idx],
        });
    }
    Ok(rows)
}

fn group_by_tier(tiers: &[Tier], values: &[i64]) -> Vec<TierStats> {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            let sample: Vec<f64> = tiers
                .iter()
                .zip(values)
                .filter(|(row, _)| **row == tier)
                .map(|(_, value)| *value as f64)
                .collect();
            TierStats {
                tier,
                stats: Describe::from_values(&sample),
            }
        })
        .collect()
}

fn tier_values(df: &DataFrame) -> Result<Vec<Tier>> {
    let labels = df.column(TIER_COLUMN)?.str()?;
    labels
        .into_iter()
        .enumerate()
        .map(|(row, label)| {
            label
                .and_then(|label| label.parse::<Tier>().ok())
                .ok_or_else(|| invalid(TIER_COLUMN, row, label.unwrap_or_default()))
        })
        .collect()
}

fn integer_values(df: &DataFrame, column: &str) -> Result<Vec<i64>> {
    let values = df.column(column)?.i64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| value.ok_or_else(|| invalid(column, row, "")))
        .collect()
}

/// Any non-zero flag counts as legendary.
fn legendary_values(df: &DataFrame) -> Result<Vec<bool>> {
    let flags = df.column(IS_LEGENDARY_COLUMN)?;
    (0..df.height())
        .map(|row| {
            let value = flags.get(row)?;
            match any_to_i64(value.clone()) {
                Some(flag) => Ok(flag != 0),
                None => Err(invalid(IS_LEGENDARY_COLUMN, row, &any_to_string(value))),
            }
        })
        .collect()
}

fn invalid(column: &str, row: usize, value: &str) -> ReportError {
    ReportError::InvalidValue {
        column: column.to_string(),
        row,
        value: value.to_string(),
    }
}
