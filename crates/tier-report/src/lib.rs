//! Descriptive statistics for the tier analysis.
//!
//! Consumes the pipeline tables and produces plain, serializable summaries:
//! tier shares, per-tier `bst` and move-count distributions, and legendary
//! breakdowns over the joined table.

pub mod describe;
pub mod error;
pub mod report;

pub use describe::Describe;
pub use error::{ReportError, Result};
pub use report::{
    LegendaryStats, PreviewRow, TierCount, TierReport, TierShare, TierStats, bst_by_legendary,
    bst_by_tier, build_report, legendary_by_tier, moves_by_tier, preview, tier_distribution,
};
