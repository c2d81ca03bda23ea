//! Tier analysis transformations.
//!
//! This crate turns the raw source tables into the analysis-ready tables:
//!
//! - **normalize**: positional column renaming, sub-tier collapsing, tier
//!   filtering, base statistic typing
//! - **moves**: parsing raw move-list fields into move sets
//! - **enrich**: the derived `bst` and `tier_rank` columns
//! - **join**: inner join with the attributes table on `name`
//! - **pipeline**: the stages above run in order

pub mod enrich;
pub mod error;
pub mod join;
pub mod moves;
pub mod normalize;
pub mod pipeline;

pub use enrich::{enrich_creatures, tier_ranks};
pub use error::{Result, TransformError};
pub use join::{ATTRIBUTE_SUFFIX, join_attributes};
pub use moves::parse_move_list;
pub use normalize::normalize_creatures;
pub use pipeline::{PipelineOutput, run_pipeline};
