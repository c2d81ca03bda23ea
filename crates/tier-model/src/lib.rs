//! Data model for the competitive tier analysis.
//!
//! - **tier**: the six canonical tiers, their rank table, and the sub-tier
//!   rewrite table applied during normalization
//! - **schema**: canonical column names of the creature and attribute tables
//! - **error**: model-level errors

pub mod error;
pub mod schema;
pub mod tier;

pub use error::{ModelError, Result};
pub use schema::{
    ATTRIBUTE_REQUIRED_COLUMNS, BST_COLUMN, CREATURE_COLUMNS, IS_LEGENDARY_COLUMN, MOVES_COLUMN,
    NAME_COLUMN, STAT_COLUMNS, TIER_COLUMN, TIER_RANK_COLUMN,
};
pub use tier::{TIER_REWRITES, Tier, TierRewrite, collapse_tier};
