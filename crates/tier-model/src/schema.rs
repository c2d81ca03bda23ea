//! Canonical column names.
//!
//! The creature table is renamed positionally onto [`CREATURE_COLUMNS`], so
//! the order of that array is part of the input contract.

pub const NAME_COLUMN: &str = "name";
pub const TIER_COLUMN: &str = "tier";
pub const MOVES_COLUMN: &str = "moves";
pub const BST_COLUMN: &str = "bst";
pub const TIER_RANK_COLUMN: &str = "tier_rank";
pub const IS_LEGENDARY_COLUMN: &str = "is_legendary";

/// Creature table columns, in source order.
pub const CREATURE_COLUMNS: [&str; 12] = [
    NAME_COLUMN,
    "types",
    "abilities",
    TIER_COLUMN,
    "hp",
    "atk",
    "def",
    "spa",
    "spd",
    "spe",
    "next_evos",
    MOVES_COLUMN,
];

/// The six base statistics summed into `bst`.
pub const STAT_COLUMNS: [&str; 6] = ["hp", "atk", "def", "spa", "spd", "spe"];

/// Columns the attributes table must carry.
pub const ATTRIBUTE_REQUIRED_COLUMNS: [&str; 2] = [NAME_COLUMN, IS_LEGENDARY_COLUMN];
