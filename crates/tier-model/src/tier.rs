//! Canonical competitive tiers.
//!
//! Six tiers ordered from strongest to weakest. Borderline sub-tiers
//! (`OUBL`, `UUBL`, ...) are folded into the tier above them before any
//! other processing; see [`TIER_REWRITES`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Competitive tier, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Uber,
    OU,
    UU,
    RU,
    NU,
    PU,
}

impl Tier {
    /// All tiers in rank order.
    pub const ALL: [Tier; 6] = [Tier::Uber, Tier::OU, Tier::UU, Tier::RU, Tier::NU, Tier::PU];

    /// Returns the label as it appears in the source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Uber => "Uber",
            Tier::OU => "OU",
            Tier::UU => "UU",
            Tier::RU => "RU",
            Tier::NU => "NU",
            Tier::PU => "PU",
        }
    }

    /// Ordinal strength: 0 for `Uber` through 5 for `PU`.
    pub fn rank(&self) -> i64 {
        match self {
            Tier::Uber => 0,
            Tier::OU => 1,
            Tier::UU => 2,
            Tier::RU => 3,
            Tier::NU => 4,
            Tier::PU => 5,
        }
    }

    /// Inverse of [`Tier::rank`].
    pub fn from_rank(rank: i64) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.rank() == rank)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ModelError;

    /// Exact, case-sensitive match on the canonical label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ModelError::UnknownTier(s.to_string()))
    }
}

/// A single sub-tier substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRewrite {
    pub from: &'static str,
    pub to: Tier,
}

/// Sub-tier labels collapsed into canonical tiers, applied in this order.
///
/// No target is also a source, so each rewrite is independent of the others.
pub const TIER_REWRITES: [TierRewrite; 5] = [
    TierRewrite {
        from: "OUBL",
        to: Tier::Uber,
    },
    TierRewrite {
        from: "UUBL",
        to: Tier::OU,
    },
    TierRewrite {
        from: "RUBL",
        to: Tier::UU,
    },
    TierRewrite {
        from: "NUBL",
        to: Tier::RU,
    },
    TierRewrite {
        from: "PUBL",
        to: Tier::NU,
    },
];

/// Applies [`TIER_REWRITES`] to a raw label.
///
/// Labels without a rewrite are returned unchanged, including ones that are
/// not canonical tiers at all (`LC`, `AG`, ...).
pub fn collapse_tier(label: &str) -> &str {
    TIER_REWRITES
        .iter()
        .find(|rewrite| rewrite.from == label)
        .map_or(label, |rewrite| rewrite.to.as_str())
}
