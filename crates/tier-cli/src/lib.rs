//! CLI library components for the tier analysis.

pub mod logging;
pub mod pipeline;
