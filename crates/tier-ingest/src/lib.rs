//! Source data ingestion for the tier analysis.
//!
//! Loads the three delimited input files into Polars DataFrames before any
//! transformation runs.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tier_ingest::{DatasetPaths, load_sources};
//!
//! let paths = DatasetPaths::in_dir(Path::new("data"));
//! let sources = load_sources(&paths)?;
//! println!("{} creature rows", sources.creatures.height());
//! ```

mod error;
mod polars_utils;
mod reader;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Reading ===
pub use reader::{read_delimited_table, require_columns};

// === Source Tables ===
pub use sources::{
    ATTRIBUTES_FILE, CREATURES_FILE, DataSource, DatasetPaths, MOVES_FILE, SourceTables,
    load_sources,
};

// === AnyValue Helpers ===
pub use polars_utils::{any_to_i64, any_to_string, format_numeric, parse_i64};
