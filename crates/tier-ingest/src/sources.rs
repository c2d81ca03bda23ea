//! The three input tables and where they come from.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tier_model::ATTRIBUTE_REQUIRED_COLUMNS;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::reader::{read_delimited_table, require_columns};

/// Default file name of the creature/tier table.
pub const CREATURES_FILE: &str = "pokemon-data.csv";
/// Default file name of the move-reference table.
pub const MOVES_FILE: &str = "move-data.csv";
/// Default file name of the attributes table.
pub const ATTRIBUTES_FILE: &str = "pokemon.csv";

/// A single input file and its field separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub path: PathBuf,
    pub separator: u8,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>, separator: u8) -> Self {
        Self {
            path: path.into(),
            separator,
        }
    }

    pub fn read(&self) -> Result<DataFrame> {
        read_delimited_table(&self.path, self.separator)
    }
}

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Creature/tier table, `;`-separated.
    pub creatures: DataSource,
    /// Move-reference table, `,`-separated.
    pub moves: DataSource,
    /// Creature attributes table, `,`-separated.
    pub attributes: DataSource,
}

impl DatasetPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            creatures: DataSource::new(dir.join(CREATURES_FILE), b';'),
            moves: DataSource::new(dir.join(MOVES_FILE), b','),
            attributes: DataSource::new(dir.join(ATTRIBUTES_FILE), b','),
        }
    }

    pub fn with_creatures(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.creatures.path = path;
        }
        self
    }

    pub fn with_moves(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.moves.path = path;
        }
        self
    }

    pub fn with_attributes(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.attributes.path = path;
        }
        self
    }
}

/// Raw input tables, loaded in full before any transformation.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub creatures: DataFrame,
    pub moves: DataFrame,
    pub attributes: DataFrame,
}

/// Loads all three tables, failing on the first unreadable one.
pub fn load_sources(paths: &DatasetPaths) -> Result<SourceTables> {
    let creatures = paths.creatures.read()?;
    if creatures.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: paths.creatures.path.clone(),
        });
    }

    let moves = paths.moves.read()?;

    let attributes = paths.attributes.read()?;
    require_columns(
        &attributes,
        &ATTRIBUTE_REQUIRED_COLUMNS,
        &paths.attributes.path,
    )?;

    info!(
        creature_rows = creatures.height(),
        move_rows = moves.height(),
        attribute_rows = attributes.height(),
        "loaded source tables"
    );

    Ok(SourceTables {
        creatures,
        moves,
        attributes,
    })
}
