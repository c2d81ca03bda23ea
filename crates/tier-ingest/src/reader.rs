//! Delimited file reading into Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads a delimited file with a single header row.
///
/// The schema is inferred from the whole file: the inputs are small, and a
/// late non-numeric cell in an otherwise numeric column must widen the column
/// instead of failing the read.
pub fn read_delimited_table(path: &Path, separator: u8) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| options.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        separator = %char::from(separator),
        rows = df.height(),
        columns = df.width(),
        "read delimited table"
    );
    Ok(df)
}

/// Fails with [`IngestError::MissingColumn`] for the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str], path: &Path) -> Result<()> {
    let present = df.get_column_names();
    for column in columns {
        if !present.iter().any(|name| name.as_str() == *column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
