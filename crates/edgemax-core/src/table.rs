// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record tables: the compiled-in result set and JSON tables on disk.
//!
//! A JSON table is an array of rows, each row an array of at least five
//! scalars: `[[0, 1, 2, 0.5, 9.0], ...]`. Integral JSON numbers load as
//! [`Field::Int`], others as [`Field::Float`], strings as [`Field::Text`].

use crate::field::Field;
use crate::record::{Record, RecordError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Error type for loading record tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// I/O error while reading the table.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The input is not a JSON array of scalar rows.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A row failed record validation.
    #[error("row {row}: {source}")]
    Row {
        /// Zero-based row index.
        row: usize,
        /// Underlying validation failure.
        source: RecordError,
    },
}

/// Source, destination, relation, prior, weight.
type Row = (i64, i64, i64, f64, f64);

const RESULTS: [Row; 12] = [
    (0, 1, 3, 0.5, 0.25),
    (0, 2, 1, 0.5, 1.0),
    (1, 2, 4, 0.25, 0.5),
    (1, 3, 2, 0.75, 1.0),
    (2, 3, 1, 0.5, 0.875),
    (2, 4, 3, 0.125, 0.375),
    (3, 4, 2, 0.5, 1.0),
    (3, 5, 4, 0.25, 0.625),
    (4, 5, 1, 0.75, 0.125),
    (4, 6, 2, 0.5, 1.0),
    (5, 6, 3, 0.5, 0.75),
    (5, 7, 1, 0.25, 0.5),
];

/// The compiled-in result table scanned when no input is supplied.
pub fn builtin_results() -> Vec<Record> {
    RESULTS.iter().copied().map(Record::from).collect()
}

/// Parse a JSON table from `reader`.
pub fn load_json<R: Read>(reader: R) -> Result<Vec<Record>, TableError> {
    let rows: Vec<Vec<Field>> = serde_json::from_reader(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(row, fields)| {
            Record::new(fields).map_err(|source| TableError::Row { row, source })
        })
        .collect()
}

/// Parse a JSON table from the file at `path`.
pub fn load_json_path(path: &Path) -> Result<Vec<Record>, TableError> {
    let file = File::open(path)?;
    let records = load_json(BufReader::new(file))?;
    info!(path = %path.display(), rows = records.len(), "loaded record table");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::find_max;
    use crate::render::edge_line;

    #[test]
    fn builtin_table_has_a_non_sentinel_maximum() {
        let table = builtin_results();
        assert_eq!(table.len(), RESULTS.len());
        let best = find_max(&table).unwrap();
        assert_eq!(edge_line(best), "edge(2, 3, 1, 0.5).");
    }

    #[test]
    fn loads_mixed_scalar_rows() {
        let json = r#"[[0, 1, "knows", 0.5, 0.5], [1, 2, 3, 0.5, 2.0, "extra"]]"#;
        let table = load_json(json.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].fields()[2], Field::from("knows"));
        assert_eq!(table[1].arity(), 6);
    }

    #[test]
    fn empty_array_is_an_empty_table() {
        assert!(load_json("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn short_row_reports_its_index() {
        let json = "[[0, 1, 2, 0.5, 0.5], [1, 2]]";
        let err = load_json(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TableError::Row {
                row: 1,
                source: RecordError::TooFewFields { arity: 2 }
            }
        ));
        assert_eq!(err.to_string(), "row 1: record has 2 fields, need at least 5");
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = load_json(r#"[[0, 1, 2, [3], 0.5]]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::Serde(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_json_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
