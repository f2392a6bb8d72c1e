//! Result store: tabular CSV keyed by input size.
//!
//! One row per input size, one column per algorithm display name, first
//! column `numbers` carrying the size. Sentinel cells are written as empty
//! fields (an unquoted `NaN` is accepted on load for compatibility with
//! spreadsheet exports).

use std::fs;
use std::path::{Path, PathBuf};

use sortbench_core::ResultTable;
use thiserror::Error;

/// Header of the index column.
const INDEX_COLUMN: &str = "numbers";

/// Errors from saving or loading a results file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested results file does not exist.
    #[error("no results file at {0}")]
    NotFound(PathBuf),

    /// Filesystem failure (directory creation, read, write).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV-level failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The file's columns do not match the expected algorithm set.
    #[error("results file columns {found:?} do not match the expected algorithm set {expected:?}")]
    SchemaMismatch {
        /// Columns the registry-derived schema expects.
        expected: Vec<String>,
        /// Columns found in the file header.
        found: Vec<String>,
    },

    /// A data row could not be interpreted.
    #[error("malformed row {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Persist a table to `path`, creating intermediate directories as needed.
pub fn save(table: &ResultTable, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(table.columns().len() + 1);
    header.push(INDEX_COLUMN.to_string());
    header.extend(table.columns().iter().cloned());
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.size.to_string());
        for cell in &row.cells {
            record.push(match cell {
                Some(seconds) => seconds.to_string(),
                None => String::new(),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a table from `path`, validating the header against the fixed,
/// registry-derived column schema. The column set is never inferred from
/// file contents.
pub fn load(path: &Path, expected_columns: &[String]) -> Result<ResultTable, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.clone();
    let found: Vec<String> = header.iter().skip(1).map(str::to_owned).collect();
    if header.get(0) != Some(INDEX_COLUMN) || found != expected_columns {
        return Err(StoreError::SchemaMismatch {
            expected: expected_columns.to_vec(),
            found,
        });
    }

    let mut table = ResultTable::new(expected_columns.to_vec());
    for (index, record) in reader.records().enumerate() {
        let line = index + 2; // 1-based, after the header
        let record = record?;
        let size: usize = record
            .get(0)
            .unwrap_or_default()
            .parse()
            .map_err(|_| StoreError::MalformedRow {
                line,
                reason: format!("bad input size {:?}", record.get(0).unwrap_or_default()),
            })?;

        let mut cells = Vec::with_capacity(expected_columns.len());
        for field in record.iter().skip(1) {
            if field.is_empty() || field.eq_ignore_ascii_case("nan") {
                cells.push(None);
            } else {
                let seconds: f64 = field.parse().map_err(|_| StoreError::MalformedRow {
                    line,
                    reason: format!("bad duration {field:?}"),
                })?;
                cells.push(Some(seconds));
            }
        }

        table
            .push_row(size, cells)
            .map_err(|e| StoreError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn columns() -> Vec<String> {
        vec!["merge sort".to_string(), "insertion sort".to_string()]
    }

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new(columns());
        table.push_row(2, vec![Some(0.001), Some(0.002)]).unwrap();
        table.push_row(4, vec![Some(0.003), Some(1.25)]).unwrap();
        table.push_row(8, vec![Some(0.004), None]).unwrap();
        table
    }

    #[test]
    fn test_round_trip_preserves_sizes_and_sentinels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sort.csv");

        let original = sample_table();
        save(&original, &path).unwrap();
        let loaded = load(&path, &columns()).unwrap();

        assert_eq!(loaded, original);
        assert_eq!(loaded.cell(8, "insertion sort"), Some(None));
    }

    #[test]
    fn test_save_creates_intermediate_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deeply").join("nested").join("sort.csv");
        save(&sample_table(), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.csv"), &columns()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_mismatched_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sort.csv");
        save(&sample_table(), &path).unwrap();

        let other = vec!["merge sort".to_string(), "bubble sort".to_string()];
        let err = load(&path, &other).unwrap_err();
        assert!(matches!(err, StoreError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_load_accepts_nan_as_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sort.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "numbers,merge sort,insertion sort").unwrap();
        writeln!(file, "2,0.5,NaN").unwrap();
        drop(file);

        let table = load(&path, &columns()).unwrap();
        assert_eq!(table.cell(2, "insertion sort"), Some(None));
        assert_eq!(table.cell(2, "merge sort"), Some(Some(0.5)));
    }

    #[test]
    fn test_load_rejects_garbage_durations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sort.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "numbers,merge sort,insertion sort").unwrap();
        writeln!(file, "2,quick,0.5").unwrap();
        drop(file);

        let err = load(&path, &columns()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { line: 2, .. }));
    }
}
