//! The sparse result table.

use thiserror::Error;

/// Errors from assembling a result table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Row sizes must be strictly increasing.
    #[error("input size {size} is not larger than the previous row's size {previous}")]
    NonIncreasingSize {
        /// Offending size.
        size: usize,
        /// Size of the last accepted row.
        previous: usize,
    },
    /// A row's cell count must match the fixed column schema.
    #[error("row has {got} cells but the table has {expected} columns")]
    ArityMismatch {
        /// Number of columns in the schema.
        expected: usize,
        /// Number of cells offered.
        got: usize,
    },
}

/// One benchmarked input size: the size plus one cell per algorithm column.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRow {
    /// Input length this row was measured at.
    pub size: usize,
    /// Total batch duration in seconds per column, in schema order.
    /// `None` is the sentinel: deliberately not measured.
    pub cells: Vec<Option<f64>>,
}

/// The complete, possibly-sparse grid of per-size, per-algorithm durations.
///
/// The column set is fixed at construction (derived from the registry, never
/// inferred from file contents) and rows are keyed by strictly increasing
/// input size, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<SizeRow>,
}

impl ResultTable {
    /// Create an empty table with a fixed column schema.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. `size` must exceed every existing row's size and
    /// `cells` must match the column schema's arity.
    pub fn push_row(&mut self, size: usize, cells: Vec<Option<f64>>) -> Result<(), TableError> {
        if let Some(last) = self.rows.last() {
            if size <= last.size {
                return Err(TableError::NonIncreasingSize {
                    size,
                    previous: last.size,
                });
            }
        }
        if cells.len() != self.columns.len() {
            return Err(TableError::ArityMismatch {
                expected: self.columns.len(),
                got: cells.len(),
            });
        }
        self.rows.push(SizeRow { size, cells });
        Ok(())
    }

    /// Column display names, in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion (= ascending size) order.
    pub fn rows(&self) -> &[SizeRow] {
        &self.rows
    }

    /// The size keys, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.size).collect()
    }

    /// Look up one cell: `None` if the size or column does not exist,
    /// `Some(None)` for a sentinel cell, `Some(Some(d))` for a measurement.
    pub fn cell(&self, size: usize, column: &str) -> Option<Option<f64>> {
        let col = self.columns.iter().position(|c| c == column)?;
        let row = self.rows.iter().find(|r| r.size == size)?;
        Some(row.cells[col])
    }
}
