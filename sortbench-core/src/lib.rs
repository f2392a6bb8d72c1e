#![warn(missing_docs)]
//! Sortbench Core - Adaptive Benchmark Harness
//!
//! This crate provides the measurement engine for the sorting benchmark:
//! - A fixed catalogue of sorting algorithms (`sorts`, `registry`)
//! - A timing probe that totals wall-clock time over a repetition batch
//! - The adaptive harness with its irreversible skip policy
//! - The sparse per-size, per-algorithm result table
//!
//! No I/O happens here; persistence and rendering live in `sortbench-report`.

mod harness;
mod input;
mod probe;
mod registry;
pub mod sorts;
mod table;

pub use harness::{Harness, HarnessConfig};
pub use input::{InputSource, RandomInputs};
pub use probe::{measure, REPETITIONS};
pub use registry::{registry, SortAlgorithm};
pub use table::{ResultTable, SizeRow, TableError};
