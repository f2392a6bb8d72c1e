#![warn(missing_docs)]
//! Sortbench Report - Persistence and Visualization
//!
//! Two thin I/O layers around `sortbench_core::ResultTable`:
//! - `store`: CSV save/load keyed by input size, empty field = sentinel
//! - `chart`: single-file HTML report with two inline SVG line charts

pub mod chart;
pub mod store;

pub use chart::{render, write_report, ChartOptions};
pub use store::{load, save, StoreError};
