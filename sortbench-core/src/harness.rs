//! The adaptive benchmark harness.
//!
//! Sweeps input sizes 2^1 ..= 2^max in increasing order, times every
//! catalogue algorithm at each size, and applies the skip policy: once an
//! algorithm's batch total exceeds the threshold, it is never timed again at
//! any larger size. Its absence is still recorded as a sentinel cell, so the
//! table keeps its full shape.

use std::time::Duration;

use fxhash::FxHashSet;

use crate::input::InputSource;
use crate::probe;
use crate::registry::SortAlgorithm;
use crate::table::{ResultTable, TableError};

/// Harness tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct HarnessConfig {
    /// Sizes swept are `2^1 ..= 2^max_size_exponent`.
    pub max_size_exponent: u32,
    /// Executions per measurement batch.
    pub repetitions: u32,
    /// Skip threshold, compared against the raw batch **total** (not a
    /// per-run average). `None` disables skipping: every cell gets measured.
    pub max_duration: Option<Duration>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_size_exponent: 13,
            repetitions: probe::REPETITIONS,
            max_duration: Some(Duration::from_secs(1)),
        }
    }
}

/// The adaptive benchmark harness.
///
/// Owns all per-run state (the skip set and the growing table); nothing is
/// module-level. A run is strictly sequential: a later size must observe the
/// skip decisions accumulated at every earlier size.
pub struct Harness {
    algorithms: &'static [SortAlgorithm],
    config: HarnessConfig,
}

impl Harness {
    /// Create a harness over a fixed algorithm catalogue.
    pub fn new(algorithms: &'static [SortAlgorithm], config: HarnessConfig) -> Self {
        Self { algorithms, config }
    }

    /// The table's column schema, derived from the catalogue in registry
    /// order. Also the schema `sortbench_report::store::load` validates
    /// persisted files against.
    pub fn columns(&self) -> Vec<String> {
        self.algorithms.iter().map(|a| a.name.to_string()).collect()
    }

    /// Run the full sweep and return the assembled table.
    ///
    /// One input per size, shared by every algorithm measured at that size.
    /// A skip takes effect starting at the *next* size: the measurement that
    /// crossed the threshold is kept, threshold overshoot and all. A timed
    /// call is never aborted mid-execution, so the last measurement of a
    /// quadratic algorithm can overshoot by a lot.
    pub fn run(&self, inputs: &mut dyn InputSource) -> Result<ResultTable, TableError> {
        let mut skipped: FxHashSet<&'static str> = FxHashSet::default();
        let mut table = ResultTable::new(self.columns());

        for exponent in 1..=self.config.max_size_exponent {
            let size = 1usize << exponent;
            let input = inputs.generate(size);
            tracing::debug!(size, "measuring");

            let mut cells = Vec::with_capacity(self.algorithms.len());
            for algorithm in self.algorithms {
                if skipped.contains(algorithm.id) {
                    // No timing at all: skipped algorithms cost zero
                    // measurement time for every remaining size.
                    cells.push(None);
                    continue;
                }
                let duration = probe::measure(algorithm.run, &input, self.config.repetitions);
                cells.push(Some(duration.as_secs_f64()));
                if self
                    .config
                    .max_duration
                    .is_some_and(|limit| duration > limit)
                {
                    tracing::info!(
                        algorithm = algorithm.id,
                        size,
                        total_secs = duration.as_secs_f64(),
                        "over threshold, skipping at larger sizes"
                    );
                    skipped.insert(algorithm.id);
                }
            }
            table.push_row(size, cells)?;
        }

        Ok(table)
    }
}
