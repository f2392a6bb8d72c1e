//! Configuration loading from sortbench.toml
//!
//! Settings can be specified in a `sortbench.toml` file, discovered by
//! walking up from the current directory. CLI flags override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sortbench configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortbenchConfig {
    /// Re-run measurement even if a results file already exists.
    #[serde(default)]
    pub force: bool,
    /// Largest size exponent: sizes swept are `2^1 ..= 2^N`.
    #[serde(default = "default_max_size_exponent")]
    pub max_size_exponent: u32,
    /// Skip threshold in seconds, compared against the batch total.
    /// `inf` (or any non-finite/non-positive value) disables skipping.
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: f64,
    /// Executions per measurement batch.
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Results CSV path.
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// Chart HTML path; defaults to the results path with an .html extension.
    #[serde(default)]
    pub chart_path: Option<PathBuf>,
    /// Hand the rendered chart to the system viewer when done.
    #[serde(default = "default_open_viewer")]
    pub open_viewer: bool,
}

impl Default for SortbenchConfig {
    fn default() -> Self {
        Self {
            force: false,
            max_size_exponent: default_max_size_exponent(),
            max_duration_secs: default_max_duration_secs(),
            repetitions: default_repetitions(),
            results_path: default_results_path(),
            chart_path: None,
            open_viewer: default_open_viewer(),
        }
    }
}

fn default_max_size_exponent() -> u32 {
    13
}
fn default_max_duration_secs() -> f64 {
    1.0
}
fn default_repetitions() -> u32 {
    sortbench_core::REPETITIONS
}
fn default_results_path() -> PathBuf {
    std::env::temp_dir().join("sortbench").join("sort.csv")
}
fn default_open_viewer() -> bool {
    true
}

impl SortbenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sortbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// The skip threshold as a `Duration`, or `None` when skipping is
    /// disabled (infinite, NaN or non-positive threshold).
    pub fn max_duration(&self) -> Option<Duration> {
        (self.max_duration_secs.is_finite() && self.max_duration_secs > 0.0)
            .then(|| Duration::from_secs_f64(self.max_duration_secs))
    }

    /// Where the chart goes: the explicit path, or the results path with an
    /// `.html` extension.
    pub fn chart_path(&self) -> PathBuf {
        self.chart_path
            .clone()
            .unwrap_or_else(|| self.results_path.with_extension("html"))
    }

    /// Generate a default configuration as a TOML string.
    pub fn default_toml() -> String {
        r#"# Sortbench Configuration

# Re-run measurement even if a results file already exists
force = false
# Largest size exponent: sizes swept are 2^1 ..= 2^N
max_size_exponent = 13
# Skip threshold in seconds (batch total); `inf` disables skipping
max_duration_secs = 1.0
# Executions per measurement batch
repetitions = 100
# Where the results CSV goes (uncomment to override the tmp default)
# results_path = "target/sortbench/sort.csv"
# Where the chart HTML goes (uncomment to override)
# chart_path = "target/sortbench/sort.html"
# Hand the rendered chart to the system viewer when done
open_viewer = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortbenchConfig::default();
        assert!(!config.force);
        assert_eq!(config.max_size_exponent, 13);
        assert_eq!(config.repetitions, 100);
        assert_eq!(config.max_duration(), Some(Duration::from_secs(1)));
        assert!(config.results_path.ends_with("sortbench/sort.csv"));
    }

    #[test]
    fn test_parse_toml_with_defaults() {
        let config: SortbenchConfig = toml::from_str(
            r#"
            max_size_exponent = 9
            max_duration_secs = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(config.max_size_exponent, 9);
        assert_eq!(config.max_duration(), Some(Duration::from_millis(250)));
        // Defaults still apply
        assert_eq!(config.repetitions, 100);
        assert!(config.open_viewer);
    }

    #[test]
    fn test_infinite_threshold_disables_skipping() {
        let config: SortbenchConfig = toml::from_str("max_duration_secs = inf").unwrap();
        assert_eq!(config.max_duration(), None);
        let config: SortbenchConfig = toml::from_str("max_duration_secs = 0.0").unwrap();
        assert_eq!(config.max_duration(), None);
    }

    #[test]
    fn test_chart_path_defaults_next_to_results() {
        let mut config = SortbenchConfig::default();
        config.results_path = PathBuf::from("/tmp/x/sort.csv");
        assert_eq!(config.chart_path(), PathBuf::from("/tmp/x/sort.html"));
        config.chart_path = Some(PathBuf::from("/elsewhere/chart.html"));
        assert_eq!(config.chart_path(), PathBuf::from("/elsewhere/chart.html"));
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SortbenchConfig = toml::from_str(&SortbenchConfig::default_toml()).unwrap();
        assert_eq!(config.max_size_exponent, 13);
    }
}
