#![warn(missing_docs)]
//! Sortbench CLI
//!
//! Orchestrates a benchmark run end to end: discover configuration, apply
//! CLI overrides, run the adaptive harness (unless a results file already
//! exists), persist the table, render the chart report, and hand it to the
//! system viewer.

mod config;

pub use config::SortbenchConfig;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use sortbench_core::{registry, Harness, HarnessConfig, RandomInputs, ResultTable};
use sortbench_report::{chart, store, ChartOptions};

/// Sortbench CLI arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "sortbench")]
#[command(author, version, about = "Benchmark sorting algorithms across exponentially growing input sizes")]
pub struct Cli {
    /// Re-run measurement even if a results file already exists
    #[arg(long)]
    pub force: bool,

    /// Largest size exponent: sizes swept are 2^1 ..= 2^N
    #[arg(long)]
    pub max_size_exponent: Option<u32>,

    /// Skip threshold in seconds (batch total); "inf" disables skipping
    #[arg(long)]
    pub max_duration: Option<f64>,

    /// Executions per measurement batch
    #[arg(long)]
    pub repetitions: Option<u32>,

    /// Results CSV path
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Chart HTML path (defaults next to the results file)
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Do not hand the rendered chart to the system viewer
    #[arg(long)]
    pub no_open: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the sortbench CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=info")
            .init();
    }

    let config = SortbenchConfig::discover().unwrap_or_default();
    let settings = apply_cli_overrides(config, &cli);
    let table = execute(&settings)?;
    tracing::debug!(
        rows = table.rows().len(),
        columns = table.columns().len(),
        "run complete"
    );
    Ok(())
}

/// Layer CLI flags over the discovered file configuration.
fn apply_cli_overrides(mut config: SortbenchConfig, cli: &Cli) -> SortbenchConfig {
    config.force |= cli.force;
    if let Some(exponent) = cli.max_size_exponent {
        config.max_size_exponent = exponent;
    }
    if let Some(threshold) = cli.max_duration {
        config.max_duration_secs = threshold;
    }
    if let Some(repetitions) = cli.repetitions {
        config.repetitions = repetitions;
    }
    if let Some(ref results) = cli.results {
        config.results_path = results.clone();
    }
    if let Some(ref chart) = cli.chart {
        config.chart_path = Some(chart.clone());
    }
    if cli.no_open {
        config.open_viewer = false;
    }
    config
}

/// The full measure-persist-render flow.
///
/// When the results file exists and `force` is off, measurement is skipped
/// entirely and the stored table is rendered as-is. Rendering is always the
/// terminal action. Returns the table that was rendered.
pub fn execute(settings: &SortbenchConfig) -> anyhow::Result<ResultTable> {
    let harness = Harness::new(
        registry(),
        HarnessConfig {
            max_size_exponent: settings.max_size_exponent,
            repetitions: settings.repetitions,
            max_duration: settings.max_duration(),
        },
    );

    if settings.force || !settings.results_path.exists() {
        tracing::info!(
            max_size = 1u64 << settings.max_size_exponent,
            repetitions = settings.repetitions,
            "running benchmark sweep"
        );
        let mut inputs = RandomInputs::for_exponent(settings.max_size_exponent);
        let table = harness.run(&mut inputs)?;
        store::save(&table, &settings.results_path).with_context(|| {
            format!("saving results to {}", settings.results_path.display())
        })?;
        tracing::info!("data saved to {}", settings.results_path.display());
    }

    let table = store::load(&settings.results_path, &harness.columns()).with_context(|| {
        format!("loading results from {}", settings.results_path.display())
    })?;

    let chart_path = settings.chart_path();
    chart::write_report(&table, &chart_path, &ChartOptions::default())
        .with_context(|| format!("writing chart to {}", chart_path.display()))?;
    tracing::info!("chart written to {}", chart_path.display());

    if settings.open_viewer {
        open_viewer(&chart_path)?;
    }
    Ok(table)
}

/// Hand the chart to the platform opener and wait for it to exit.
fn open_viewer(path: &Path) -> anyhow::Result<()> {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let status = std::process::Command::new(opener)
        .arg(path)
        .status()
        .with_context(|| format!("launching {opener}"))?;
    if !status.success() {
        tracing::warn!(%status, "viewer exited with an error");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn quiet_settings(dir: &Path) -> SortbenchConfig {
        SortbenchConfig {
            force: false,
            max_size_exponent: 3,
            max_duration_secs: f64::INFINITY,
            repetitions: 1,
            results_path: dir.join("sort.csv"),
            chart_path: Some(dir.join("sort.html")),
            open_viewer: false,
        }
    }

    fn registry_header() -> String {
        let mut header = vec!["numbers".to_string()];
        header.extend(registry().iter().map(|a| a.name.to_string()));
        header.join(",")
    }

    #[test]
    fn test_existing_results_skip_measurement_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let settings = quiet_settings(dir.path());

        // A hand-written results file with values no real run would produce.
        let mut file = std::fs::File::create(&settings.results_path).unwrap();
        writeln!(file, "{}", registry_header()).unwrap();
        let row: Vec<String> = std::iter::once("2".to_string())
            .chain(registry().iter().map(|_| "42".to_string()))
            .collect();
        writeln!(file, "{}", row.join(",")).unwrap();
        drop(file);
        let before = std::fs::read(&settings.results_path).unwrap();

        let table = execute(&settings).unwrap();

        // The harness never ran: the file is untouched and the rendered
        // table is exactly the stored one.
        assert_eq!(std::fs::read(&settings.results_path).unwrap(), before);
        assert_eq!(table.sizes(), vec![2]);
        assert!(table
            .rows()[0]
            .cells
            .iter()
            .all(|c| *c == Some(42.0)));
        assert!(settings.chart_path().is_file());
    }

    #[test]
    fn test_force_regenerates_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = quiet_settings(dir.path());
        settings.force = true;

        let mut file = std::fs::File::create(&settings.results_path).unwrap();
        writeln!(file, "{}", registry_header()).unwrap();
        let row: Vec<String> = std::iter::once("2".to_string())
            .chain(registry().iter().map(|_| "42".to_string()))
            .collect();
        writeln!(file, "{}", row.join(",")).unwrap();
        drop(file);

        let table = execute(&settings).unwrap();

        // Fresh sweep: 2^1..=2^3 rows, and no cell kept the stub value.
        assert_eq!(table.sizes(), vec![2, 4, 8]);
        assert!(table
            .rows()
            .iter()
            .flat_map(|r| r.cells.iter())
            .all(|c| c.is_some() && *c != Some(42.0)));
    }

    #[test]
    fn test_fresh_run_persists_and_renders() {
        let dir = tempfile::tempdir().unwrap();
        let settings = quiet_settings(dir.path());

        let table = execute(&settings).unwrap();

        assert_eq!(table.sizes(), vec![2, 4, 8]);
        assert!(settings.results_path.is_file());
        let html = std::fs::read_to_string(settings.chart_path()).unwrap();
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_cli_overrides_win_over_file_config() {
        let cli = Cli {
            force: true,
            max_size_exponent: Some(5),
            max_duration: Some(f64::INFINITY),
            repetitions: Some(7),
            results: Some(PathBuf::from("custom.csv")),
            chart: None,
            no_open: true,
            verbose: false,
        };
        let settings = apply_cli_overrides(SortbenchConfig::default(), &cli);
        assert!(settings.force);
        assert_eq!(settings.max_size_exponent, 5);
        assert_eq!(settings.max_duration(), None);
        assert_eq!(settings.repetitions, 7);
        assert_eq!(settings.results_path, PathBuf::from("custom.csv"));
        assert_eq!(settings.chart_path(), PathBuf::from("custom.html"));
        assert!(!settings.open_viewer);
    }
}
