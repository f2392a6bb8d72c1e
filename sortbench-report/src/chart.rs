//! Chart renderer: a self-contained HTML page with two inline SVG charts.
//!
//! Chart one plots the raw batch duration per algorithm; chart two plots
//! duration normalized by input size on a log scale. Both share a
//! logarithmic size axis. Sentinel cells break the polyline, so a skipped
//! algorithm's line visibly stops where measurement stopped.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Utc;
use sortbench_core::ResultTable;

use crate::store::StoreError;

/// Matplotlib-ish categorical palette; cycles if the catalogue outgrows it.
const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Chart dimensions, per chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 960,
            height: 400,
        }
    }
}

/// How cell values map onto the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YAxis {
    /// Raw batch duration in seconds, linear scale.
    RawSeconds,
    /// Duration divided by input size, log scale.
    PerElementLog,
}

/// Render the full HTML report.
pub fn render(table: &ResultTable, options: &ChartOptions) -> String {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let raw = svg_chart(
        table,
        options,
        YAxis::RawSeconds,
        "Comparison of execution speed for sort algorithms (per measurement batch)",
        "duration, s",
    );
    let normalized = svg_chart(
        table,
        options,
        YAxis::PerElementLog,
        "Duration normalized by input size",
        "duration / length of array",
    );
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>sortbench report</title>
<style>
  body {{ font-family: sans-serif; margin: 2em; background: #fafafa; color: #222; }}
  h1 {{ font-size: 1.4em; }}
  .meta {{ color: #666; font-size: 0.85em; margin-bottom: 1.5em; }}
  svg {{ background: #fff; border: 1px solid #ddd; margin-bottom: 2em; display: block; }}
</style>
</head>
<body>
<h1>sortbench report</h1>
<p class="meta">generated {generated}</p>
{raw}
{normalized}
</body>
</html>
"#
    )
}

/// Render the report and write it to `path`, creating directories as needed.
pub fn write_report(
    table: &ResultTable,
    path: &Path,
    options: &ChartOptions,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(table, options))?;
    Ok(())
}

fn svg_chart(
    table: &ResultTable,
    options: &ChartOptions,
    axis: YAxis,
    title: &str,
    y_label: &str,
) -> String {
    let width = f64::from(options.width);
    let height = f64::from(options.height);
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;

    let sizes = table.sizes();
    let series = collect_series(table, axis);
    let has_points = series.iter().any(|(_, segments)| !segments.is_empty());
    if sizes.is_empty() || !has_points {
        return format!(
            r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
<text x="{x}" y="{y}" text-anchor="middle" fill="#888">no measurements to plot</text>
</svg>"##,
            x = width / 2.0,
            y = height / 2.0,
        );
    }

    // Logarithmic x over the size keys.
    let x_min = (sizes[0] as f64).ln();
    let x_max = (*sizes.last().unwrap_or(&1) as f64).ln().max(x_min + 1e-9);
    let x_of = |size: usize| -> f64 {
        MARGIN_LEFT + ((size as f64).ln() - x_min) / (x_max - x_min) * plot_w
    };

    // Y range over every plotted value.
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;
    for (_, segments) in &series {
        for segment in segments {
            for &(_, value) in segment {
                y_lo = y_lo.min(value);
                y_hi = y_hi.max(value);
            }
        }
    }
    let (y_lo, y_hi) = match axis {
        YAxis::RawSeconds => (0.0, if y_hi > 0.0 { y_hi } else { 1.0 }),
        YAxis::PerElementLog => {
            // Already log10-transformed; give the range a little headroom.
            if (y_hi - y_lo).abs() < 1e-9 {
                (y_lo - 1.0, y_hi + 1.0)
            } else {
                (y_lo, y_hi)
            }
        }
    };
    let y_of =
        |value: f64| -> f64 { MARGIN_TOP + plot_h - (value - y_lo) / (y_hi - y_lo) * plot_h };

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" font-size="12">"#
    );
    let _ = write!(
        svg,
        r#"<text x="{x}" y="20" text-anchor="middle" font-size="14">{title}</text>"#,
        x = MARGIN_LEFT + plot_w / 2.0,
        title = escape(title),
    );

    // Axes.
    let x0 = MARGIN_LEFT;
    let x1 = MARGIN_LEFT + plot_w;
    let y0 = MARGIN_TOP + plot_h;
    let _ = write!(
        svg,
        r##"<line x1="{x0:.1}" y1="{y0:.1}" x2="{x1:.1}" y2="{y0:.1}" stroke="#333"/>"##
    );
    let _ = write!(
        svg,
        r##"<line x1="{x0:.1}" y1="{t:.1}" x2="{x0:.1}" y2="{y0:.1}" stroke="#333"/>"##,
        t = MARGIN_TOP
    );

    // X ticks: one per size key, labels thinned when the sweep is long.
    let label_every = sizes.len().div_ceil(12).max(1);
    for (i, &size) in sizes.iter().enumerate() {
        let x = x_of(size);
        let _ = write!(
            svg,
            r##"<line x1="{x:.1}" y1="{y0:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="#333"/>"##,
            y2 = y0 + 4.0
        );
        if i % label_every == 0 {
            let _ = write!(
                svg,
                r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle">{size}</text>"#,
                y = y0 + 18.0
            );
        }
    }
    let _ = write!(
        svg,
        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle">length of array</text>"#,
        x = MARGIN_LEFT + plot_w / 2.0,
        y = height - 8.0
    );

    // Y ticks.
    for (value, label) in y_ticks(axis, y_lo, y_hi) {
        let y = y_of(value);
        let _ = write!(
            svg,
            r##"<line x1="{x:.1}" y1="{y:.1}" x2="{x0:.1}" y2="{y:.1}" stroke="#333"/>"##,
            x = x0 - 4.0
        );
        let _ = write!(
            svg,
            r##"<line x1="{x0:.1}" y1="{y:.1}" x2="{x1:.1}" y2="{y:.1}" stroke="#eee"/>"##
        );
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}" text-anchor="end">{label}</text>"#,
            x = x0 - 8.0,
            ty = y + 4.0
        );
    }
    let _ = write!(
        svg,
        r#"<text x="16" y="{y:.1}" text-anchor="middle" transform="rotate(-90 16 {y:.1})">{label}</text>"#,
        y = MARGIN_TOP + plot_h / 2.0,
        label = escape(y_label),
    );

    // Series polylines; sentinel gaps split a series into several segments.
    for (index, (name, segments)) in series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        for segment in segments {
            if let [(size, value)] = segment.as_slice() {
                let _ = write!(
                    svg,
                    r#"<circle data-series="{name}" cx="{cx:.1}" cy="{cy:.1}" r="2.5" fill="{color}"/>"#,
                    name = escape(name),
                    cx = x_of(*size),
                    cy = y_of(*value),
                );
                continue;
            }
            let points: Vec<String> = segment
                .iter()
                .map(|&(size, value)| format!("{:.1},{:.1}", x_of(size), y_of(value)))
                .collect();
            let _ = write!(
                svg,
                r#"<polyline data-series="{name}" points="{points}" fill="none" stroke="{color}" stroke-width="1.5"/>"#,
                name = escape(name),
                points = points.join(" "),
            );
        }
    }

    // Legend.
    for (index, (name, _)) in series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let y = MARGIN_TOP + 14.0 * index as f64;
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="10" height="10" fill="{color}"/>"#,
            x = x1 + 12.0,
            y = y
        );
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}">{name}</text>"#,
            x = x1 + 27.0,
            ty = y + 9.0,
            name = escape(name),
        );
    }

    svg.push_str("</svg>");
    svg
}

type Segment = Vec<(usize, f64)>;

/// Per column: contiguous runs of measured cells, transformed for the axis.
fn collect_series(table: &ResultTable, axis: YAxis) -> Vec<(String, Vec<Segment>)> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let mut segments: Vec<Segment> = Vec::new();
            let mut current: Segment = Vec::new();
            for row in table.rows() {
                let transformed = row.cells[col].and_then(|seconds| match axis {
                    YAxis::RawSeconds => Some(seconds),
                    YAxis::PerElementLog => {
                        let per_element = seconds / row.size as f64;
                        (per_element > 0.0).then(|| per_element.log10())
                    }
                });
                match transformed {
                    Some(value) => current.push((row.size, value)),
                    None => {
                        if !current.is_empty() {
                            segments.push(std::mem::take(&mut current));
                        }
                    }
                }
            }
            if !current.is_empty() {
                segments.push(current);
            }
            (name.clone(), segments)
        })
        .collect()
}

/// Tick positions and labels for the y axis.
fn y_ticks(axis: YAxis, y_lo: f64, y_hi: f64) -> Vec<(f64, String)> {
    match axis {
        YAxis::RawSeconds => (0..=5)
            .map(|i| {
                let value = y_lo + (y_hi - y_lo) * f64::from(i) / 5.0;
                (value, format_seconds(value))
            })
            .collect(),
        YAxis::PerElementLog => {
            // One tick per decade inside the range, endpoints included.
            let mut ticks = vec![(y_lo, format!("1e{:.0}", y_lo.floor()))];
            let mut decade = y_lo.ceil() as i64;
            while (decade as f64) < y_hi {
                ticks.push((decade as f64, format!("1e{decade}")));
                decade += 1;
            }
            ticks.push((y_hi, format!("1e{:.0}", y_hi.ceil())));
            ticks
        }
    }
}

fn format_seconds(value: f64) -> String {
    if value >= 1.0 || value == 0.0 {
        format!("{value:.2} s")
    } else if value >= 1e-3 {
        format!("{:.2} ms", value * 1e3)
    } else {
        format!("{:.1} µs", value * 1e6)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
