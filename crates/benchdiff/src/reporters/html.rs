// Dweve BenchDiff - Benchmark comparison and reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTML export for benchmark results.
//!
//! Produces a single self-contained page: inline styles, a statistics table
//! and the raw chart arrays as script constants. Charts are drawn client-side
//! by Chart.js, which is loaded from a CDN.

use crate::core::config::{HtmlConfig, HIGHLIGHT_THRESHOLD_PCT};
use crate::core::results::{BenchmarkResult, ResultsFile, RunConfig};
use crate::error::ReportError;
use crate::reporters::{format_throughput, format_time};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::str::FromStr;
use tracing::debug;

/// Chart.js bundle referenced by the report.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

/// Color theme of the HTML report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// Colors applied by a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: &'static str,
    /// Body text and chart labels.
    pub text: &'static str,
    /// Borders and chart grid lines.
    pub grid: &'static str,
    /// Card background.
    pub card: &'static str,
}

impl Theme {
    /// Returns the theme name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the theme colors.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                text: "#333333",
                grid: "#e0e0e0",
                card: "#f8f9fa",
            },
            Theme::Dark => Palette {
                background: "#1a1a1a",
                text: "#e0e0e0",
                grid: "#444",
                card: "#2a2a2a",
            },
        }
    }
}

impl FromStr for Theme {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ReportError::UnknownTheme(other.to_string())),
        }
    }
}

/// Per-benchmark arrays embedded for the charts, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    /// Benchmark names.
    pub names: Vec<String>,
    /// Median times in nanoseconds.
    pub median_times: Vec<f64>,
    /// Mean times in nanoseconds.
    pub mean_times: Vec<f64>,
    /// Minimum times in nanoseconds.
    pub min_times: Vec<f64>,
    /// Maximum times in nanoseconds.
    pub max_times: Vec<f64>,
    /// 95th percentile times in nanoseconds.
    pub p95_times: Vec<f64>,
    /// Throughputs in MB/s (0 if not measured).
    pub throughputs: Vec<f64>,
}

impl ChartData {
    /// Collects chart arrays from a results document.
    pub fn from_results(results: &ResultsFile) -> Self {
        let rs = &results.results;
        Self {
            names: rs.iter().map(|r| r.name.clone()).collect(),
            median_times: rs.iter().map(|r| r.median_ns).collect(),
            mean_times: rs.iter().map(|r| r.mean_ns).collect(),
            min_times: rs.iter().map(|r| r.min_ns).collect(),
            max_times: rs.iter().map(|r| r.max_ns).collect(),
            p95_times: rs.iter().map(|r| r.p95_ns).collect(),
            throughputs: rs.iter().map(|r| r.throughput_mb_s).collect(),
        }
    }

    /// Returns whether any benchmark measured throughput.
    pub fn has_throughput(&self) -> bool {
        self.throughputs.iter().any(|&t| t > 0.0)
    }
}

/// Median change of one benchmark relative to a baseline document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineDelta {
    /// Benchmark name.
    pub name: String,
    /// Baseline median in nanoseconds.
    pub baseline: f64,
    /// Current median in nanoseconds.
    pub current: f64,
    /// Percentage change (0 when the baseline median is 0).
    pub diff_pct: f64,
}

/// Computes median deltas for current benchmarks that exist in the baseline.
///
/// Follows the order of `results`; benchmarks missing from the baseline are
/// skipped.
pub fn baseline_deltas(results: &ResultsFile, baseline: &ResultsFile) -> Vec<BaselineDelta> {
    let baseline_map = baseline.to_map();
    results
        .results
        .iter()
        .filter_map(|r| {
            baseline_map.get(&r.name).map(|base| {
                let diff_pct = if base.median_ns > 0.0 {
                    (r.median_ns - base.median_ns) / base.median_ns * 100.0
                } else {
                    0.0
                };
                BaselineDelta {
                    name: r.name.clone(),
                    baseline: base.median_ns,
                    current: r.median_ns,
                    diff_pct,
                }
            })
        })
        .collect()
}

/// Builder for the HTML report page.
///
/// # Example
///
/// ```
/// use benchdiff::core::results::ResultsFile;
/// use benchdiff::reporters::{HtmlReport, Theme};
///
/// let results = ResultsFile::default();
/// let html = HtmlReport::new(&results)
///     .with_title("Nightly")
///     .with_theme(Theme::Dark)
///     .with_generated_at("2025-01-01 00:00:00")
///     .render();
/// assert!(html.contains("<title>Nightly</title>"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlReport<'a> {
    results: &'a ResultsFile,
    baseline: Option<&'a ResultsFile>,
    config: HtmlConfig,
    generated_at: Option<String>,
}

impl<'a> HtmlReport<'a> {
    /// Creates a report for `results` with default settings.
    pub fn new(results: &'a ResultsFile) -> Self {
        Self {
            results,
            baseline: None,
            config: HtmlConfig::default(),
            generated_at: None,
        }
    }

    /// Adds a baseline for the comparison chart and "vs Baseline" column.
    pub fn with_baseline(mut self, baseline: &'a ResultsFile) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Replaces title and theme.
    pub fn with_config(mut self, config: HtmlConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Fixes the "Generated on" timestamp instead of using the local clock.
    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = Some(generated_at.into());
        self
    }

    /// Returns the chart arrays for the current results.
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_results(self.results)
    }

    /// Returns the baseline deltas (empty without a baseline).
    pub fn deltas(&self) -> Vec<BaselineDelta> {
        self.baseline
            .map(|baseline| baseline_deltas(self.results, baseline))
            .unwrap_or_default()
    }

    /// Renders the complete HTML document.
    pub fn render(&self) -> String {
        let charts = self.chart_data();
        let deltas = self.deltas();
        let palette = self.config.theme.palette();
        let title = escape_html(&self.config.title);
        let generated_at = self
            .generated_at
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "    <title>{}</title>", title);
        let _ = writeln!(html, "    <script src=\"{}\"></script>", CHART_JS_URL);
        html.push_str("    <style>\n");
        let _ = writeln!(
            html,
            "        :root {{\n            --bg: {};\n            --text: {};\n            --grid: {};\n            --card: {};\n        }}\n",
            palette.background, palette.text, palette.grid, palette.card
        );
        html.push_str(include_str!("report.css"));
        html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");

        html.push_str("        <header>\n");
        let _ = writeln!(html, "            <h1>{}</h1>", title);
        let _ = writeln!(
            html,
            "            <p class=\"subtitle\">Generated on {}</p>",
            escape_html(&generated_at)
        );
        html.push_str("        </header>\n\n");

        self.push_config_info(&mut html);

        if !deltas.is_empty() {
            push_chart(
                &mut html,
                "📊 Performance Comparison (Baseline vs Current)",
                "comparisonChart",
            );
        }
        push_chart(&mut html, "⏱️ Median Execution Time by Benchmark", "medianChart");
        push_chart(&mut html, "📈 Performance Metrics Distribution", "distributionChart");
        if charts.has_throughput() {
            push_chart(&mut html, "🚀 Throughput (MB/s)", "throughputChart");
        }

        self.push_stats_table(&mut html, &deltas);

        html.push_str("        <footer class=\"footer\">\n");
        html.push_str("            <p>Generated by benchdiff</p>\n");
        html.push_str("        </footer>\n    </div>\n\n");

        html.push_str("    <script>\n");
        push_const(&mut html, "textColor", &palette.text);
        push_const(&mut html, "gridColor", &palette.grid);
        push_const(&mut html, "benchmarkNames", &charts.names);
        push_const(&mut html, "medianTimes", &charts.median_times);
        push_const(&mut html, "meanTimes", &charts.mean_times);
        push_const(&mut html, "minTimes", &charts.min_times);
        push_const(&mut html, "maxTimes", &charts.max_times);
        push_const(&mut html, "p95Times", &charts.p95_times);
        push_const(&mut html, "throughputs", &charts.throughputs);
        if !deltas.is_empty() {
            let names: Vec<&str> = deltas.iter().map(|d| d.name.as_str()).collect();
            let baseline: Vec<f64> = deltas.iter().map(|d| d.baseline).collect();
            let current: Vec<f64> = deltas.iter().map(|d| d.current).collect();
            push_const(&mut html, "comparisonNames", &names);
            push_const(&mut html, "baselineTimes", &baseline);
            push_const(&mut html, "currentTimes", &current);
        }
        html.push('\n');
        html.push_str(include_str!("charts.js"));
        html.push_str("    </script>\n</body>\n</html>\n");

        debug!(
            results = charts.names.len(),
            deltas = deltas.len(),
            theme = self.config.theme.as_str(),
            bytes = html.len(),
            "rendered HTML report"
        );
        html
    }

    fn push_config_info(&self, html: &mut String) {
        let config = &self.results.config;
        let items = [
            ("Total Benchmarks", self.results.len().to_string()),
            ("Warmup Runs", RunConfig::label(config.warmup_runs.as_ref())),
            ("Measure Runs", RunConfig::label(config.measure_runs.as_ref())),
            ("Scale Factor", RunConfig::label(config.scale.as_ref())),
        ];

        html.push_str("        <div class=\"config-info\">\n");
        for (label, value) in items {
            let _ = writeln!(
                html,
                "            <div class=\"config-item\">\n                <div class=\"config-label\">{}</div>\n                <div class=\"config-value\">{}</div>\n            </div>",
                label,
                escape_html(&value)
            );
        }
        html.push_str("        </div>\n\n");
    }

    fn push_stats_table(&self, html: &mut String, deltas: &[BaselineDelta]) {
        let delta_by_name: BTreeMap<&str, &BaselineDelta> =
            deltas.iter().map(|d| (d.name.as_str(), d)).collect();
        let show_baseline = !deltas.is_empty();

        html.push_str("        <div class=\"stats-table\">\n");
        html.push_str("            <h2 class=\"chart-title\">📋 Detailed Statistics</h2>\n");
        html.push_str("            <table>\n                <thead>\n                    <tr>\n");
        for header in ["Benchmark", "Median", "Mean", "Min", "Max", "P95", "Throughput"] {
            let _ = writeln!(html, "                        <th>{}</th>", header);
        }
        if show_baseline {
            html.push_str("                        <th>vs Baseline</th>\n");
        }
        html.push_str("                    </tr>\n                </thead>\n");
        html.push_str("                <tbody>\n");

        for result in &self.results.results {
            push_stats_row(html, result);

            if show_baseline {
                match delta_by_name.get(result.name.as_str()) {
                    Some(delta) => {
                        let class = if delta.diff_pct < -HIGHLIGHT_THRESHOLD_PCT {
                            " improved"
                        } else if delta.diff_pct > HIGHLIGHT_THRESHOLD_PCT {
                            " regressed"
                        } else {
                            ""
                        };
                        let sign = if delta.diff_pct > 0.0 { "+" } else { "" };
                        let _ = writeln!(
                            html,
                            "                        <td class=\"metric{}\">{}{:.2}%</td>",
                            class, sign, delta.diff_pct
                        );
                    }
                    None => {
                        html.push_str("                        <td class=\"metric\">New</td>\n");
                    }
                }
            }

            html.push_str("                    </tr>\n");
        }

        html.push_str("                </tbody>\n            </table>\n        </div>\n\n");
    }
}

fn push_stats_row(html: &mut String, result: &BenchmarkResult) {
    let throughput = if result.has_throughput() {
        format_throughput(result.throughput_mb_s)
    } else {
        "N/A".to_string()
    };

    html.push_str("                    <tr>\n");
    let _ = writeln!(
        html,
        "                        <td><strong>{}</strong></td>",
        escape_html(&result.name)
    );
    for value in [
        result.median_ns,
        result.mean_ns,
        result.min_ns,
        result.max_ns,
        result.p95_ns,
    ] {
        let _ = writeln!(
            html,
            "                        <td class=\"metric\">{}</td>",
            format_time(value)
        );
    }
    let _ = writeln!(
        html,
        "                        <td class=\"metric\">{}</td>",
        throughput
    );
}

fn push_chart(html: &mut String, title: &str, canvas_id: &str) {
    let _ = writeln!(
        html,
        "        <div class=\"chart-container\">\n            <h2 class=\"chart-title\">{}</h2>\n            <canvas id=\"{}\"></canvas>\n        </div>\n",
        title, canvas_id
    );
}

fn push_const<T: Serialize + ?Sized>(html: &mut String, name: &str, value: &T) {
    let _ = writeln!(html, "        const {} = {};", name, script_json(value));
}

/// Serializes a value for embedding inside a `<script>` element.
///
/// `</` is escaped so data can never terminate the script block.
fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
