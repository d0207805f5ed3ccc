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

//! Report renderers.
//!
//! The comparison renderers (`text`, `csv`, `json`, `markdown`) are pure
//! functions of an ordered comparison list and the regression threshold.
//! They share the same summary counts and per-row fields; only the syntax
//! differs. `html` renders a single results document, optionally against a
//! baseline.
//!
//! # Modules
//!
//! - `text`: Fixed-width console report
//! - `csv`: Nine-column CSV export
//! - `json`: Machine-readable JSON export
//! - `markdown`: Markdown export for pull requests and docs
//! - `html`: Self-contained HTML page with charts

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

use crate::error::{ReportError, Result};
use crate::harness::Comparison;
use std::str::FromStr;
use tracing::debug;

pub use html::{baseline_deltas, BaselineDelta, ChartData, HtmlReport, Theme};
pub use json::{JsonComparison, JsonReport, JsonSummary};

/// Output format for comparison reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Fixed-width text.
    #[default]
    Text,
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
    /// GitHub-flavored Markdown.
    Markdown,
}

impl OutputFormat {
    /// Returns the format name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Renders comparisons in the requested format.
pub fn render(format: OutputFormat, comparisons: &[Comparison], threshold: f64) -> Result<String> {
    let output = match format {
        OutputFormat::Text => text::render_text(comparisons, threshold),
        OutputFormat::Csv => self::csv::render_csv(comparisons)?,
        OutputFormat::Json => json::render_json(comparisons, threshold)?,
        OutputFormat::Markdown => markdown::render_markdown(comparisons, threshold),
    };
    debug!(format = format.as_str(), bytes = output.len(), "rendered report");
    Ok(output)
}

/// Formats a nanosecond duration with an adaptive unit.
pub fn format_time(ns: f64) -> String {
    if ns >= 1_000_000_000.0 {
        format!("{:.2}s", ns / 1_000_000_000.0)
    } else if ns >= 1_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2}μs", ns / 1_000.0)
    } else {
        format!("{:.2}ns", ns)
    }
}

/// Formats a nanosecond duration, showing `N/A` for zero (absent side).
pub fn format_ns(ns: f64) -> String {
    if ns == 0.0 {
        "N/A".to_string()
    } else {
        format_time(ns)
    }
}

/// Formats a throughput in MB/s, showing `N/A` for zero (not measured).
pub fn format_throughput(mb_s: f64) -> String {
    if mb_s == 0.0 {
        "N/A".to_string()
    } else {
        format!("{:.2} MB/s", mb_s)
    }
}

/// Formats a signed percentage; the new/removed sentinels become `N/A`.
pub fn format_pct(pct: f64) -> String {
    if pct.is_infinite() {
        "N/A".to_string()
    } else {
        format!("{:+.2}%", pct)
    }
}

/// Formats a plain number, keeping one decimal for whole values (`5.0`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
