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

//! JSON export for comparison reports.
//!
//! The percentage fields of new and removed benchmarks have no numeric
//! value and are written as `null`.

use crate::error::Result;
use crate::harness::{Comparison, ComparisonStatus, Summary};
use serde::{Deserialize, Serialize};

/// Summary block of the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Status counts.
    #[serde(flatten)]
    pub counts: Summary,
    /// Regression threshold in percent.
    pub threshold: f64,
}

/// One comparison row of the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonComparison {
    /// Benchmark name.
    pub name: String,
    /// Baseline median in nanoseconds.
    pub baseline_median_ns: f64,
    /// Current median in nanoseconds.
    pub current_median_ns: f64,
    /// Absolute change in nanoseconds.
    pub diff_ns: f64,
    /// Percentage change, `None` for new/removed benchmarks.
    pub diff_pct: Option<f64>,
    /// Baseline throughput in MB/s.
    pub baseline_throughput_mb_s: f64,
    /// Current throughput in MB/s.
    pub current_throughput_mb_s: f64,
    /// Throughput change, `None` for new/removed benchmarks.
    pub throughput_diff_pct: Option<f64>,
    /// Classification.
    pub status: ComparisonStatus,
}

impl From<&Comparison> for JsonComparison {
    fn from(c: &Comparison) -> Self {
        Self {
            name: c.name.clone(),
            baseline_median_ns: c.baseline_median,
            current_median_ns: c.current_median,
            diff_ns: c.diff_ns,
            diff_pct: finite(c.diff_pct),
            baseline_throughput_mb_s: c.baseline_throughput,
            current_throughput_mb_s: c.current_throughput,
            throughput_diff_pct: finite(c.throughput_diff_pct),
            status: c.status,
        }
    }
}

/// Complete JSON comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Status counts and threshold.
    pub summary: JsonSummary,
    /// Rows in report order.
    pub comparisons: Vec<JsonComparison>,
}

impl JsonReport {
    /// Builds the report document from ordered comparisons.
    pub fn new(comparisons: &[Comparison], threshold: f64) -> Self {
        Self {
            summary: JsonSummary {
                counts: Summary::from_comparisons(comparisons),
                threshold,
            },
            comparisons: comparisons.iter().map(JsonComparison::from).collect(),
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Renders comparisons as pretty-printed JSON.
pub fn render_json(comparisons: &[Comparison], threshold: f64) -> Result<String> {
    let report = JsonReport::new(comparisons, threshold);
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::comparator::tests::{map, result};
    use crate::harness::compare;

    fn sample() -> Vec<Comparison> {
        compare(
            &map(&[
                result("parse", 1000.0, 0.0),
                result("dump", 1000.0, 0.0),
                result("gone", 500.0, 0.0),
            ]),
            &map(&[
                result("parse", 1100.0, 0.0),
                result("dump", 1000.0, 0.0),
                result("fresh", 700.0, 0.0),
            ]),
            5.0,
        )
    }

    #[test]
    fn test_json_round_trip() {
        let comparisons = sample();
        let out = render_json(&comparisons, 5.0).unwrap();
        let parsed: JsonReport = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed.summary.counts, Summary::from_comparisons(&comparisons));
        assert_eq!(parsed.summary.threshold, 5.0);

        let expected: Vec<(String, ComparisonStatus)> = comparisons
            .iter()
            .map(|c| (c.name.clone(), c.status))
            .collect();
        let actual: Vec<(String, ComparisonStatus)> = parsed
            .comparisons
            .iter()
            .map(|c| (c.name.clone(), c.status))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_json_sentinels_are_null() {
        let out = render_json(&sample(), 5.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let rows = value["comparisons"].as_array().unwrap();
        let fresh = rows.iter().find(|r| r["name"] == "fresh").unwrap();
        assert!(fresh["diff_pct"].is_null());
        assert!(fresh["throughput_diff_pct"].is_null());
        assert_eq!(fresh["status"], "new");

        let parse = rows.iter().find(|r| r["name"] == "parse").unwrap();
        assert_eq!(parse["diff_pct"], 10.0);
        assert_eq!(parse["status"], "regressed");
        assert!(!out.contains("inf"));
    }

    #[test]
    fn test_json_summary_layout() {
        let out = render_json(&sample(), 5.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let summary = &value["summary"];
        assert_eq!(summary["total"], 4);
        assert_eq!(summary["regressed"], 1);
        assert_eq!(summary["unchanged"], 1);
        assert_eq!(summary["new"], 1);
        assert_eq!(summary["removed"], 1);
        assert_eq!(summary["improved"], 0);
        assert_eq!(summary["threshold"], 5.0);
        assert!(out.starts_with("{\n  \"summary\""));
    }
}
