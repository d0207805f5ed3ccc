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

//! Benchmark comparison and regression classification.
//!
//! Compares current benchmark results against a baseline by median time.
//! Lower time is better, so a negative change is an improvement.

use crate::core::results::{BenchmarkResult, ResultsFile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Classification of one benchmark between baseline and current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Present only in the current results.
    New,
    /// Present only in the baseline results.
    Removed,
    /// Faster by at least the threshold.
    Improved,
    /// Slower by at least the threshold.
    Regressed,
    /// Change smaller than the threshold.
    Unchanged,
}

impl ComparisonStatus {
    /// Returns the status as a lower-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonStatus::New => "new",
            ComparisonStatus::Removed => "removed",
            ComparisonStatus::Improved => "improved",
            ComparisonStatus::Regressed => "regressed",
            ComparisonStatus::Unchanged => "unchanged",
        }
    }

    /// Returns whether this represents a regression.
    pub fn is_regression(&self) -> bool {
        matches!(self, ComparisonStatus::Regressed)
    }
}

impl std::fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison result between baseline and current for one benchmark.
///
/// For `New` and `Removed` rows, `diff_pct` and `throughput_diff_pct` hold
/// `+inf` and `-inf` respectively; renderers never print them as numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Benchmark name.
    pub name: String,
    /// Baseline median in nanoseconds (0 for new benchmarks).
    pub baseline_median: f64,
    /// Current median in nanoseconds (0 for removed benchmarks).
    pub current_median: f64,
    /// Absolute change in nanoseconds.
    pub diff_ns: f64,
    /// Percentage change (positive = slower, negative = faster).
    pub diff_pct: f64,
    /// Baseline throughput in MB/s.
    pub baseline_throughput: f64,
    /// Current throughput in MB/s.
    pub current_throughput: f64,
    /// Percentage change in throughput (0 unless both sides report it).
    pub throughput_diff_pct: f64,
    /// Classification.
    pub status: ComparisonStatus,
}

impl Comparison {
    fn new_benchmark(current: &BenchmarkResult) -> Self {
        Self {
            name: current.name.clone(),
            baseline_median: 0.0,
            current_median: current.median_ns,
            diff_ns: current.median_ns,
            diff_pct: f64::INFINITY,
            baseline_throughput: 0.0,
            current_throughput: current.throughput_mb_s,
            throughput_diff_pct: f64::INFINITY,
            status: ComparisonStatus::New,
        }
    }

    fn removed_benchmark(baseline: &BenchmarkResult) -> Self {
        Self {
            name: baseline.name.clone(),
            baseline_median: baseline.median_ns,
            current_median: 0.0,
            diff_ns: -baseline.median_ns,
            diff_pct: f64::NEG_INFINITY,
            baseline_throughput: baseline.throughput_mb_s,
            current_throughput: 0.0,
            throughput_diff_pct: f64::NEG_INFINITY,
            status: ComparisonStatus::Removed,
        }
    }

    fn measured(baseline: &BenchmarkResult, current: &BenchmarkResult, threshold: f64) -> Self {
        let diff_ns = current.median_ns - baseline.median_ns;
        let diff_pct = if baseline.median_ns > 0.0 {
            diff_ns / baseline.median_ns * 100.0
        } else {
            0.0
        };

        let throughput_diff_pct = if baseline.has_throughput() && current.has_throughput() {
            (current.throughput_mb_s - baseline.throughput_mb_s) / baseline.throughput_mb_s * 100.0
        } else {
            0.0
        };

        Self {
            name: current.name.clone(),
            baseline_median: baseline.median_ns,
            current_median: current.median_ns,
            diff_ns,
            diff_pct,
            baseline_throughput: baseline.throughput_mb_s,
            current_throughput: current.throughput_mb_s,
            throughput_diff_pct,
            status: classify(diff_pct, threshold),
        }
    }

    /// Returns whether either side reports throughput.
    pub fn has_throughput(&self) -> bool {
        self.baseline_throughput > 0.0 || self.current_throughput > 0.0
    }
}

/// Classifies a percentage change against a threshold.
///
/// A change whose magnitude equals the threshold is not "unchanged".
pub fn classify(diff_pct: f64, threshold: f64) -> ComparisonStatus {
    if diff_pct.abs() < threshold {
        ComparisonStatus::Unchanged
    } else if diff_pct < 0.0 {
        ComparisonStatus::Improved
    } else {
        ComparisonStatus::Regressed
    }
}

/// Compares current results to baseline.
///
/// Produces exactly one [`Comparison`] per name in the union of both
/// mappings, in ascending name order.
///
/// # Arguments
///
/// * `baseline` - Baseline results keyed by name
/// * `current` - Current results keyed by name
/// * `threshold` - Regression threshold in percent
pub fn compare(
    baseline: &BTreeMap<String, BenchmarkResult>,
    current: &BTreeMap<String, BenchmarkResult>,
    threshold: f64,
) -> Vec<Comparison> {
    let names: BTreeSet<&String> = baseline.keys().chain(current.keys()).collect();

    let comparisons: Vec<Comparison> = names
        .into_iter()
        .filter_map(|name| match (baseline.get(name), current.get(name)) {
            (Some(base), Some(curr)) => Some(Comparison::measured(base, curr, threshold)),
            (None, Some(curr)) => Some(Comparison::new_benchmark(curr)),
            (Some(base), None) => Some(Comparison::removed_benchmark(base)),
            (None, None) => None,
        })
        .collect();

    debug!(
        baseline = baseline.len(),
        current = current.len(),
        comparisons = comparisons.len(),
        threshold,
        "compared benchmark results"
    );
    comparisons
}

/// Compares two results documents.
pub fn compare_files(
    baseline: &ResultsFile,
    current: &ResultsFile,
    threshold: f64,
) -> Vec<Comparison> {
    compare(&baseline.to_map(), &current.to_map(), threshold)
}

/// Per-status counts over a comparison list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of comparisons.
    pub total: usize,
    /// Faster benchmarks.
    pub improved: usize,
    /// Slower benchmarks.
    pub regressed: usize,
    /// Benchmarks within the threshold.
    pub unchanged: usize,
    /// Benchmarks only in the current results.
    pub new: usize,
    /// Benchmarks only in the baseline.
    pub removed: usize,
}

impl Summary {
    /// Counts statuses over `comparisons`.
    pub fn from_comparisons(comparisons: &[Comparison]) -> Self {
        let mut summary = Summary {
            total: comparisons.len(),
            ..Default::default()
        };
        for comparison in comparisons {
            match comparison.status {
                ComparisonStatus::Improved => summary.improved += 1,
                ComparisonStatus::Regressed => summary.regressed += 1,
                ComparisonStatus::Unchanged => summary.unchanged += 1,
                ComparisonStatus::New => summary.new += 1,
                ComparisonStatus::Removed => summary.removed += 1,
            }
        }
        summary
    }

    /// Returns `count` as a percentage of the total (0 when empty).
    pub fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Returns whether any benchmark regressed.
    pub fn has_regressions(&self) -> bool {
        self.regressed > 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn result(name: &str, median_ns: f64, throughput_mb_s: f64) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            mean_ns: median_ns,
            median_ns,
            min_ns: median_ns,
            max_ns: median_ns,
            stddev_ns: 0.0,
            p95_ns: median_ns,
            p99_ns: median_ns,
            iterations: 100,
            bytes_per_iteration: 0,
            throughput_mb_s,
        }
    }

    pub(crate) fn map(results: &[BenchmarkResult]) -> BTreeMap<String, BenchmarkResult> {
        results
            .iter()
            .map(|r| (r.name.clone(), r.clone()))
            .collect()
    }

    #[test]
    fn test_regressed_above_threshold() {
        let comparisons = compare(
            &map(&[result("bench1", 1000.0, 0.0)]),
            &map(&[result("bench1", 1100.0, 0.0)]),
            5.0,
        );
        assert_eq!(comparisons.len(), 1);
        assert!((comparisons[0].diff_pct - 10.0).abs() < 1e-9);
        assert_eq!(comparisons[0].diff_ns, 100.0);
        assert_eq!(comparisons[0].status, ComparisonStatus::Regressed);
    }

    #[test]
    fn test_threshold_boundary_is_not_unchanged() {
        let comparisons = compare(
            &map(&[result("bench1", 1000.0, 0.0)]),
            &map(&[result("bench1", 950.0, 0.0)]),
            5.0,
        );
        assert_eq!(comparisons[0].diff_pct, -5.0);
        assert_eq!(comparisons[0].status, ComparisonStatus::Improved);

        let comparisons = compare(
            &map(&[result("bench1", 1000.0, 0.0)]),
            &map(&[result("bench1", 1050.0, 0.0)]),
            5.0,
        );
        assert_eq!(comparisons[0].diff_pct, 5.0);
        assert_eq!(comparisons[0].status, ComparisonStatus::Regressed);
    }

    #[test]
    fn test_within_threshold_is_unchanged() {
        let comparisons = compare(
            &map(&[result("bench1", 1000.0, 0.0)]),
            &map(&[result("bench1", 1049.0, 0.0)]),
            5.0,
        );
        assert_eq!(comparisons[0].status, ComparisonStatus::Unchanged);
    }

    #[test]
    fn test_zero_baseline_median() {
        let comparisons = compare(
            &map(&[result("bench1", 0.0, 0.0)]),
            &map(&[result("bench1", 500.0, 0.0)]),
            5.0,
        );
        assert_eq!(comparisons[0].diff_pct, 0.0);
        assert_eq!(comparisons[0].status, ComparisonStatus::Unchanged);
    }

    #[test]
    fn test_new_and_removed() {
        let comparisons = compare(
            &map(&[result("old", 1000.0, 10.0)]),
            &map(&[result("fresh", 2000.0, 20.0)]),
            5.0,
        );
        assert_eq!(comparisons.len(), 2);

        let fresh = &comparisons[0];
        assert_eq!(fresh.name, "fresh");
        assert_eq!(fresh.status, ComparisonStatus::New);
        assert_eq!(fresh.baseline_median, 0.0);
        assert_eq!(fresh.diff_ns, 2000.0);
        assert_eq!(fresh.diff_pct, f64::INFINITY);
        assert_eq!(fresh.throughput_diff_pct, f64::INFINITY);
        assert_eq!(fresh.current_throughput, 20.0);

        let old = &comparisons[1];
        assert_eq!(old.name, "old");
        assert_eq!(old.status, ComparisonStatus::Removed);
        assert_eq!(old.current_median, 0.0);
        assert_eq!(old.diff_ns, -1000.0);
        assert_eq!(old.diff_pct, f64::NEG_INFINITY);
        assert_eq!(old.throughput_diff_pct, f64::NEG_INFINITY);
        assert_eq!(old.baseline_throughput, 10.0);
    }

    #[test]
    fn test_throughput_diff_requires_both_sides() {
        let comparisons = compare(
            &map(&[result("a", 1000.0, 100.0), result("b", 1000.0, 0.0)]),
            &map(&[result("a", 1000.0, 120.0), result("b", 1000.0, 50.0)]),
            5.0,
        );
        assert!((comparisons[0].throughput_diff_pct - 20.0).abs() < 1e-9);
        assert_eq!(comparisons[1].throughput_diff_pct, 0.0);
        assert!(comparisons[1].has_throughput());
    }

    #[test]
    fn test_output_in_name_order() {
        let comparisons = compare(
            &map(&[result("zeta", 1.0, 0.0), result("alpha", 1.0, 0.0)]),
            &map(&[result("mid", 1.0, 0.0), result("alpha", 1.0, 0.0)]),
            5.0,
        );
        let names: Vec<&str> = comparisons.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_summary_counts() {
        let comparisons = compare(
            &map(&[
                result("faster", 1000.0, 0.0),
                result("slower", 1000.0, 0.0),
                result("same", 1000.0, 0.0),
                result("gone", 1000.0, 0.0),
            ]),
            &map(&[
                result("faster", 800.0, 0.0),
                result("slower", 1200.0, 0.0),
                result("same", 1000.0, 0.0),
                result("added", 1000.0, 0.0),
            ]),
            5.0,
        );
        let summary = Summary::from_comparisons(&comparisons);
        assert_eq!(
            summary,
            Summary {
                total: 5,
                improved: 1,
                regressed: 1,
                unchanged: 1,
                new: 1,
                removed: 1,
            }
        );
        assert!(summary.has_regressions());
        assert!((summary.share(1) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_share_empty() {
        let summary = Summary::from_comparisons(&[]);
        assert_eq!(summary.share(0), 0.0);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(ComparisonStatus::Regressed.as_str(), "regressed");
        assert_eq!(ComparisonStatus::New.to_string(), "new");
        assert!(ComparisonStatus::Regressed.is_regression());
        assert!(!ComparisonStatus::Improved.is_regression());
    }
}
