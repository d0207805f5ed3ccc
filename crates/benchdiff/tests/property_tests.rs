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

//! Property-based tests for the comparator, sorter and JSON reporter.
//!
//! Properties covered:
//! - One comparison per name in the union of both inputs
//! - Identical medians are always unchanged
//! - Names on one side only are new/removed regardless of threshold
//! - Regression order starts with the largest change
//! - JSON output re-parses to the same summary and statuses

use benchdiff::harness::{compare, sorted, ComparisonStatus, SortMetric, Summary};
use benchdiff::reporters::json::{render_json, JsonReport};
use benchdiff::BenchmarkResult;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ===== Test Helpers =====

fn bench(name: &str, median_ns: f64) -> BenchmarkResult {
    BenchmarkResult {
        name: name.to_string(),
        mean_ns: median_ns,
        median_ns,
        min_ns: median_ns,
        max_ns: median_ns,
        stddev_ns: 0.0,
        p95_ns: median_ns,
        p99_ns: median_ns,
        iterations: 10,
        bytes_per_iteration: 0,
        throughput_mb_s: 0.0,
    }
}

fn to_map(entries: &BTreeMap<String, f64>) -> BTreeMap<String, BenchmarkResult> {
    entries
        .iter()
        .map(|(name, &median)| (name.clone(), bench(name, median)))
        .collect()
}

fn medians(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(name, median)| (name.to_string(), *median))
        .collect()
}

// ===== Generators =====

fn bench_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").expect("Failed to create name regex")
}

fn median() -> impl Strategy<Value = f64> {
    1.0f64..1_000_000.0
}

fn result_set() -> impl Strategy<Value = BTreeMap<String, f64>> {
    prop::collection::btree_map(bench_name(), median(), 0..12)
}

fn threshold() -> impl Strategy<Value = f64> {
    0.001f64..50.0
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_one_row_per_union_name(
        baseline in result_set(),
        current in result_set(),
        threshold in threshold(),
    ) {
        let comparisons = compare(&to_map(&baseline), &to_map(&current), threshold);
        let union: BTreeSet<&String> = baseline.keys().chain(current.keys()).collect();

        prop_assert_eq!(comparisons.len(), union.len());
        let names: Vec<&String> = comparisons.iter().map(|c| &c.name).collect();
        prop_assert_eq!(names, union.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_identical_medians_are_unchanged(
        results in result_set(),
        threshold in threshold(),
    ) {
        let map = to_map(&results);
        for comparison in compare(&map, &map, threshold) {
            prop_assert_eq!(comparison.status, ComparisonStatus::Unchanged);
            prop_assert_eq!(comparison.diff_pct, 0.0);
        }
    }

    #[test]
    fn prop_one_sided_names_are_new_or_removed(
        baseline in result_set(),
        current in result_set(),
        threshold in 0.0f64..1000.0,
    ) {
        let comparisons = compare(&to_map(&baseline), &to_map(&current), threshold);
        for comparison in &comparisons {
            let in_baseline = baseline.contains_key(&comparison.name);
            let in_current = current.contains_key(&comparison.name);
            match (in_baseline, in_current) {
                (false, true) => prop_assert_eq!(comparison.status, ComparisonStatus::New),
                (true, false) => prop_assert_eq!(comparison.status, ComparisonStatus::Removed),
                _ => prop_assert!(!matches!(
                    comparison.status,
                    ComparisonStatus::New | ComparisonStatus::Removed
                )),
            }
        }
    }

    #[test]
    fn prop_regression_sort_starts_with_max(
        baseline in result_set(),
        current in result_set(),
    ) {
        let comparisons = compare(&to_map(&baseline), &to_map(&current), 5.0);
        let ordered = sorted(&comparisons, SortMetric::Regression);

        prop_assert_eq!(ordered.len(), comparisons.len());
        if let Some(first) = ordered.first() {
            let max = comparisons
                .iter()
                .map(|c| c.diff_pct)
                .fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(first.diff_pct, max);
        }
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].diff_pct >= pair[1].diff_pct);
        }
    }

    #[test]
    fn prop_json_round_trip_keeps_statuses(
        baseline in result_set(),
        current in result_set(),
        threshold in threshold(),
    ) {
        let comparisons = compare(&to_map(&baseline), &to_map(&current), threshold);
        let json = render_json(&comparisons, threshold).expect("render failed");
        let parsed: JsonReport = serde_json::from_str(&json).expect("re-parse failed");

        prop_assert_eq!(parsed.summary.counts, Summary::from_comparisons(&comparisons));
        let expected: Vec<(String, ComparisonStatus)> =
            comparisons.iter().map(|c| (c.name.clone(), c.status)).collect();
        let actual: Vec<(String, ComparisonStatus)> =
            parsed.comparisons.iter().map(|c| (c.name.clone(), c.status)).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ===== Fixed cases =====

#[test]
fn test_stable_ties_in_regression_sort() {
    let baseline = medians(&[("a", 100.0), ("b", 100.0), ("c", 100.0)]);
    let current = medians(&[("a", 110.0), ("b", 110.0), ("c", 200.0)]);

    let comparisons = compare(&to_map(&baseline), &to_map(&current), 5.0);
    let ordered = sorted(&comparisons, SortMetric::Regression);
    let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}
