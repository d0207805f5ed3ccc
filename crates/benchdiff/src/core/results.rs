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

//! Benchmark results documents.
//!
//! A results document is the JSON file written by the benchmark engine:
//!
//! ```json
//! {
//!   "config": { "warmup_runs": 1, "measure_runs": 5, "scale": 1.0 },
//!   "results": [
//!     {
//!       "name": "parse_small",
//!       "mean_ns": 1210.5, "median_ns": 1200.0,
//!       "min_ns": 1100.0, "max_ns": 1500.0, "stddev_ns": 40.2,
//!       "p95_ns": 1400.0, "p99_ns": 1480.0,
//!       "iterations": 1000,
//!       "bytes_per_iteration": 512,
//!       "throughput_mb_s": 406.9
//!     }
//!   ]
//! }
//! ```
//!
//! `config` is optional and purely informational: its values are kept as
//! written and never validated. `bytes_per_iteration` and `throughput_mb_s`
//! default to zero, which means "not measured".

use crate::core::config::max_file_size;
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Timing and throughput statistics for one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark name, unique within a document.
    pub name: String,
    /// Mean time per operation in nanoseconds.
    pub mean_ns: f64,
    /// Median time per operation in nanoseconds.
    pub median_ns: f64,
    /// Fastest observed time in nanoseconds.
    pub min_ns: f64,
    /// Slowest observed time in nanoseconds.
    pub max_ns: f64,
    /// Standard deviation in nanoseconds.
    pub stddev_ns: f64,
    /// 95th percentile in nanoseconds.
    pub p95_ns: f64,
    /// 99th percentile in nanoseconds.
    pub p99_ns: f64,
    /// Inner iterations per measured run.
    pub iterations: u64,
    /// Bytes processed per iteration (0 if unknown).
    #[serde(default)]
    pub bytes_per_iteration: u64,
    /// Throughput in MB/s (0 if not measured).
    #[serde(default)]
    pub throughput_mb_s: f64,
}

impl BenchmarkResult {
    /// Returns whether the engine measured throughput for this benchmark.
    pub fn has_throughput(&self) -> bool {
        self.throughput_mb_s > 0.0
    }
}

/// Run settings recorded by the benchmark engine.
///
/// Any JSON value is accepted for each setting; a `null` or missing key is
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Warmup runs before measurement.
    #[serde(default)]
    pub warmup_runs: Option<Value>,
    /// Measured runs per benchmark.
    #[serde(default)]
    pub measure_runs: Option<Value>,
    /// Iteration scale factor.
    #[serde(default)]
    pub scale: Option<Value>,
}

impl RunConfig {
    /// Formats a setting for display: strings unquoted, other values as
    /// JSON, `N/A` when absent.
    pub fn label(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => "N/A".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// A parsed results document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsFile {
    /// Engine run settings.
    #[serde(default)]
    pub config: RunConfig,
    /// Results in document order.
    #[serde(default)]
    pub results: Vec<BenchmarkResult>,
}

impl ResultsFile {
    /// Returns the number of results in the document.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether the document has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Looks up a result by name (last occurrence wins).
    pub fn get(&self, name: &str) -> Option<&BenchmarkResult> {
        self.results.iter().rev().find(|r| r.name == name)
    }

    /// Builds the name-keyed mapping used for comparison.
    ///
    /// When a name appears more than once the later entry replaces the
    /// earlier one.
    pub fn to_map(&self) -> BTreeMap<String, BenchmarkResult> {
        let mut map = BTreeMap::new();
        for result in &self.results {
            if map.insert(result.name.clone(), result.clone()).is_some() {
                warn!(name = %result.name, "duplicate benchmark name, keeping the later entry");
            }
        }
        map
    }
}

/// Parses a results document from a string.
///
/// `origin` is only used to label errors.
pub fn parse_results(content: &str, origin: impl AsRef<Path>) -> Result<ResultsFile> {
    let origin = origin.as_ref();
    let file: ResultsFile =
        serde_json::from_str(content).map_err(|e| ReportError::malformed(origin, e))?;
    debug!(path = %origin.display(), results = file.len(), "parsed results document");
    Ok(file)
}

/// Loads a results document from disk.
///
/// The file size is checked against [`max_file_size`] before reading.
///
/// # Errors
///
/// - [`ReportError::FileNotFound`] if the path does not exist
/// - [`ReportError::FileTooLarge`] if the file exceeds the size limit
/// - [`ReportError::MalformedInput`] if the content is not a valid document
/// - [`ReportError::Io`] for any other read failure
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultsFile> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| ReportError::from_io(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(ReportError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ReportError::from_io(path, e))?;
    parse_results(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "config": {"warmup_runs": 1, "measure_runs": 5, "scale": 1.0},
        "results": [
            {"name": "parse", "mean_ns": 1010.0, "median_ns": 1000.0, "min_ns": 900.0,
             "max_ns": 1200.0, "stddev_ns": 20.0, "p95_ns": 1100.0, "p99_ns": 1150.0,
             "iterations": 100, "bytes_per_iteration": 4096, "throughput_mb_s": 3.9},
            {"name": "dump", "mean_ns": 510.0, "median_ns": 500.0, "min_ns": 450.0,
             "max_ns": 600.0, "stddev_ns": 10.0, "p95_ns": 550.0, "p99_ns": 590.0,
             "iterations": 200}
        ]
    }"#;

    #[test]
    fn test_parse_results() {
        let file = parse_results(SAMPLE, "sample.json").unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file.config.warmup_runs, Some(json!(1)));
        assert_eq!(file.config.measure_runs, Some(json!(5)));
        assert_eq!(file.config.scale, Some(json!(1.0)));
        assert_eq!(file.results[0].name, "parse");
        assert!(file.results[0].has_throughput());
    }

    #[test]
    fn test_optional_fields_default_to_zero() {
        let file = parse_results(SAMPLE, "sample.json").unwrap();
        let dump = file.get("dump").unwrap();
        assert_eq!(dump.bytes_per_iteration, 0);
        assert_eq!(dump.throughput_mb_s, 0.0);
        assert!(!dump.has_throughput());
    }

    #[test]
    fn test_missing_config_and_results() {
        let file = parse_results("{}", "empty.json").unwrap();
        assert!(file.is_empty());
        assert_eq!(file.config, RunConfig::default());
    }

    #[test]
    fn test_config_values_of_any_type_are_kept() {
        let content = r#"{
            "config": {"warmup_runs": 1.5, "measure_runs": -1, "scale": "2x", "seed": 7},
            "results": [
                {"name": "a", "mean_ns": 1.0, "median_ns": 1.0, "min_ns": 1.0, "max_ns": 1.0,
                 "stddev_ns": 0.0, "p95_ns": 1.0, "p99_ns": 1.0, "iterations": 1}
            ]
        }"#;
        let file = parse_results(content, "odd_config.json").unwrap();
        assert_eq!(file.len(), 1);
        assert_eq!(file.config.warmup_runs, Some(json!(1.5)));
        assert_eq!(file.config.measure_runs, Some(json!(-1)));
        assert_eq!(file.config.scale, Some(json!("2x")));
    }

    #[test]
    fn test_config_label() {
        assert_eq!(RunConfig::label(None), "N/A");
        assert_eq!(RunConfig::label(Some(&Value::Null)), "N/A");
        assert_eq!(RunConfig::label(Some(&json!(3))), "3");
        assert_eq!(RunConfig::label(Some(&json!(1.0))), "1.0");
        assert_eq!(RunConfig::label(Some(&json!(1.5))), "1.5");
        assert_eq!(RunConfig::label(Some(&json!("2x"))), "2x");

        let config: RunConfig = serde_json::from_str(r#"{"scale": null}"#).unwrap();
        assert_eq!(RunConfig::label(config.scale.as_ref()), "N/A");
    }

    #[test]
    fn test_missing_required_field() {
        let content = r#"{"results": [{"name": "x", "median_ns": 1.0}]}"#;
        let err = parse_results(content, "partial.json").unwrap_err();
        assert!(matches!(err, ReportError::MalformedInput { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_results("{\"results\": [", "broken.json").unwrap_err();
        match err {
            ReportError::MalformedInput { path, .. } => {
                assert_eq!(path, Path::new("broken.json"));
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_to_map_later_duplicate_wins() {
        let content = r#"{"results": [
            {"name": "a", "mean_ns": 1.0, "median_ns": 1.0, "min_ns": 1.0, "max_ns": 1.0,
             "stddev_ns": 0.0, "p95_ns": 1.0, "p99_ns": 1.0, "iterations": 1},
            {"name": "a", "mean_ns": 2.0, "median_ns": 2.0, "min_ns": 2.0, "max_ns": 2.0,
             "stddev_ns": 0.0, "p95_ns": 2.0, "p99_ns": 2.0, "iterations": 1}
        ]}"#;
        let file = parse_results(content, "dup.json").unwrap();
        let map = file.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"].median_ns, 2.0);
        assert_eq!(file.get("a").unwrap().median_ns, 2.0);
    }

    #[test]
    fn test_load_results_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(SAMPLE.as_bytes()).unwrap();

        let file = load_results(temp.path()).unwrap();
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn test_load_results_missing_file() {
        let err = load_results("/nonexistent/results.json").unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }
}
