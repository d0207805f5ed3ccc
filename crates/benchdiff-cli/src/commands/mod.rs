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

//! Command implementations.
//!
//! - [`compare`](compare()): Baseline/current comparison report
//! - [`report`](report()): HTML report for one results file
//!
//! Shared helpers for loading inputs, writing outputs and installing the
//! log subscriber live here.

mod compare;
mod report;

pub use compare::compare;
pub use report::report;

use crate::error::CliError;
use benchdiff::ResultsFile;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "benchdiff=warn";

/// Installs the stderr log subscriber.
///
/// Honors `RUST_LOG`; otherwise only warnings from the benchdiff crates are
/// shown so report output stays clean. Calling this more than once is a
/// no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Rejects a loaded results document that holds no benchmarks.
///
/// `role` names the input in the error message (`baseline`, `current`).
///
/// # Errors
///
/// Returns [`CliError::EmptyResultSet`] if `results` is empty.
pub fn ensure_non_empty(results: &ResultsFile, role: &str) -> Result<(), CliError> {
    if results.is_empty() {
        return Err(CliError::empty(role));
    }
    Ok(())
}

/// Write output to a file or stdout.
///
/// # Arguments
///
/// * `content` - The content to write
/// * `path` - Optional output file path. If `None`, writes to stdout
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::write_failure(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::write_failure("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let path = path.to_str().unwrap();

        write_output("hello\n", Some(path)).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_output("x", path.to_str()).unwrap_err();
        assert!(matches!(err, CliError::WriteFailure { .. }));
    }

    #[test]
    fn test_ensure_non_empty() {
        let empty = ResultsFile::default();
        assert_eq!(
            ensure_non_empty(&empty, "current").unwrap_err(),
            CliError::empty("current")
        );

        let results = benchdiff::parse_results(
            r#"{"results": [{"name": "a", "mean_ns": 1.0, "median_ns": 1.0, "min_ns": 1.0,
                "max_ns": 1.0, "stddev_ns": 0.0, "p95_ns": 1.0, "p99_ns": 1.0,
                "iterations": 1}]}"#,
            "one.json",
        )
        .unwrap();
        assert!(ensure_non_empty(&results, "baseline").is_ok());
    }
}
