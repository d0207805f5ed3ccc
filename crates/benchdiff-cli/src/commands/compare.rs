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

//! Compare command - baseline vs current report

use super::{ensure_non_empty, write_output};
use crate::error::CliError;
use benchdiff::core::config::CompareConfig;
use benchdiff::harness::{compare_files, sort_comparisons, Summary};
use benchdiff::load_results;
use benchdiff::reporters::render;
use colored::Colorize;
use tracing::info;

/// Compare two results files and write the report.
///
/// Both files are loaded before either is checked for emptiness, so a load
/// failure in either file wins over an empty baseline. Without `output` the
/// report goes to stdout.
///
/// # Arguments
///
/// * `baseline` - Path to the baseline results
/// * `current` - Path to the current results
/// * `config` - Threshold, sort order and format
/// * `output` - Optional output file path
///
/// # Errors
///
/// Returns `Err` if:
/// - Either file cannot be loaded or holds no results
/// - The report cannot be rendered or written
///
/// # Examples
///
/// ```no_run
/// use benchdiff::core::config::CompareConfig;
/// use benchdiff_cli::commands::compare;
///
/// # fn main() -> Result<(), benchdiff_cli::error::CliError> {
/// compare("baseline.json", "current.json", &CompareConfig::default(), None)?;
/// # Ok(())
/// # }
/// ```
pub fn compare(
    baseline: &str,
    current: &str,
    config: &CompareConfig,
    output: Option<&str>,
) -> Result<(), CliError> {
    let baseline_results = load_results(baseline)?;
    let current_results = load_results(current)?;
    ensure_non_empty(&baseline_results, "baseline")?;
    ensure_non_empty(&current_results, "current")?;

    let mut comparisons = compare_files(&baseline_results, &current_results, config.threshold);
    sort_comparisons(&mut comparisons, config.sort);

    let summary = Summary::from_comparisons(&comparisons);
    info!(
        total = summary.total,
        improved = summary.improved,
        regressed = summary.regressed,
        format = config.format.as_str(),
        "compared benchmark results"
    );

    let report = render(config.format, &comparisons, config.threshold)?;
    write_output(&report, output)?;

    if let Some(path) = output {
        eprintln!("{} {}", "Report written to:".green(), path);
    }
    Ok(())
}
