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

//! Report command - HTML page for one results file

use super::write_output;
use crate::error::CliError;
use benchdiff::core::config::HtmlConfig;
use benchdiff::{load_results, HtmlReport};
use colored::Colorize;
use tracing::info;

/// Render `results` as an HTML page and write it to `output`.
///
/// An empty results file still produces a valid page. A baseline whose
/// benchmarks share no names with `results` adds nothing to the page.
///
/// # Errors
///
/// Returns `Err` if either input cannot be loaded or the page cannot be
/// written.
pub fn report(
    results: &str,
    baseline: Option<&str>,
    config: HtmlConfig,
    output: &str,
) -> Result<(), CliError> {
    let current = load_results(results)?;
    let baseline = baseline.map(|path| load_results(path)).transpose()?;

    let mut builder = HtmlReport::new(&current).with_config(config);
    if let Some(baseline) = baseline.as_ref() {
        builder = builder.with_baseline(baseline);
    }

    let html = builder.render();
    info!(
        benchmarks = current.len(),
        baseline = baseline.is_some(),
        bytes = html.len(),
        "rendered HTML report"
    );

    write_output(&html, Some(output))?;
    eprintln!("{} {}", "HTML report generated:".green(), output);
    Ok(())
}
