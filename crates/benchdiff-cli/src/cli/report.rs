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

//! `bench-report` arguments.

use crate::commands;
use crate::error::CliError;
use benchdiff::core::config::{HtmlConfig, DEFAULT_HTML_OUTPUT, DEFAULT_REPORT_TITLE};
use clap::Parser;

/// Generate an HTML report from benchmark results
///
/// Writes a single self-contained page with configuration cards, charts and
/// a statistics table. With `--baseline`, adds a comparison chart and a
/// "vs Baseline" column.
///
/// # Examples
///
/// ```bash
/// bench-report results.json
/// bench-report results.json --baseline main.json --theme dark -o pr.html
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "bench-report")]
#[command(author, version, about = "Generate an HTML report from benchmark results", long_about = None)]
pub struct ReportArgs {
    /// Results file (JSON)
    #[arg(value_name = "RESULTS")]
    pub results: String,

    /// Output HTML file
    #[arg(short, long, default_value = DEFAULT_HTML_OUTPUT)]
    pub output: String,

    /// Report title
    #[arg(long, default_value = DEFAULT_REPORT_TITLE)]
    pub title: String,

    /// Baseline results file for comparison
    #[arg(long)]
    pub baseline: Option<String>,

    /// Color theme
    #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
    pub theme: String,
}

impl ReportArgs {
    /// Builds the HTML settings from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown theme name.
    pub fn config(&self) -> Result<HtmlConfig, CliError> {
        Ok(HtmlConfig::default()
            .with_title(self.title.as_str())
            .with_theme(self.theme.parse()?))
    }

    /// Execute the report generation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input fails to load or the page cannot be written.
    pub fn execute(&self) -> Result<(), CliError> {
        let config = self.config()?;
        commands::report(
            &self.results,
            self.baseline.as_deref(),
            config,
            &self.output,
        )
    }
}
