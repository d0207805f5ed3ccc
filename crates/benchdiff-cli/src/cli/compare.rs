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

//! `bench-compare` arguments.

use crate::commands;
use crate::error::CliError;
use benchdiff::core::config::CompareConfig;
use clap::Parser;

/// Compare two benchmark result files
///
/// Classifies every benchmark by its median change between the baseline and
/// the current run and prints a report.
///
/// # Examples
///
/// ```bash
/// # Text report on stdout
/// bench-compare baseline.json current.json
///
/// # Markdown, worst regressions first, written to a file
/// bench-compare baseline.json current.json --format markdown \
///     --sort regression -o comparison.md
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "bench-compare")]
#[command(author, version, about = "Compare benchmark results against a baseline", long_about = None)]
pub struct CompareArgs {
    /// Baseline results file (JSON)
    #[arg(value_name = "BASELINE")]
    pub baseline: String,

    /// Current results file (JSON)
    #[arg(value_name = "CURRENT")]
    pub current: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "csv", "json", "markdown"])]
    pub format: String,

    /// Regression threshold in percent
    #[arg(long, default_value_t = benchdiff::core::DEFAULT_THRESHOLD_PCT)]
    pub threshold: f64,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Sort order
    #[arg(long, default_value = "name", value_parser = ["name", "improvement", "regression"])]
    pub sort: String,
}

impl CompareArgs {
    /// Builds the comparison settings from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown format or sort name, or a threshold that
    /// is negative or not finite.
    pub fn config(&self) -> Result<CompareConfig, CliError> {
        let config = CompareConfig::default()
            .with_threshold(self.threshold)
            .with_format(self.format.parse()?)
            .with_sort(self.sort.parse()?);
        config.validate()?;
        Ok(config)
    }

    /// Execute the comparison.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either file fails to load or is empty, the settings
    /// are invalid, or the report cannot be written.
    pub fn execute(&self) -> Result<(), CliError> {
        let config = self.config()?;
        commands::compare(&self.baseline, &self.current, &config, self.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdiff::harness::SortMetric;
    use benchdiff::reporters::OutputFormat;
    use benchdiff::ReportError;

    #[test]
    fn test_defaults() {
        let args = CompareArgs::try_parse_from(["bench-compare", "a.json", "b.json"]).unwrap();
        assert_eq!(args.format, "text");
        assert_eq!(args.sort, "name");
        assert_eq!(args.threshold, 5.0);
        assert!(args.output.is_none());

        let config = args.config().unwrap();
        assert_eq!(config, CompareConfig::default());
    }

    #[test]
    fn test_all_options() {
        let args = CompareArgs::try_parse_from([
            "bench-compare",
            "a.json",
            "b.json",
            "--format",
            "json",
            "--threshold",
            "2.5",
            "--sort",
            "regression",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert_eq!(args.output.as_deref(), Some("out.json"));

        let config = args.config().unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.sort, SortMetric::Regression);
        assert_eq!(config.threshold, 2.5);
    }

    #[test]
    fn test_rejects_unknown_choices() {
        assert!(
            CompareArgs::try_parse_from(["bench-compare", "a", "b", "--format", "yaml"]).is_err()
        );
        assert!(
            CompareArgs::try_parse_from(["bench-compare", "a", "b", "--sort", "speed"]).is_err()
        );
        assert!(CompareArgs::try_parse_from(["bench-compare", "a"]).is_err());
    }

    #[test]
    fn test_negative_threshold_is_invalid() {
        let args = CompareArgs::try_parse_from([
            "bench-compare",
            "a.json",
            "b.json",
            "--threshold=-1",
        ])
        .unwrap();
        assert!(matches!(
            args.config(),
            Err(CliError::Report(ReportError::InvalidConfig { .. }))
        ));
    }
}
