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

//! Centralized report configuration.
//!
//! Defaults shared by the library and the command-line front-ends, plus the
//! builder-style settings for comparison and HTML reports.

use crate::error::{ReportError, Result};
use crate::harness::sort::SortMetric;
use crate::reporters::html::Theme;
use crate::reporters::OutputFormat;

/// Default regression threshold in percent.
pub const DEFAULT_THRESHOLD_PCT: f64 = 5.0;

/// Default output path for the HTML report.
pub const DEFAULT_HTML_OUTPUT: &str = "benchmark_report.html";

/// Default HTML report title.
pub const DEFAULT_REPORT_TITLE: &str = "Benchmark Report";

/// Default maximum results file size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`] (in bytes).
pub const MAX_FILE_SIZE_ENV: &str = "BENCHDIFF_MAX_FILE_SIZE";

/// Percentage change beyond which the HTML table highlights a row.
pub const HIGHLIGHT_THRESHOLD_PCT: f64 = 5.0;

/// Returns the maximum results file size.
///
/// Reads [`MAX_FILE_SIZE_ENV`]; falls back to [`DEFAULT_MAX_FILE_SIZE`] when
/// the variable is unset or not a valid integer.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Settings for a baseline/current comparison report.
///
/// # Example
///
/// ```
/// use benchdiff::core::config::CompareConfig;
/// use benchdiff::harness::SortMetric;
/// use benchdiff::reporters::OutputFormat;
///
/// let config = CompareConfig::default()
///     .with_threshold(2.5)
///     .with_sort(SortMetric::Regression)
///     .with_format(OutputFormat::Markdown);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    /// Regression threshold in percent.
    pub threshold: f64,
    /// Ordering of the comparison rows.
    pub sort: SortMetric,
    /// Output format.
    pub format: OutputFormat,
}

impl CompareConfig {
    /// Sets the regression threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the sort metric.
    pub fn with_sort(mut self, sort: SortMetric) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks that the threshold is a finite, non-negative percentage.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(ReportError::invalid_config(
                "threshold",
                format!("must be a finite number, got {}", self.threshold),
            ));
        }
        if self.threshold < 0.0 {
            return Err(ReportError::invalid_config(
                "threshold",
                format!("must be non-negative, got {}", self.threshold),
            ));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_PCT,
            sort: SortMetric::Name,
            format: OutputFormat::Text,
        }
    }
}

/// Settings for the HTML report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlConfig {
    /// Page title and heading.
    pub title: String,
    /// Color theme.
    pub theme: Theme,
}

impl HtmlConfig {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            theme: Theme::Light,
        }
    }
}
