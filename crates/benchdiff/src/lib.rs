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

//! BenchDiff
//!
//! Comparison and reporting for JSON benchmark results.
//!
//! ## Features
//!
//! - **Loader**: Reads `{"config": ..., "results": [...]}` documents
//! - **Comparator**: Classifies median changes against a regression threshold
//! - **Reporters**: Text, CSV, JSON and Markdown comparison reports
//! - **HTML**: Self-contained chart page for a single run, optionally vs a baseline
//!
//! ## Usage
//!
//! ```no_run
//! use benchdiff::core::load_results;
//! use benchdiff::harness::{compare_files, sort_comparisons, SortMetric};
//! use benchdiff::reporters::{render, OutputFormat};
//!
//! # fn main() -> benchdiff::Result<()> {
//! let baseline = load_results("baseline.json")?;
//! let current = load_results("current.json")?;
//!
//! let mut comparisons = compare_files(&baseline, &current, 5.0);
//! sort_comparisons(&mut comparisons, SortMetric::Regression);
//! println!("{}", render(OutputFormat::Markdown, &comparisons, 5.0)?);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;

pub use crate::core::{load_results, parse_results, BenchmarkResult, ResultsFile, RunConfig};
pub use error::{ReportError, Result};
pub use harness::{compare, compare_files, Comparison, ComparisonStatus, SortMetric, Summary};
pub use reporters::{HtmlReport, OutputFormat, Theme};
