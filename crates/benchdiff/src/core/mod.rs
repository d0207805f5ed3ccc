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

//! Core report infrastructure.
//!
//! # Modules
//!
//! - `config`: Defaults and report settings
//! - `results`: Results documents and the loader

pub mod config;
pub mod results;

// Re-export commonly used types
pub use config::{
    max_file_size, CompareConfig, HtmlConfig, DEFAULT_HTML_OUTPUT, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_REPORT_TITLE, DEFAULT_THRESHOLD_PCT, HIGHLIGHT_THRESHOLD_PCT, MAX_FILE_SIZE_ENV,
};
pub use results::{load_results, parse_results, BenchmarkResult, ResultsFile, RunConfig};
