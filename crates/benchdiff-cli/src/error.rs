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

//! Structured error types for the benchdiff command-line tools.
//!
//! All commands return `Result<T, CliError>`; the binaries print the
//! message and exit with status 1.

use benchdiff::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchdiff_cli::error::CliError;
///
/// fn load(path: &str) -> Result<(), CliError> {
///     let results = benchdiff::load_results(path)?;
///     if results.is_empty() {
///         return Err(CliError::empty("baseline"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Loading, validating or rendering failed in the library.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// An input document contained no benchmark results.
    #[error("No {role} results found")]
    EmptyResultSet {
        /// Which input was empty (`baseline`, `current`, ...)
        role: String,
    },

    /// Writing the report failed.
    #[error("Failed to write '{}': {message}", path.display())]
    WriteFailure {
        /// Output path, or `<stdout>`
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Creates an empty-result-set error for the given input role.
    pub fn empty(role: impl Into<String>) -> Self {
        Self::EmptyResultSet { role: role.into() }
    }

    /// Creates a write error from an I/O failure.
    pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
