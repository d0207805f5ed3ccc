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

//! Error types for loading, comparing and rendering benchmark results.
//!
//! Every failure is terminal for a report invocation: there is no partial
//! result and nothing to retry. Each variant carries enough context for a
//! single human-readable line on stderr.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchdiff operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing a benchmark report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The results file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The results file exceeds the configured size limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes", path.display())]
    FileTooLarge {
        /// Path that exceeded the limit
        path: PathBuf,
        /// Actual size in bytes
        actual: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// The document is not valid JSON or lacks a required field.
    #[error("Invalid JSON in {}: {message}", path.display())]
    MalformedInput {
        /// Path (or label) of the offending document
        path: PathBuf,
        /// Parser message, including line and column
        message: String,
    },

    /// Any other I/O failure while reading a results file.
    #[error("Failed to load {}: {message}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Unrecognized output format name.
    #[error("Unknown format: {0} (expected text, csv, json or markdown)")]
    UnknownFormat(String),

    /// Unrecognized sort metric name.
    #[error("Unknown sort metric: {0} (expected name, improvement or regression)")]
    UnknownSort(String),

    /// Unrecognized HTML theme name.
    #[error("Unknown theme: {0} (expected light or dark)")]
    UnknownTheme(String),

    /// A renderer failed to serialize its output.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReportError {
    /// Classifies an I/O error raised while reading `path`.
    ///
    /// `NotFound` becomes [`ReportError::FileNotFound`]; everything else is
    /// reported as [`ReportError::Io`].
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Io {
                path,
                message: source.to_string(),
            },
        }
    }

    /// Creates a malformed-input error from a JSON parser failure.
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MalformedInput {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates an invalid-config error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}
