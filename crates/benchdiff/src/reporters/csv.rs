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

//! CSV export for comparison reports.
//!
//! Values are written raw (nanoseconds, MB/s, percentages) so the file can
//! be loaded into a spreadsheet. Numbers always carry a decimal point
//! (`500.0`); the new/removed sentinels appear as `inf` and `-inf`.

use crate::error::{ReportError, Result};
use crate::harness::Comparison;

/// Column header of the CSV export.
pub const CSV_HEADER: [&str; 9] = [
    "Benchmark",
    "Baseline (ns)",
    "Current (ns)",
    "Diff (ns)",
    "Diff (%)",
    "Baseline Throughput (MB/s)",
    "Current Throughput (MB/s)",
    "Throughput Diff (%)",
    "Status",
];

/// Renders comparisons as CSV with a fixed nine-column header.
pub fn render_csv(comparisons: &[Comparison]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    for comp in comparisons {
        wtr.write_record([
            comp.name.clone(),
            raw(comp.baseline_median),
            raw(comp.current_median),
            raw(comp.diff_ns),
            raw(comp.diff_pct),
            raw(comp.baseline_throughput),
            raw(comp.current_throughput),
            raw(comp.throughput_diff_pct),
            comp.status.as_str().to_string(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Serialization(format!("Failed to flush CSV writer: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ReportError::Serialization(format!("CSV output is not UTF-8: {}", e)))
}

// Shortest round-trip form, keeping `.0` on whole numbers.
fn raw(value: f64) -> String {
    format!("{:?}", value)
}
