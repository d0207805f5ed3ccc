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

//! Fixed-width text report.

use crate::harness::{Comparison, ComparisonStatus, Summary};
use crate::reporters::{format_ns, format_number, format_pct, format_throughput};
use std::fmt::Write;

const RULE_WIDTH: usize = 100;

/// Returns the status column label.
pub fn status_label(status: ComparisonStatus) -> &'static str {
    match status {
        ComparisonStatus::Improved => "✓ IMPROVED",
        ComparisonStatus::Regressed => "✗ REGRESSED",
        ComparisonStatus::Unchanged => "- UNCHANGED",
        ComparisonStatus::New => "+ NEW",
        ComparisonStatus::Removed => "- REMOVED",
    }
}

/// Renders comparisons as a fixed-width text report.
pub fn render_text(comparisons: &[Comparison], threshold: f64) -> String {
    let summary = Summary::from_comparisons(comparisons);
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(RULE_WIDTH));
    lines.push("Benchmark Comparison Report".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(String::new());

    lines.push(format!("Total Benchmarks: {}", summary.total));
    lines.push(format!(
        "  Improved:  {} ({:.1}%)",
        summary.improved,
        summary.share(summary.improved)
    ));
    lines.push(format!(
        "  Regressed: {} ({:.1}%)",
        summary.regressed,
        summary.share(summary.regressed)
    ));
    lines.push(format!(
        "  Unchanged: {} ({:.1}%)",
        summary.unchanged,
        summary.share(summary.unchanged)
    ));
    if summary.new > 0 {
        lines.push(format!("  New:       {}", summary.new));
    }
    if summary.removed > 0 {
        lines.push(format!("  Removed:   {}", summary.removed));
    }
    lines.push(format!("Regression Threshold: {}%", format_number(threshold)));
    lines.push(String::new());

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "{:<40} {:<15} {:<15} {:<15} {:<10}",
        "Benchmark", "Baseline", "Current", "Diff", "Status"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for comp in comparisons {
        lines.push(format!(
            "{:<40} {:<15} {:<15} {:<15} {:<10}",
            comp.name,
            format_ns(comp.baseline_median),
            format_ns(comp.current_median),
            format_pct(comp.diff_pct),
            status_label(comp.status)
        ));

        if comp.has_throughput() {
            lines.push(format!(
                "{:<40} {:<15} {:<15} {:<15}",
                "  → Throughput",
                format_throughput(comp.baseline_throughput),
                format_throughput(comp.current_throughput),
                format_pct(comp.throughput_diff_pct)
            ));
        }
    }

    lines.push("=".repeat(RULE_WIDTH));

    let mut out = String::new();
    for line in &lines {
        let _ = writeln!(out, "{}", line);
    }
    out
}
