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

//! Markdown export for comparison reports.

use crate::harness::{Comparison, ComparisonStatus, Summary};
use crate::reporters::{format_ns, format_number, format_pct, format_throughput};

/// Returns the emoji shown next to a status.
pub fn status_emoji(status: ComparisonStatus) -> &'static str {
    match status {
        ComparisonStatus::Improved => "✅",
        ComparisonStatus::Regressed => "❌",
        ComparisonStatus::Unchanged => "➖",
        ComparisonStatus::New => "🆕",
        ComparisonStatus::Removed => "🗑️",
    }
}

/// Renders comparisons as Markdown.
///
/// Emits a summary list, a detailed results table and, when any benchmark
/// reports throughput, a throughput table.
pub fn render_markdown(comparisons: &[Comparison], threshold: f64) -> String {
    let summary = Summary::from_comparisons(comparisons);
    let mut md = String::new();

    md.push_str("# Benchmark Comparison Report\n\n");

    md.push_str("## Summary\n\n");
    md.push_str(&format!("- **Total Benchmarks**: {}\n", summary.total));
    md.push_str(&format!(
        "- **Improved**: {} ({:.1}%)\n",
        summary.improved,
        summary.share(summary.improved)
    ));
    md.push_str(&format!(
        "- **Regressed**: {} ({:.1}%)\n",
        summary.regressed,
        summary.share(summary.regressed)
    ));
    md.push_str(&format!(
        "- **Unchanged**: {} ({:.1}%)\n",
        summary.unchanged,
        summary.share(summary.unchanged)
    ));
    if summary.new > 0 {
        md.push_str(&format!("- **New**: {}\n", summary.new));
    }
    if summary.removed > 0 {
        md.push_str(&format!("- **Removed**: {}\n", summary.removed));
    }
    md.push_str(&format!(
        "- **Regression Threshold**: {}%\n\n",
        format_number(threshold)
    ));

    md.push_str("## Detailed Results\n\n");
    md.push_str("| Benchmark | Baseline | Current | Diff | Status |\n");
    md.push_str("|-----------|----------|---------|------|--------|\n");

    for comp in comparisons {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} {} |\n",
            escape_cell(&comp.name),
            format_ns(comp.baseline_median),
            format_ns(comp.current_median),
            format_pct(comp.diff_pct),
            status_emoji(comp.status),
            comp.status.as_str().to_uppercase()
        ));
    }
    md.push('\n');

    if comparisons.iter().any(Comparison::has_throughput) {
        md.push_str("## Throughput Comparison\n\n");
        md.push_str("| Benchmark | Baseline | Current | Diff |\n");
        md.push_str("|-----------|----------|---------|------|\n");

        for comp in comparisons.iter().filter(|c| c.has_throughput()) {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_cell(&comp.name),
                format_throughput(comp.baseline_throughput),
                format_throughput(comp.current_throughput),
                format_pct(comp.throughput_diff_pct)
            ));
        }
        md.push('\n');
    }

    md
}

// Pipes would split the table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
