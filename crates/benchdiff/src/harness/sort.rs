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

//! Ordering of comparison rows.

use crate::error::ReportError;
use crate::harness::comparator::Comparison;
use std::str::FromStr;

/// Sort order for comparison rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMetric {
    /// Lexical by name.
    #[default]
    Name,
    /// Most improved (most negative change) first.
    Improvement,
    /// Most regressed (most positive change) first.
    Regression,
}

impl SortMetric {
    /// Returns the metric name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMetric::Name => "name",
            SortMetric::Improvement => "improvement",
            SortMetric::Regression => "regression",
        }
    }
}

impl FromStr for SortMetric {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortMetric::Name),
            "improvement" => Ok(SortMetric::Improvement),
            "regression" => Ok(SortMetric::Regression),
            other => Err(ReportError::UnknownSort(other.to_string())),
        }
    }
}

/// Sorts comparisons in place by `metric`.
///
/// The sort is stable, so equal keys keep their incoming order. Percentages
/// use total ordering: with `Improvement`, removed benchmarks (`-inf`) come
/// first and new ones (`+inf`) last; `Regression` is the reverse.
pub fn sort_comparisons(comparisons: &mut [Comparison], metric: SortMetric) {
    match metric {
        SortMetric::Name => comparisons.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMetric::Improvement => comparisons.sort_by(|a, b| a.diff_pct.total_cmp(&b.diff_pct)),
        SortMetric::Regression => comparisons.sort_by(|a, b| b.diff_pct.total_cmp(&a.diff_pct)),
    }
}

/// Returns a sorted copy of `comparisons`.
pub fn sorted(comparisons: &[Comparison], metric: SortMetric) -> Vec<Comparison> {
    let mut out = comparisons.to_vec();
    sort_comparisons(&mut out, metric);
    out
}
