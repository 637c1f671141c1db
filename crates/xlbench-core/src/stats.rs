// Dweve XLBench - Cross-Language Benchmark Harness
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

//! Small-vector statistics used by reporting.
//!
//! The sample counts here are tiny (repetitions per size), so everything
//! works on plain slices.

/// Arithmetic mean. Empty input yields `None`.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median with even-length interpolation (the average of the two middle
/// samples). Empty input yields `None`.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Per-entry rank and runtime relative to the fastest entry.
///
/// Rank is 1 plus the number of strictly faster entries, so ties share a
/// rank. Relative runtime is `time / fastest`. Empty input yields an
/// empty vector.
pub fn rank_and_relative(times: &[f64]) -> Vec<(usize, f64)> {
    let Some(fastest) = times.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    times
        .iter()
        .map(|&t| {
            let rank = 1 + times.iter().filter(|&&other| other < t).count();
            (rank, t / fastest)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0]), Some(2.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_even_interpolates() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_rank_and_relative() {
        let ranked = rank_and_relative(&[2.0, 1.0, 4.0]);
        assert_eq!(ranked[0].0, 2);
        assert_eq!(ranked[1].0, 1);
        assert_eq!(ranked[2].0, 3);
        assert_eq!(ranked[0].1, 2.0);
        assert_eq!(ranked[1].1, 1.0);
        assert_eq!(ranked[2].1, 4.0);
    }

    #[test]
    fn test_rank_ties_share_rank() {
        let ranked = rank_and_relative(&[1.0, 1.0, 2.0]);
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[1].0, 1);
        assert_eq!(ranked[2].0, 3);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_and_relative(&[]).is_empty());
    }
}
