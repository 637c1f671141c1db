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

//! Result extraction from captured stdout.
//!
//! The output contract of every implementation: one floating-point line
//! (seconds) per measured stage, in stage order, followed by the control
//! output lines. The synthetic `Total` stage is the per-run sum of the
//! measured stages.
//!
//! A file that violates the contract is logged and skipped; one broken
//! run never hides an entry's remaining results.

use crate::console::print_warn;
use crate::entry::BenchmarkEntry;
use crate::error::{HarnessError, Result};
use crate::layout::Layout;
use crate::size::Size;
use crate::suite::BenchmarkSpec;
use std::path::Path;

/// Stage timings and control output of one captured run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Problem-size tier of the run.
    pub size: Size,
    /// Repetition id (1-based).
    pub run_id: u32,
    /// Seconds per measured stage, aligned with
    /// [`BenchmarkSpec::measured_stages`].
    pub stage_seconds: Vec<f64>,
    /// Control output lines, kept verbatim for informal spot checks.
    pub control: Vec<String>,
}

impl RunRecord {
    /// The synthetic `Total` stage: sum of the measured stages.
    pub fn total(&self) -> f64 {
        self.stage_seconds.iter().sum()
    }
}

/// All parseable runs of one entry, sorted by (size, run id).
#[derive(Debug, Clone, Default)]
pub struct EntryRuns {
    /// Parsed run records.
    pub records: Vec<RunRecord>,
}

impl EntryRuns {
    /// True when no run of this entry could be parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All samples of one stage as (size, run id, seconds).
    ///
    /// `Total` resolves to the per-run stage sum; an unknown stage name
    /// yields no samples.
    pub fn samples(&self, spec: &BenchmarkSpec, stage: &str) -> Vec<(Size, u32, f64)> {
        if stage == "Total" {
            return self
                .records
                .iter()
                .map(|r| (r.size, r.run_id, r.total()))
                .collect();
        }
        let Some(index) = spec.measured_stages().iter().position(|s| *s == stage) else {
            return Vec::new();
        };
        self.records
            .iter()
            .filter_map(|r| r.stage_seconds.get(index).map(|&t| (r.size, r.run_id, t)))
            .collect()
    }

    /// Samples of one stage restricted to one size.
    pub fn samples_of_size(&self, spec: &BenchmarkSpec, stage: &str, size: Size) -> Vec<f64> {
        self.samples(spec, stage)
            .into_iter()
            .filter(|(s, _, _)| *s == size)
            .map(|(_, _, t)| t)
            .collect()
    }

    /// Control output of the latest parsed run of one size.
    pub fn latest_control(&self, size: Size) -> Option<&[String]> {
        self.records
            .iter()
            .filter(|r| r.size == size)
            .max_by_key(|r| r.run_id)
            .map(|r| r.control.as_slice())
    }
}

/// Parses one captured stdout text.
///
/// The first `n_stages` lines must be finite floating-point seconds;
/// everything after is control output (blank lines dropped).
pub fn parse_run_output(
    path: &Path,
    text: &str,
    n_stages: usize,
) -> Result<(Vec<f64>, Vec<String>)> {
    let malformed = |reason: String| HarnessError::MalformedOutput {
        path: path.to_path_buf(),
        reason,
    };

    let mut lines = text.lines();
    let mut seconds = Vec::with_capacity(n_stages);
    for i in 0..n_stages {
        let line = lines
            .next()
            .ok_or_else(|| malformed(format!("expected {} stage lines, found {}", n_stages, i)))?;
        let value: f64 = line
            .trim()
            .parse()
            .map_err(|_| malformed(format!("stage line {} is not a number: '{}'", i + 1, line.trim())))?;
        if !value.is_finite() {
            return Err(malformed(format!("stage line {} is not finite: '{}'", i + 1, line.trim())));
        }
        seconds.push(value);
    }

    let control = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    Ok((seconds, control))
}

/// Repetition id from a `stdout_run_<SIZE>_<RRRR>` filename.
fn run_id_from_filename(path: &Path) -> Option<u32> {
    path.file_name()?
        .to_str()?
        .rsplit_once('_')
        .and_then(|(_, digits)| digits.parse().ok())
}

/// Extracts every parseable run of one entry from the results tree.
///
/// Unreadable or malformed files are logged as warnings and skipped.
pub fn extract_entry_runs(
    layout: &Layout,
    entry: &BenchmarkEntry,
    spec: &BenchmarkSpec,
) -> EntryRuns {
    let n_stages = spec.measured_stages().len();
    let mut records = Vec::new();

    for size in Size::ALL {
        for (position, path) in entry.result_files(layout, size).into_iter().enumerate() {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    print_warn(&format!("Skipping '{}': {}", path.display(), err));
                    continue;
                }
            };
            match parse_run_output(&path, &text, n_stages) {
                Ok((stage_seconds, control)) => {
                    let run_id =
                        run_id_from_filename(&path).unwrap_or(position as u32 + 1);
                    records.push(RunRecord {
                        size,
                        run_id,
                        stage_seconds,
                        control,
                    });
                }
                Err(err) => print_warn(&format!("Skipping malformed result: {}", err)),
            }
        }
    }

    records.sort_by_key(|r| (r.size, r.run_id));
    EntryRuns { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::find_benchmark;
    use std::fs;
    use std::path::PathBuf;

    fn spec() -> &'static BenchmarkSpec {
        // Three measured stages: IO, Split, Count.
        find_benchmark("Wordcount").unwrap()
    }

    #[test]
    fn test_parse_run_output() {
        let (seconds, control) = parse_run_output(
            &PathBuf::from("x"),
            "0.5\n1.25\n0.125\n180000\n238000000\n",
            3,
        )
        .unwrap();
        assert_eq!(seconds, vec![0.5, 1.25, 0.125]);
        assert_eq!(control, vec!["180000", "238000000"]);
    }

    #[test]
    fn test_parse_run_output_no_control() {
        let (seconds, control) =
            parse_run_output(&PathBuf::from("x"), "1.0\n2.0\n3.0\n", 3).unwrap();
        assert_eq!(seconds.len(), 3);
        assert!(control.is_empty());
    }

    #[test]
    fn test_parse_run_output_too_short() {
        let err = parse_run_output(&PathBuf::from("x"), "0.5\n", 3).unwrap_err();
        assert!(err.to_string().contains("expected 3 stage lines"));
    }

    #[test]
    fn test_parse_run_output_not_a_number() {
        let err = parse_run_output(&PathBuf::from("x"), "0.5\nsegfault\n0.1\n", 3).unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn test_parse_run_output_rejects_nan() {
        assert!(parse_run_output(&PathBuf::from("x"), "nan\n1.0\n1.0\n", 3).is_err());
    }

    #[test]
    fn test_run_id_from_filename() {
        assert_eq!(
            run_id_from_filename(&PathBuf::from("results/stdout_run_S_0007")),
            Some(7)
        );
        assert_eq!(run_id_from_filename(&PathBuf::from("weird")), None);
    }

    #[test]
    fn test_record_total() {
        let record = RunRecord {
            size: Size::S,
            run_id: 1,
            stage_seconds: vec![0.5, 1.0, 0.25],
            control: Vec::new(),
        };
        assert!((record.total() - 1.75).abs() < 1e-12);
    }

    fn write_result(layout: &Layout, entry: &BenchmarkEntry, size: Size, run_id: u32, text: &str) {
        let path = layout.stdout_file(entry, size, run_id);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_extract_entry_runs_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let entry = BenchmarkEntry::new("Rust", 1, "Wordcount", 1, "default");

        write_result(&layout, &entry, Size::S, 1, "0.1\n0.2\n0.3\n42\n");
        write_result(&layout, &entry, Size::S, 2, "garbage\n");
        write_result(&layout, &entry, Size::L, 1, "1.0\n2.0\n3.0\n");

        let runs = extract_entry_runs(&layout, &entry, spec());
        assert_eq!(runs.records.len(), 2);
        assert_eq!(runs.records[0].size, Size::S);
        assert_eq!(runs.records[0].run_id, 1);
        assert_eq!(runs.records[0].control, vec!["42"]);
        assert_eq!(runs.records[1].size, Size::L);
    }

    #[test]
    fn test_samples_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let entry = BenchmarkEntry::new("Rust", 1, "Wordcount", 1, "default");

        write_result(&layout, &entry, Size::S, 1, "0.1\n0.2\n0.3\n");
        write_result(&layout, &entry, Size::S, 2, "0.2\n0.3\n0.4\n");

        let runs = extract_entry_runs(&layout, &entry, spec());
        let io = runs.samples(spec(), "IO");
        assert_eq!(io, vec![(Size::S, 1, 0.1), (Size::S, 2, 0.2)]);

        let totals = runs.samples_of_size(spec(), "Total", Size::S);
        assert_eq!(totals.len(), 2);
        assert!((totals[0] - 0.6).abs() < 1e-12);

        assert!(runs.samples(spec(), "Bogus").is_empty());
    }

    #[test]
    fn test_latest_control() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let entry = BenchmarkEntry::new("Rust", 1, "Wordcount", 1, "default");

        write_result(&layout, &entry, Size::L, 1, "1.0\n1.0\n1.0\nfirst\n");
        write_result(&layout, &entry, Size::L, 2, "1.0\n1.0\n1.0\nsecond\n");

        let runs = extract_entry_runs(&layout, &entry, spec());
        assert_eq!(runs.latest_control(Size::L).unwrap().join(","), "second");
        assert!(runs.latest_control(Size::S).is_none());
    }
}
