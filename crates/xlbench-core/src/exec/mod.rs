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

//! The execution pipeline: prepare data, build, run.
//!
//! The pipeline is strictly sequential. Runs are the cartesian product of
//! (entry, size, repetition), shuffled so that languages and repetitions
//! interleave instead of one implementation monopolizing a warm machine.

mod process;

pub use process::{build_entry, run_entry, run_script, BuildOutcome, ScriptOutput};

use crate::console::{format_elapsed, print_bold, print_warn};
use crate::entry::BenchmarkEntry;
use crate::error::{HarnessError, Result};
use crate::layout::Layout;
use crate::size::Size;
use crate::suite::{find_benchmark, BenchmarkSpec};
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::time::Instant;

/// Options for one pipeline invocation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Repetitions per (entry, size).
    pub repetitions: u32,
    /// Continue past build failures, dropping the failing entry.
    pub keep_going: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            repetitions: 5,
            keep_going: false,
        }
    }
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}

fn entry_display(entry: &BenchmarkEntry) -> String {
    format!(
        "{} / {} / {}",
        entry.language, entry.benchmark_name, entry.impl_name
    )
}

/// Drops entries whose benchmark name has no suite definition.
fn known_entries(entries: &[BenchmarkEntry]) -> Vec<BenchmarkEntry> {
    entries
        .iter()
        .filter(|entry| {
            let known = find_benchmark(&entry.benchmark_name).is_some();
            if !known {
                print_warn(&format!(
                    "Skipping '{}': no benchmark definition for '{}'",
                    entry_display(entry),
                    entry.benchmark_name
                ));
            }
            known
        })
        .cloned()
        .collect()
}

fn prepare_data(layout: &Layout, entries: &[BenchmarkEntry]) -> Result<()> {
    let names: BTreeSet<&str> = entries.iter().map(|e| e.benchmark_name.as_str()).collect();
    for name in names {
        let Some(spec) = find_benchmark(name) else {
            continue;
        };
        print_bold(&format!("\nPreparing Benchmark: {}", name));
        let (result, secs) = timed(|| spec.ensure_data(layout));
        result?;
        println!("{}", format_elapsed(secs));
    }
    Ok(())
}

fn build_all(
    layout: &Layout,
    entries: &[BenchmarkEntry],
    options: &RunOptions,
) -> Result<Vec<BenchmarkEntry>> {
    let mut runnable = Vec::with_capacity(entries.len());
    for entry in entries {
        print_bold(&format!("\nBuilding: {}", entry_display(entry)));
        let (outcome, secs) = timed(|| build_entry(layout, entry));
        println!("{}", format_elapsed(secs));

        match outcome? {
            BuildOutcome::Skipped | BuildOutcome::Succeeded => runnable.push(entry.clone()),
            BuildOutcome::Failed(code) => {
                if options.keep_going {
                    print_warn(&format!(
                        "Dropping '{}' from the run phase (--keep-going).",
                        entry_display(entry)
                    ));
                } else {
                    return Err(HarnessError::BuildFailed {
                        entry: entry_display(entry),
                        code,
                    });
                }
            }
        }
    }
    Ok(runnable)
}

fn run_benchmarks(
    layout: &Layout,
    entries: &[BenchmarkEntry],
    options: &RunOptions,
) -> Result<()> {
    let mut runs: Vec<(&BenchmarkEntry, &'static BenchmarkSpec, Size, u32)> = Vec::new();
    for entry in entries {
        let Some(spec) = find_benchmark(&entry.benchmark_name) else {
            continue;
        };
        for size in Size::ALL {
            for run_id in 1..=options.repetitions {
                runs.push((entry, spec, size, run_id));
            }
        }
    }
    runs.shuffle(&mut rand::thread_rng());

    let total = runs.len();
    for (i, (entry, spec, size, run_id)) in runs.into_iter().enumerate() {
        print_bold(&format!(
            "\nRunning benchmark [{} / {}]: {} / {} / {}",
            i + 1,
            total,
            entry_display(entry),
            size,
            run_id,
        ));

        let args = spec.args(layout, size);
        let stdout_path = layout.stdout_file(entry, size, run_id);
        let (result, secs) = timed(|| run_entry(layout, entry, &args, &stdout_path));
        result?;
        println!("{}", format_elapsed(secs));
    }
    Ok(())
}

/// Runs the full pipeline (prepare, build, run) over the given entries.
///
/// Entries without a suite definition are skipped with a warning. Build
/// failures abort unless [`RunOptions::keep_going`] is set; run failures
/// are printed and skipped, never fatal.
pub fn run_all(layout: &Layout, entries: &[BenchmarkEntry], options: &RunOptions) -> Result<()> {
    let entries = known_entries(entries);
    if entries.is_empty() {
        print_warn("No benchmark entries to run.");
        return Ok(());
    }

    prepare_data(layout, &entries)?;
    let runnable = build_all(layout, &entries, options)?;
    run_benchmarks(layout, &runnable, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.repetitions, 5);
        assert!(!options.keep_going);
    }

    #[test]
    fn test_known_entries_drops_undefined_benchmarks() {
        let entries = vec![
            BenchmarkEntry::new("Rust", 3, "Fibonacci", 1, "default"),
            BenchmarkEntry::new("Rust", 9, "Quicksort", 1, "default"),
        ];
        let known = known_entries(&entries);
        assert_eq!(known.len(), 1);
        assert_eq!(known[0].benchmark_name, "Fibonacci");
    }

    #[test]
    fn test_timed_returns_result() {
        let (value, secs) = timed(|| 41 + 1);
        assert_eq!(value, 42);
        assert!(secs >= 0.0);
    }
}
