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

//! Comparative report rendering.
//!
//! Reporting re-discovers entries from the results tree (not from the run
//! that may just have happened), extracts every captured run, and writes:
//!
//! - per-benchmark raw runtime CSVs (one per stage) and a stage summary
//!   CSV under `site/<NN>_<Benchmark>/`,
//! - a per-benchmark HTML page,
//! - the global `site/summary.csv` and `site/index.html`.
//!
//! Comparisons use the median runtime of the largest size; an entry with
//! no parseable `L` runs is skipped from summaries with a warning.

mod csv;
mod html;

pub use csv::{write_raw_runtime_csv, write_stage_summary_csv, write_summary_csv};
pub use html::{render_benchmark_page, render_summary_page};

use crate::console::{print_bold, print_warn};
use crate::discovery::{discover_entries, Tree};
use crate::entry::BenchmarkEntry;
use crate::error::{HarnessError, Result};
use crate::extract::{extract_entry_runs, EntryRuns};
use crate::layout::Layout;
use crate::size::Size;
use crate::stats;
use crate::suite::{suite, BenchmarkSpec};
use rayon::prelude::*;

/// Extracted results of one benchmark, in entry discovery order.
#[derive(Debug, Clone)]
pub struct ExtractedBenchmark {
    /// The benchmark definition.
    pub spec: &'static BenchmarkSpec,
    /// Entries with their parsed runs.
    pub entries: Vec<(BenchmarkEntry, EntryRuns)>,
}

/// One row of the global summary.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SummaryRow {
    /// Benchmark name.
    pub benchmark: String,
    /// Language of the entry.
    pub lang: String,
    /// Implementation suffix, e.g. `default, hashmap`.
    pub descr: String,
    /// Root-relative source URL, empty when the metadata names none.
    pub url: String,
    /// Display label.
    pub label: String,
    /// Median `Total` runtime of the largest size, in seconds.
    pub time: f64,
    /// Runtime relative to the fastest entry of the benchmark.
    pub relative: f64,
    /// 1-based rank within the benchmark (ties share a rank).
    pub rank: usize,
}

/// Median `Total` runtime of the largest size, the comparison metric.
pub(crate) fn median_largest_total(
    spec: &BenchmarkSpec,
    runs: &EntryRuns,
) -> Option<f64> {
    stats::median(&runs.samples_of_size(spec, "Total", Size::L))
}

/// Discovers and extracts all results, grouped by benchmark in suite
/// order. Benchmarks without results are omitted; result directories with
/// no suite definition are warned about and skipped.
pub fn collect_results(layout: &Layout) -> Result<Vec<ExtractedBenchmark>> {
    let entries = discover_entries(layout, Tree::Results)?;

    for entry in &entries {
        if crate::suite::find_benchmark(&entry.benchmark_name).is_none() {
            print_warn(&format!(
                "Ignoring results for unknown benchmark '{}'",
                entry.benchmark_name
            ));
        }
    }

    let mut benchmarks = Vec::new();
    for spec in suite() {
        let group: Vec<&BenchmarkEntry> = entries
            .iter()
            .filter(|e| e.benchmark_name == spec.name)
            .collect();
        if group.is_empty() {
            continue;
        }
        let extracted: Vec<(BenchmarkEntry, EntryRuns)> = group
            .par_iter()
            .map(|&entry| (entry.clone(), extract_entry_runs(layout, entry, spec)))
            .collect();
        benchmarks.push(ExtractedBenchmark {
            spec,
            entries: extracted,
        });
    }
    Ok(benchmarks)
}

/// Builds the global summary rows: per benchmark, the median `L` total of
/// each entry plus rank and runtime relative to the fastest.
pub fn summary_rows(layout: &Layout, benchmarks: &[ExtractedBenchmark]) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    for bench in benchmarks {
        let mut measured: Vec<(&BenchmarkEntry, f64)> = Vec::new();
        for (entry, runs) in &bench.entries {
            match median_largest_total(bench.spec, runs) {
                Some(time) => measured.push((entry, time)),
                None => print_warn(&format!(
                    "No usable runs for '{}' / {}; skipping in summary",
                    entry.label(),
                    bench.spec.name
                )),
            }
        }

        let times: Vec<f64> = measured.iter().map(|(_, t)| *t).collect();
        let ranked = stats::rank_and_relative(&times);
        for ((entry, time), (rank, relative)) in measured.into_iter().zip(ranked) {
            rows.push(SummaryRow {
                benchmark: bench.spec.name.to_string(),
                lang: entry.language.clone(),
                descr: entry.impl_suffix(),
                url: entry.source_url(layout).unwrap_or_default(),
                label: entry.label(),
                time,
                relative,
                rank,
            });
        }
    }
    rows
}

/// Renders all CSVs and HTML pages from the results tree.
pub fn render_all(layout: &Layout) -> Result<()> {
    let benchmarks = collect_results(layout)?;
    if benchmarks.is_empty() {
        print_warn("No results found; nothing to report.");
        return Ok(());
    }

    for bench in &benchmarks {
        print_bold(&format!(
            "\nRendering html of benchmark '{}' with {} entries",
            bench.spec.name,
            bench.entries.len()
        ));
        let dir = layout.site_benchmark_dir(bench.spec);
        std::fs::create_dir_all(&dir).map_err(|e| HarnessError::io(&dir, e))?;

        write_raw_runtime_csv(layout, bench)?;
        write_stage_summary_csv(layout, bench)?;
        render_benchmark_page(layout, bench)?;
    }

    print_bold("\nRendering main html");
    let rows = summary_rows(layout, &benchmarks);
    write_summary_csv(layout, &rows)?;
    render_summary_page(layout, &benchmarks, &rows)
}
