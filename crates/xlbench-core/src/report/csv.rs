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

//! CSV export of extracted results.
//!
//! All CSVs use `;` as the field delimiter. Headers come from the row
//! struct field names, so the on-disk schema is fixed by the types here.

use super::{ExtractedBenchmark, SummaryRow};
use crate::error::{HarnessError, Result};
use crate::layout::Layout;
use crate::size::Size;
use crate::stats;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RawRuntimeRow<'a> {
    lang: &'a str,
    descr: String,
    label: String,
    size: Size,
    run_id: u32,
    time: f64,
}

#[derive(Serialize)]
struct StageSummaryRow<'a> {
    lang: &'a str,
    descr: String,
    label: String,
    stage: &'a str,
    time: f64,
}

fn writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
    }
    csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| HarnessError::csv(path, e))
}

/// Writes one raw runtime CSV per stage (`Total` included), every sample
/// as its own row.
pub fn write_raw_runtime_csv(layout: &Layout, bench: &ExtractedBenchmark) -> Result<()> {
    for (index, stage) in bench.spec.stages.iter().copied().enumerate() {
        let path = layout.raw_runtime_csv(bench.spec, index + 1, stage);
        let mut out = writer(&path)?;
        for (entry, runs) in &bench.entries {
            for (size, run_id, time) in runs.samples(bench.spec, stage) {
                out.serialize(RawRuntimeRow {
                    lang: &entry.language,
                    descr: entry.impl_suffix(),
                    label: entry.label(),
                    size,
                    run_id,
                    time,
                })
                .map_err(|e| HarnessError::csv(&path, e))?;
            }
        }
        out.flush().map_err(|e| HarnessError::io(&path, e))?;
    }
    Ok(())
}

/// Writes the per-benchmark stage summary: the median runtime of the
/// largest size per measured stage (`Total` excluded).
pub fn write_stage_summary_csv(layout: &Layout, bench: &ExtractedBenchmark) -> Result<()> {
    let path = layout.stage_summary_csv(bench.spec);
    let mut out = writer(&path)?;
    for (entry, runs) in &bench.entries {
        for stage in bench.spec.measured_stages().iter().copied() {
            let samples = runs.samples_of_size(bench.spec, stage, Size::L);
            let Some(time) = stats::median(&samples) else {
                continue;
            };
            out.serialize(StageSummaryRow {
                lang: &entry.language,
                descr: entry.impl_suffix(),
                label: entry.label(),
                stage,
                time,
            })
            .map_err(|e| HarnessError::csv(&path, e))?;
        }
    }
    out.flush().map_err(|e| HarnessError::io(&path, e))
}

/// Writes the global summary CSV.
pub fn write_summary_csv(layout: &Layout, rows: &[SummaryRow]) -> Result<()> {
    let path = layout.summary_csv();
    let mut out = writer(&path)?;
    for row in rows {
        out.serialize(row).map_err(|e| HarnessError::csv(&path, e))?;
    }
    out.flush().map_err(|e| HarnessError::io(&path, e))
}
