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

//! Benchmark-entry discovery over the directory naming convention.
//!
//! Entries are identified by matching the three path components below a
//! tree root: `<Language>/<NN>_<Benchmark>/<NN>_<Implementation>`.
//! Directories that do not match the `NN_name` pattern are ignored, which
//! lets scratch directories coexist with real entries.

use crate::entry::BenchmarkEntry;
use crate::error::{HarnessError, Result};
use crate::layout::Layout;
use std::path::{Path, PathBuf};

/// Which tree to discover entries from.
///
/// Running discovers from `implementations/`; reporting discovers from
/// `results/`, so it also covers results produced by earlier invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tree {
    /// The `implementations/` tree.
    Implementations,
    /// The `results/` tree.
    Results,
}

/// Splits a `NN_name` directory component into (id, name).
///
/// Returns `None` when the component does not match the convention.
fn parse_numbered(component: &str) -> Option<(u32, String)> {
    let (digits, name) = component.split_once('_')?;
    if digits.is_empty() || name.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id = digits.parse().ok()?;
    Some((id, name.to_string()))
}

/// Lists immediate subdirectories, sorted by name.
fn subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| HarnessError::io(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Discovers all benchmark entries under one tree.
///
/// The result is sorted by (language, benchmark id, implementation id,
/// implementation name). A missing tree root yields an empty list rather
/// than an error, so reporting on a fresh checkout is a no-op.
pub fn discover_entries(layout: &Layout, tree: Tree) -> Result<Vec<BenchmarkEntry>> {
    let base = match tree {
        Tree::Implementations => layout.implementations_dir(),
        Tree::Results => layout.results_dir(),
    };
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for lang_dir in subdirs(&base)? {
        let Some(language) = dir_name(&lang_dir) else {
            continue;
        };
        for bench_dir in subdirs(&lang_dir)? {
            let Some((benchmark_id, benchmark_name)) =
                dir_name(&bench_dir).and_then(parse_numbered)
            else {
                continue;
            };
            for impl_dir in subdirs(&bench_dir)? {
                let Some((impl_id, impl_name)) = dir_name(&impl_dir).and_then(parse_numbered)
                else {
                    continue;
                };
                let mut entry = BenchmarkEntry::new(
                    language,
                    benchmark_id,
                    benchmark_name.clone(),
                    impl_id,
                    impl_name,
                );
                // Metadata always lives in the implementation tree, also
                // for entries discovered from results/.
                entry.load_metadata(layout);
                entries.push(entry);
            }
        }
    }

    entries.sort_by(|a, b| {
        (&a.language, a.benchmark_id, a.impl_id, &a.impl_name)
            .cmp(&(&b.language, b.benchmark_id, b.impl_id, &b.impl_name))
    });
    Ok(entries)
}

/// Filters entries by language and benchmark name.
///
/// An empty filter list means "keep all".
pub fn filter_entries(
    entries: &[BenchmarkEntry],
    langs: &[String],
    benchmarks: &[String],
) -> Vec<BenchmarkEntry> {
    entries
        .iter()
        .filter(|entry| {
            let lang_ok = langs.is_empty() || langs.iter().any(|l| *l == entry.language);
            let bench_ok =
                benchmarks.is_empty() || benchmarks.iter().any(|b| *b == entry.benchmark_name);
            lang_ok && bench_ok
        })
        .cloned()
        .collect()
}
