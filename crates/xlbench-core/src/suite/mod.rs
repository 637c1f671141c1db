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

//! The benchmark suite registry.
//!
//! Each benchmark is a static [`BenchmarkSpec`]: its stage list, per-size
//! parameters, the positional arguments passed to implementations, and the
//! input data it needs. Implementations are opaque executables; the spec
//! only describes the contract between harness and program.

mod basicmatops;
mod fibonacci;
mod wordcount;

use crate::console::print_warn;
use crate::data;
use crate::error::Result;
use crate::layout::Layout;
use crate::size::Size;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::PathBuf;

/// Input contract of a benchmark, with per-size parameters indexed S, M, L.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// A generated text file of random words, sized by character count.
    /// The file path is the single positional argument.
    GeneratedText {
        /// Characters to generate per size.
        chars: [usize; 3],
    },
    /// A generated N x N matrix CSV. Arguments are N and the file path
    /// twice (two operands; implementations must read both individually).
    GeneratedMatrix {
        /// Matrix dimension per size.
        n: [usize; 3],
    },
    /// No input files; positional arguments are (N, M) computed per size.
    Arguments {
        /// First argument per size.
        n: [u32; 3],
        /// Second argument per size.
        m: [u64; 3],
    },
}

/// Static definition of one benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSpec {
    /// Fixed ordinal used in directory and page names.
    pub id: u32,
    /// Name as it appears in directory names.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Description shown on the benchmark's report page.
    pub description: &'static str,
    /// Stage names in output order; the first is always the synthetic
    /// `Total` stage, which is never printed by implementations.
    pub stages: &'static [&'static str],
    /// Whether runtimes of this benchmark plot sensibly on a linear scale.
    pub linear_scale: bool,
    /// Input contract and per-size parameters.
    pub input: InputSpec,
}

impl BenchmarkSpec {
    /// The stages implementations actually print, i.e. all but `Total`.
    pub fn measured_stages(&self) -> &'static [&'static str] {
        &self.stages[1..]
    }

    /// Generated input files required by this benchmark, with the size
    /// they belong to.
    pub fn data_files(&self, layout: &Layout) -> Vec<(Size, PathBuf)> {
        match &self.input {
            InputSpec::GeneratedText { .. } => Size::ALL
                .iter()
                .map(|&s| (s, layout.data_file(&format!("random_words_{}.txt", s))))
                .collect(),
            InputSpec::GeneratedMatrix { .. } => Size::ALL
                .iter()
                .map(|&s| (s, layout.data_file(&format!("matrix_{}.txt", s))))
                .collect(),
            InputSpec::Arguments { .. } => Vec::new(),
        }
    }

    /// Positional arguments passed to `run.sh` for one size.
    pub fn args(&self, layout: &Layout, size: Size) -> Vec<String> {
        let i = size.index();
        match &self.input {
            InputSpec::GeneratedText { .. } => {
                let (_, path) = self.data_files(layout).remove(i);
                vec![path.display().to_string()]
            }
            InputSpec::GeneratedMatrix { n } => {
                let (_, path) = self.data_files(layout).remove(i);
                let path = path.display().to_string();
                vec![n[i].to_string(), path.clone(), path]
            }
            InputSpec::Arguments { n, m } => {
                vec![n[i].to_string(), m[i].to_string()]
            }
        }
    }

    /// Human-readable size parameters, e.g. `N = 36, M = 306557`.
    pub fn size_description(&self, size: Size) -> String {
        let i = size.index();
        match &self.input {
            InputSpec::GeneratedText { chars } => format!("{} characters", chars[i]),
            InputSpec::GeneratedMatrix { n } => format!("N = {}", n[i]),
            InputSpec::Arguments { n, m } => format!("N = {}, M = {}", n[i], m[i]),
        }
    }

    /// Generates any missing input data files.
    ///
    /// Generation of the large tiers takes a while, so each file is
    /// announced before work starts.
    pub fn ensure_data(&self, layout: &Layout) -> Result<()> {
        let files = self.data_files(layout);
        match &self.input {
            InputSpec::GeneratedText { chars } => {
                for (size, path) in files {
                    if !path.exists() {
                        print_warn(&format!(
                            " *** Generating data [{}], this might take a while...",
                            path.display()
                        ));
                        data::generate_text(&path, chars[size.index()])?;
                    }
                }
            }
            InputSpec::GeneratedMatrix { n } => {
                for (size, path) in files {
                    if !path.exists() {
                        print_warn(&format!(
                            " *** Generating data [{}], this might take a while...",
                            path.display()
                        ));
                        data::generate_matrix(&path, n[size.index()])?;
                    }
                }
            }
            InputSpec::Arguments { .. } => {}
        }
        Ok(())
    }
}

static SUITE: &[&BenchmarkSpec] = &[&wordcount::SPEC, &basicmatops::SPEC, &fibonacci::SPEC];

static BY_NAME: Lazy<HashMap<&'static str, &'static BenchmarkSpec>> =
    Lazy::new(|| SUITE.iter().map(|spec| (spec.name, *spec)).collect());

/// The full benchmark suite, ordered by id.
pub fn suite() -> &'static [&'static BenchmarkSpec] {
    SUITE
}

/// Looks up a benchmark by its directory name.
pub fn find_benchmark(name: &str) -> Option<&'static BenchmarkSpec> {
    BY_NAME.get(name).copied()
}
