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

//! Benchmark entries and their per-implementation metadata.
//!
//! A benchmark entry is one (language, benchmark, implementation) triple,
//! identified purely by its directory path under `implementations/`.

use crate::console::print_warn;
use crate::layout::{numbered, Layout};
use crate::size::Size;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional metadata from an implementation's `benchmark.yml`.
///
/// A missing or malformed file degrades to empty metadata with a warning;
/// metadata is never required to run an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImplMetadata {
    /// Main source file, relative to the implementation directory.
    #[serde(rename = "source-file")]
    pub source_file: Option<String>,
    /// Free-form description of the implementation.
    pub description: Option<String>,
}

impl ImplMetadata {
    /// Loads metadata from a `benchmark.yml` path, degrading to defaults.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                print_warn(&format!(
                    "Failed to read meta data from '{}': {}",
                    path.display(),
                    err
                ));
                return Self::default();
            }
        };
        match serde_yaml::from_str(&text) {
            Ok(meta) => meta,
            Err(err) => {
                print_warn(&format!(
                    "Failed to parse YAML in '{}': {}",
                    path.display(),
                    err
                ));
                Self::default()
            }
        }
    }
}

/// One (language, benchmark, implementation) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkEntry {
    /// Language directory name, e.g. `Rust` or `C++`.
    pub language: String,
    /// Benchmark ordinal from the directory name.
    pub benchmark_id: u32,
    /// Benchmark name from the directory name, e.g. `Wordcount`.
    pub benchmark_name: String,
    /// Implementation ordinal from the directory name.
    pub impl_id: u32,
    /// Implementation name from the directory name, e.g. `default`.
    pub impl_name: String,
    /// Metadata loaded from `benchmark.yml`, if present.
    pub metadata: ImplMetadata,
}

impl BenchmarkEntry {
    /// Creates an entry with empty metadata.
    pub fn new(
        language: impl Into<String>,
        benchmark_id: u32,
        benchmark_name: impl Into<String>,
        impl_id: u32,
        impl_name: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            benchmark_id,
            benchmark_name: benchmark_name.into(),
            impl_id,
            impl_name: impl_name.into(),
            metadata: ImplMetadata::default(),
        }
    }

    /// Loads `benchmark.yml` from the implementation directory.
    pub fn load_metadata(&mut self, layout: &Layout) {
        let path = layout.impl_dir(self).join("benchmark.yml");
        if path.exists() {
            self.metadata = ImplMetadata::load(&path);
        }
    }

    /// Benchmark directory component, e.g. `01_Wordcount`.
    pub fn benchmark_dir_name(&self) -> String {
        numbered(self.benchmark_id, &self.benchmark_name)
    }

    /// Implementation directory component, e.g. `02_numpy`.
    pub fn impl_dir_name(&self) -> String {
        numbered(self.impl_id, &self.impl_name)
    }

    /// Implementation name with `_` separators expanded for display
    /// (`default_hashmap` -> `default, hashmap`).
    pub fn impl_suffix(&self) -> String {
        self.impl_name.split('_').collect::<Vec<_>>().join(", ")
    }

    /// Display label, e.g. `Rust (default)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.language, self.impl_suffix())
    }

    /// Root-relative URL of the implementation's main source file, if the
    /// metadata names one.
    pub fn source_url(&self, layout: &Layout) -> Option<String> {
        self.metadata
            .source_file
            .as_ref()
            .map(|file| format!("{}/{}", layout.impl_rel_path(self), file))
    }

    /// Sorted captured-stdout files of one size, oldest repetition first.
    ///
    /// The zero-padded repetition suffix makes lexicographic order equal
    /// repetition order.
    pub fn result_files(&self, layout: &Layout, size: Size) -> Vec<PathBuf> {
        let dir = layout.result_dir(self);
        let prefix = Layout::stdout_prefix(size);
        let mut files: Vec<PathBuf> = match std::fs::read_dir(&dir) {
            Ok(iter) => iter
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.starts_with(&prefix))
                        .unwrap_or(false)
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}
