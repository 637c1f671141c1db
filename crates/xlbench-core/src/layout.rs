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

//! Path construction for the on-disk directory contract.
//!
//! Everything the pipeline touches lives under a single harness root:
//!
//! ```text
//! <root>/
//!   implementations/<Language>/<NN>_<Benchmark>/<NN>_<Impl>/
//!   data/generated/
//!   results/<Language>/<NN>_<Benchmark>/<NN>_<Impl>/stdout_run_<SIZE>_<RRRR>
//!   site/<NN>_<Benchmark>/  plus  site/index.html, site/summary.csv
//! ```
//!
//! [`Layout`] wraps the root and derives every concrete path, so the
//! naming convention is encoded in exactly one place.

use crate::entry::BenchmarkEntry;
use crate::size::Size;
use crate::suite::BenchmarkSpec;
use std::path::{Path, PathBuf};

/// Derives all harness paths from a root directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

/// Formats a numbered directory component, e.g. `01_Wordcount`.
pub(crate) fn numbered(id: u32, name: &str) -> String {
    format!("{:02}_{}", id, name)
}

/// Slugs a stage name for use in a filename ("Naive Recursion" ->
/// "Naive_Recursion").
pub(crate) fn stage_slug(stage: &str) -> String {
    stage.replace(' ', "_")
}

/// Makes a path absolute without requiring it to exist.
///
/// Benchmark scripts execute with their implementation directory as the
/// working directory, so input-file arguments must be absolute.
pub(crate) fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}

impl Layout {
    /// Creates a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The harness root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the implementation tree.
    pub fn implementations_dir(&self) -> PathBuf {
        self.root.join("implementations")
    }

    /// Directory holding captured run output.
    pub fn results_dir(&self) -> PathBuf {
        self.root.join("results")
    }

    /// Directory holding generated input data files.
    pub fn generated_data_dir(&self) -> PathBuf {
        self.root.join("data").join("generated")
    }

    /// Output directory for rendered reports.
    pub fn site_dir(&self) -> PathBuf {
        self.root.join("site")
    }

    /// Absolute path of a generated data file.
    pub fn data_file(&self, name: &str) -> PathBuf {
        absolute(self.generated_data_dir().join(name))
    }

    /// Implementation directory of an entry.
    pub fn impl_dir(&self, entry: &BenchmarkEntry) -> PathBuf {
        self.implementations_dir()
            .join(&entry.language)
            .join(entry.benchmark_dir_name())
            .join(entry.impl_dir_name())
    }

    /// Root-relative implementation path with `/` separators (URL form).
    pub fn impl_rel_path(&self, entry: &BenchmarkEntry) -> String {
        format!(
            "implementations/{}/{}/{}",
            entry.language,
            entry.benchmark_dir_name(),
            entry.impl_dir_name()
        )
    }

    /// Result directory of an entry (mirrors the implementation tree).
    pub fn result_dir(&self, entry: &BenchmarkEntry) -> PathBuf {
        self.results_dir()
            .join(&entry.language)
            .join(entry.benchmark_dir_name())
            .join(entry.impl_dir_name())
    }

    /// Captured-stdout file for one (entry, size, repetition).
    pub fn stdout_file(&self, entry: &BenchmarkEntry, size: Size, run_id: u32) -> PathBuf {
        self.result_dir(entry)
            .join(format!("stdout_run_{}_{:04}", size, run_id))
    }

    /// Filename prefix shared by all captured-stdout files of a size.
    pub fn stdout_prefix(size: Size) -> String {
        format!("stdout_run_{}_", size)
    }

    /// Site subdirectory of one benchmark, e.g. `site/01_Wordcount`.
    pub fn site_benchmark_dir(&self, spec: &BenchmarkSpec) -> PathBuf {
        self.site_dir().join(numbered(spec.id, spec.name))
    }

    /// Per-stage raw runtime CSV, e.g. `site/01_Wordcount/02_IO_plot.csv`.
    ///
    /// `stage_id` counts from 1 over the full stage list, `Total` included.
    pub fn raw_runtime_csv(&self, spec: &BenchmarkSpec, stage_id: usize, stage: &str) -> PathBuf {
        self.site_benchmark_dir(spec)
            .join(format!("{:02}_{}_plot.csv", stage_id, stage_slug(stage)))
    }

    /// Per-benchmark stage summary CSV.
    pub fn stage_summary_csv(&self, spec: &BenchmarkSpec) -> PathBuf {
        self.site_benchmark_dir(spec).join("stage_summary.csv")
    }

    /// Global summary CSV.
    pub fn summary_csv(&self) -> PathBuf {
        self.site_dir().join("summary.csv")
    }

    /// Per-benchmark report page.
    pub fn benchmark_index_html(&self, spec: &BenchmarkSpec) -> PathBuf {
        self.site_benchmark_dir(spec).join("index.html")
    }

    /// Top-level report page.
    pub fn summary_index_html(&self) -> PathBuf {
        self.site_dir().join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::find_benchmark;

    fn entry() -> BenchmarkEntry {
        BenchmarkEntry::new("Rust", 3, "Fibonacci", 1, "default")
    }

    #[test]
    fn test_numbered() {
        assert_eq!(numbered(1, "Wordcount"), "01_Wordcount");
        assert_eq!(numbered(12, "X"), "12_X");
    }

    #[test]
    fn test_stage_slug() {
        assert_eq!(stage_slug("IO"), "IO");
        assert_eq!(stage_slug("Naive Recursion"), "Naive_Recursion");
    }

    #[test]
    fn test_impl_and_result_dirs() {
        let layout = Layout::new("/bench");
        assert_eq!(
            layout.impl_dir(&entry()),
            PathBuf::from("/bench/implementations/Rust/03_Fibonacci/01_default")
        );
        assert_eq!(
            layout.result_dir(&entry()),
            PathBuf::from("/bench/results/Rust/03_Fibonacci/01_default")
        );
    }

    #[test]
    fn test_stdout_file_padding() {
        let layout = Layout::new("/bench");
        let path = layout.stdout_file(&entry(), Size::M, 7);
        assert!(path.ends_with("stdout_run_M_0007"));
    }

    #[test]
    fn test_site_paths() {
        let layout = Layout::new("/bench");
        let spec = find_benchmark("Wordcount").unwrap();
        assert_eq!(
            layout.raw_runtime_csv(spec, 2, "IO"),
            PathBuf::from("/bench/site/01_Wordcount/02_IO_plot.csv")
        );
        assert_eq!(
            layout.stage_summary_csv(spec),
            PathBuf::from("/bench/site/01_Wordcount/stage_summary.csv")
        );
        assert_eq!(layout.summary_csv(), PathBuf::from("/bench/site/summary.csv"));
    }

    #[test]
    fn test_data_file_is_absolute() {
        let layout = Layout::new("relative-root");
        assert!(layout.data_file("random_words_S.txt").is_absolute());
    }

    #[test]
    fn test_impl_rel_path() {
        let layout = Layout::new("/bench");
        assert_eq!(
            layout.impl_rel_path(&entry()),
            "implementations/Rust/03_Fibonacci/01_default"
        );
    }
}
