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

//! XLBench Harness Engine
//!
//! Discovers per-language benchmark implementations laid out under a
//! directory naming convention, prepares their input data, builds and runs
//! each entry across three problem sizes and N repetitions, extracts
//! stage-level timings from captured stdout, and renders comparative HTML
//! and CSV reports.
//!
//! ## Pipeline
//!
//! The harness is a linear three-phase pipeline over the selected entries:
//!
//! 1. **Prepare**: generate missing input data files.
//! 2. **Build**: run each entry's `build.sh` (if present).
//! 3. **Run**: execute `run.sh` for every (entry, size, repetition),
//!    capturing stdout into the results tree.
//!
//! Reporting is a separate pass that re-discovers entries from the results
//! tree, so it also covers results produced by earlier invocations.
//!
//! ## Usage
//!
//! ```no_run
//! use xlbench_core::{discovery, exec, report, Layout, Tree};
//!
//! # fn main() -> xlbench_core::Result<()> {
//! let layout = Layout::new(".");
//! let entries = discovery::discover_entries(&layout, Tree::Implementations)?;
//! exec::run_all(&layout, &entries, &exec::RunOptions::default())?;
//! report::render_all(&layout)?;
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod data;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod exec;
pub mod extract;
pub mod layout;
pub mod report;
pub mod size;
pub mod stats;
pub mod suite;

// Re-export key types for convenience
pub use discovery::{discover_entries, filter_entries, Tree};
pub use entry::{BenchmarkEntry, ImplMetadata};
pub use error::{HarnessError, Result};
pub use extract::{EntryRuns, RunRecord};
pub use layout::Layout;
pub use size::Size;
pub use suite::{find_benchmark, suite, BenchmarkSpec, InputSpec};
