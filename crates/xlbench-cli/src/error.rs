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

//! Structured error types for the XLBench CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting; `main` prints the error and exits non-zero.

use thiserror::Error;
use xlbench_core::HarnessError;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// A harness-engine error (I/O, build failure, CSV export, ...).
    #[error(transparent)]
    Harness(#[from] HarnessError),

    /// A `--benchmark` filter named a benchmark the suite does not define.
    #[error("Unknown benchmark '{name}'. Known benchmarks: {known}")]
    UnknownBenchmark {
        /// The unmatched filter value
        name: String,
        /// Comma-separated known benchmark names
        known: String,
    },
}

impl CliError {
    /// Creates an unknown-benchmark error listing the suite's names.
    pub fn unknown_benchmark(name: impl Into<String>) -> Self {
        let known = xlbench_core::suite()
            .iter()
            .map(|spec| spec.name)
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownBenchmark {
            name: name.into(),
            known,
        }
    }
}
