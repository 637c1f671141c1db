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

//! XLBench Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use xlbench_cli::cli::Commands;

/// XLBench - Cross-language micro-benchmark harness
///
/// Discovers per-language benchmark implementations, runs them across
/// problem sizes and repetitions, and renders comparative HTML/CSV
/// reports.
///
/// # Examples
///
/// ```bash
/// # Run everything with 5 repetitions and render reports
/// xlbench run
///
/// # Run only the Rust Fibonacci entries
/// xlbench run --lang Rust --benchmark Fibonacci
///
/// # Re-render reports from existing results
/// xlbench report
/// ```
#[derive(Parser)]
#[command(name = "xlbench")]
#[command(author, version, about = "XLBench - Cross-language micro-benchmark harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
