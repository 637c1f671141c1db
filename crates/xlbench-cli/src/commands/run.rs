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

//! Run command - execute the benchmark pipeline, then render reports.

use crate::cli::RunArgs;
use crate::error::CliError;
use colored::Colorize;
use xlbench_core::{discovery, exec, find_benchmark, report, Layout, Tree};

/// Runs the prepare/build/run pipeline over the selected entries and,
/// unless `--no-report` is given, renders the reports afterwards.
pub fn run(args: &RunArgs) -> Result<(), CliError> {
    for name in &args.benchmarks {
        if find_benchmark(name).is_none() {
            return Err(CliError::unknown_benchmark(name));
        }
    }

    let layout = Layout::new(&args.root);
    let entries = discovery::discover_entries(&layout, Tree::Implementations)?;
    let selected = discovery::filter_entries(&entries, &args.langs, &args.benchmarks);
    println!(
        "Discovered {} entries, {} selected",
        entries.len(),
        selected.len()
    );

    let options = exec::RunOptions {
        repetitions: args.repetitions,
        keep_going: args.keep_going,
    };
    exec::run_all(&layout, &selected, &options)?;

    if !args.no_report {
        report::render_all(&layout)?;
    }

    println!("{} Benchmark run complete.", "✓".green().bold());
    Ok(())
}
