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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Discover, build and run benchmark entries, then render reports.
    Run(RunArgs),
    /// Render reports from existing results without re-running anything.
    Report(ReportArgs),
}

/// Arguments of `xlbench run`.
#[derive(Args)]
pub struct RunArgs {
    /// Harness root directory (contains implementations/ and results/).
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Number of repetitions for each (entry, size).
    #[arg(long, default_value_t = 5)]
    pub repetitions: u32,

    /// Filter entries by programming language (repeatable).
    #[arg(long = "lang")]
    pub langs: Vec<String>,

    /// Filter entries by benchmark name (repeatable).
    #[arg(long = "benchmark")]
    pub benchmarks: Vec<String>,

    /// Continue with the remaining entries when a build fails.
    #[arg(long)]
    pub keep_going: bool,

    /// Skip report rendering after the run.
    #[arg(long)]
    pub no_report: bool,
}

/// Arguments of `xlbench report`.
#[derive(Args)]
pub struct ReportArgs {
    /// Harness root directory (contains implementations/ and results/).
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if discovery fails, a build fails without
    /// `--keep-going`, report rendering fails, or a `--benchmark` filter
    /// names an undefined benchmark.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run(args) => commands::run(&args),
            Commands::Report(args) => commands::report(&args),
        }
    }
}
