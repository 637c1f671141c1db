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

//! Report command - render reports from existing results.

use crate::cli::ReportArgs;
use crate::error::CliError;
use colored::Colorize;
use xlbench_core::{report, Layout};

/// Renders all CSVs and HTML pages from the results tree.
pub fn report(args: &ReportArgs) -> Result<(), CliError> {
    let layout = Layout::new(&args.root);
    report::render_all(&layout)?;
    println!("{} Reports written to {}", "✓".green().bold(), layout.site_dir().display());
    Ok(())
}
