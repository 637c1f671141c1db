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

//! Console output helpers.
//!
//! The harness reports progress on stdout: bold banners for pipeline
//! phases, yellow warnings for soft failures that are skipped, red errors
//! for failures worth attention. Warnings and errors never abort the
//! pipeline on their own.

use colored::Colorize;

/// Prints a bold phase banner.
pub fn print_bold(msg: &str) {
    println!("{}", msg.bold());
}

/// Prints a warning (soft failure, execution continues).
pub fn print_warn(msg: &str) {
    println!("{}", msg.yellow());
}

/// Prints an error worth attention.
pub fn print_error(msg: &str) {
    println!("{}", msg.red());
}

/// Formats an elapsed wall-clock duration the way phase timings are shown,
/// e.g. `[   1.2 sec]`.
pub fn format_elapsed(seconds: f64) -> String {
    format!("[{:6.1} sec]", seconds)
}
