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

//! Build and run subprocess execution.
//!
//! Implementations are opaque: each entry directory may carry a `build.sh`
//! and must carry a `run.sh`; both are executed through `bash` with the
//! entry directory as working directory, streams fully captured.

use crate::console::{print_error, print_warn};
use crate::entry::BenchmarkEntry;
use crate::error::{HarnessError, Result};
use crate::layout::Layout;
use std::path::Path;
use std::process::Command;

/// Captured output of one script execution.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
    /// Captured stdout (lossily decoded).
    pub stdout: String,
    /// Captured stderr (lossily decoded).
    pub stderr: String,
}

impl ScriptOutput {
    /// True when the script exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn code_display(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "killed by signal".to_string(),
        }
    }
}

/// Outcome of the build phase for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No `build.sh` present; nothing to do.
    Skipped,
    /// Build script exited with status zero.
    Succeeded,
    /// Build script failed with the given exit code.
    Failed(Option<i32>),
}

/// Runs `bash <script> <args...>` in `dir`, capturing both streams.
pub fn run_script(dir: &Path, script: &str, args: &[String]) -> Result<ScriptOutput> {
    let output = Command::new("bash")
        .arg(script)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| HarnessError::Spawn {
            script: script.to_string(),
            dir: dir.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(ScriptOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Builds one entry via its `build.sh`, if present.
///
/// Stderr output alone is only a warning; compilers routinely write
/// progress there. A non-zero exit is reported as [`BuildOutcome::Failed`]
/// and left to the caller's failure policy.
pub fn build_entry(layout: &Layout, entry: &BenchmarkEntry) -> Result<BuildOutcome> {
    let dir = layout.impl_dir(entry);
    if !dir.join("build.sh").exists() {
        return Ok(BuildOutcome::Skipped);
    }

    let out = run_script(&dir, "build.sh", &[])?;
    if !out.stderr.is_empty() {
        print_warn("Build has written to STDERR (which may or may not be an issue):");
        println!("{}", out.stderr);
    }

    println!("Return code: {}", out.code_display());
    if !out.success() {
        print_error("Build has failed.");
        println!("STDOUT:\n{}", out.stdout);
        println!("STDERR:\n{}", out.stderr);
        return Ok(BuildOutcome::Failed(out.code));
    }
    Ok(BuildOutcome::Succeeded)
}

/// Runs one entry via its `run.sh` and persists the captured stdout.
///
/// The capture is written byte-for-byte even when the run fails, so a
/// later reporting pass sees exactly what the program printed. Failures
/// are printed and swallowed; a single bad run never stops the schedule.
pub fn run_entry(
    layout: &Layout,
    entry: &BenchmarkEntry,
    args: &[String],
    stdout_path: &Path,
) -> Result<()> {
    let dir = layout.impl_dir(entry);
    let out = run_script(&dir, "run.sh", args)?;

    if !out.success() {
        print_error(&format!(
            "Run has failed with return code {}.",
            out.code_display()
        ));
        println!("STDOUT:\n{}", out.stdout);
        println!("STDERR:\n{}", out.stderr);
    } else if !out.stderr.is_empty() {
        print_error("Run has return code 0, but wrote to STDERR.");
        println!("STDOUT:\n{}", out.stdout);
        println!("STDERR:\n{}", out.stderr);
    } else {
        println!("Captured stdout of length: {}", out.stdout.len());
        print!("{}", out.stdout);
    }

    if let Some(parent) = stdout_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
    }
    std::fs::write(stdout_path, out.stdout).map_err(|e| HarnessError::io(stdout_path, e))
}
