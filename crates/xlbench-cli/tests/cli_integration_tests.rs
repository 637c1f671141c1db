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

//! CLI integration tests against a scripted fake implementation tree.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

// Test helper to create an xlbench command
fn xlbench_cmd() -> Command {
    Command::cargo_bin("xlbench").expect("Failed to find xlbench binary")
}

// Fibonacci needs no generated data, so tests stay fast.
fn scaffold_fib(root: &Path, lang: &str) {
    let dir = root.join(format!("implementations/{}/03_Fibonacci/01_default", lang));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("run.sh"),
        "printf '1.0\\n2.0\\n3.0\\n'\necho \"fib($1) M=$2\"\n",
    )
    .unwrap();
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    xlbench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cross-language micro-benchmark harness"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    xlbench_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xlbench"));
}

#[test]
fn test_no_subcommand_fails() {
    xlbench_cmd().assert().failure();
}

// ===== Run Command Tests =====

#[test]
fn test_run_produces_results_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_fib(dir.path(), "Sh");

    xlbench_cmd()
        .arg("run")
        .arg("--root")
        .arg(dir.path())
        .arg("--repetitions")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discovered 1 entries, 1 selected"))
        .stdout(predicate::str::contains("Benchmark run complete."));

    assert!(dir
        .path()
        .join("results/Sh/03_Fibonacci/01_default/stdout_run_L_0002")
        .exists());

    let summary = fs::read_to_string(dir.path().join("site/summary.csv")).unwrap();
    assert!(summary.contains("Fibonacci;Sh;default"));
    assert!(dir.path().join("site/index.html").exists());
    assert!(dir.path().join("site/03_Fibonacci/index.html").exists());
}

#[test]
fn test_run_no_report_skips_site() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_fib(dir.path(), "Sh");

    xlbench_cmd()
        .arg("run")
        .arg("--root")
        .arg(dir.path())
        .arg("--repetitions")
        .arg("1")
        .arg("--no-report")
        .assert()
        .success();

    assert!(dir.path().join("results").exists());
    assert!(!dir.path().join("site").exists());
}

#[test]
fn test_run_lang_filter() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_fib(dir.path(), "Fast");
    scaffold_fib(dir.path(), "Slow");

    xlbench_cmd()
        .arg("run")
        .arg("--root")
        .arg(dir.path())
        .arg("--repetitions")
        .arg("1")
        .arg("--lang")
        .arg("Fast")
        .arg("--no-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discovered 2 entries, 1 selected"));

    assert!(dir.path().join("results/Fast").exists());
    assert!(!dir.path().join("results/Slow").exists());
}

#[test]
fn test_run_unknown_benchmark_filter_fails() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_fib(dir.path(), "Sh");

    xlbench_cmd()
        .arg("run")
        .arg("--root")
        .arg(dir.path())
        .arg("--benchmark")
        .arg("Quicksort")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown benchmark 'Quicksort'"))
        .stderr(predicate::str::contains("Fibonacci"));

    assert!(!dir.path().join("results").exists());
}

// ===== Report Command Tests =====

#[test]
fn test_report_after_run() {
    let dir = tempfile::tempdir().unwrap();
    scaffold_fib(dir.path(), "Sh");

    xlbench_cmd()
        .arg("run")
        .arg("--root")
        .arg(dir.path())
        .arg("--repetitions")
        .arg("1")
        .arg("--no-report")
        .assert()
        .success();

    xlbench_cmd()
        .arg("report")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports written to"));

    assert!(dir.path().join("site/summary.csv").exists());
}

#[test]
fn test_report_without_results_is_noop() {
    let dir = tempfile::tempdir().unwrap();

    xlbench_cmd()
        .arg("report")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));

    assert!(!dir.path().join("site").exists());
}
