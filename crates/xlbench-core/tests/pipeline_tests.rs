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

//! End-to-end pipeline tests against a scripted fake implementation tree.
//!
//! The Fibonacci benchmark needs no generated input data, so these tests
//! run the full prepare/build/run pipeline and the reporting pass without
//! touching large files.

use std::fs;
use std::path::Path;
use xlbench_core::{discovery, exec, report, HarnessError, Layout, Size, Tree};

/// Creates a Fibonacci implementation directory with the given scripts.
fn scaffold_impl(root: &Path, lang: &str, run_sh: &str, build_sh: Option<&str>) {
    let dir = root.join(format!("implementations/{}/03_Fibonacci/01_default", lang));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("run.sh"), run_sh).unwrap();
    if let Some(script) = build_sh {
        fs::write(dir.join("build.sh"), script).unwrap();
    }
    fs::write(
        dir.join("benchmark.yml"),
        "source-file: run.sh\ndescription: scripted fake\n",
    )
    .unwrap();
}

const RUN_SH: &str = "printf '1.0\\n2.0\\n3.0\\n'\necho \"fib($1) M=$2\"\n";

#[test]
fn run_all_captures_every_size_and_repetition() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    scaffold_impl(dir.path(), "Sh", RUN_SH, Some("touch built.marker\n"));

    let entries = discovery::discover_entries(&layout, Tree::Implementations).unwrap();
    assert_eq!(entries.len(), 1);

    let options = exec::RunOptions {
        repetitions: 2,
        keep_going: false,
    };
    exec::run_all(&layout, &entries, &options).unwrap();

    // The build phase ran in the implementation directory.
    assert!(dir
        .path()
        .join("implementations/Sh/03_Fibonacci/01_default/built.marker")
        .exists());

    // One capture per (size, repetition), carrying the size's arguments.
    for size in Size::ALL {
        for run_id in 1..=2 {
            let path = layout.stdout_file(&entries[0], size, run_id);
            assert!(path.exists(), "missing capture: {}", path.display());
        }
    }
    let small = fs::read_to_string(layout.stdout_file(&entries[0], Size::S, 1)).unwrap();
    assert!(small.contains("fib(34) M=145806"));
    let large = fs::read_to_string(layout.stdout_file(&entries[0], Size::L, 2)).unwrap();
    assert!(large.contains("fib(38) M=644537"));
}

#[test]
fn failed_run_still_persists_capture_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    scaffold_impl(dir.path(), "Sh", "printf 'broken\\n'; exit 7\n", None);

    let entries = discovery::discover_entries(&layout, Tree::Implementations).unwrap();
    let options = exec::RunOptions {
        repetitions: 1,
        keep_going: false,
    };
    exec::run_all(&layout, &entries, &options).unwrap();

    let capture = fs::read_to_string(layout.stdout_file(&entries[0], Size::M, 1)).unwrap();
    assert_eq!(capture, "broken\n");
}

#[test]
fn build_failure_is_fatal_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    scaffold_impl(dir.path(), "Sh", RUN_SH, Some("exit 1\n"));

    let entries = discovery::discover_entries(&layout, Tree::Implementations).unwrap();
    let err = exec::run_all(&layout, &entries, &exec::RunOptions::default()).unwrap_err();
    assert!(matches!(err, HarnessError::BuildFailed { .. }));
}

#[test]
fn keep_going_drops_only_the_failing_entry() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    scaffold_impl(dir.path(), "Bad", RUN_SH, Some("exit 1\n"));
    scaffold_impl(dir.path(), "Good", RUN_SH, None);

    let entries = discovery::discover_entries(&layout, Tree::Implementations).unwrap();
    assert_eq!(entries.len(), 2);

    let options = exec::RunOptions {
        repetitions: 1,
        keep_going: true,
    };
    exec::run_all(&layout, &entries, &options).unwrap();

    let good = entries.iter().find(|e| e.language == "Good").unwrap();
    let bad = entries.iter().find(|e| e.language == "Bad").unwrap();
    assert!(layout.stdout_file(good, Size::S, 1).exists());
    assert!(!layout.stdout_file(bad, Size::S, 1).exists());
}

#[test]
fn run_then_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path());
    scaffold_impl(dir.path(), "Sh", RUN_SH, None);

    let entries = discovery::discover_entries(&layout, Tree::Implementations).unwrap();
    let options = exec::RunOptions {
        repetitions: 3,
        keep_going: false,
    };
    exec::run_all(&layout, &entries, &options).unwrap();
    report::render_all(&layout).unwrap();

    let spec = xlbench_core::find_benchmark("Fibonacci").unwrap();
    let summary = fs::read_to_string(layout.summary_csv()).unwrap();
    assert!(summary.contains("Fibonacci;Sh;default"));
    assert!(summary.contains(";6.0;1.0;1"));

    let raw = fs::read_to_string(layout.raw_runtime_csv(spec, 1, "Total")).unwrap();
    // 1 entry x 3 sizes x 3 repetitions, plus the header.
    assert_eq!(raw.lines().count(), 10);

    let page = fs::read_to_string(layout.benchmark_index_html(spec)).unwrap();
    assert!(page.contains("fib(38) M=644537"));
    assert!(page.contains("scripted fake"));
}
