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

//! Benchmarks for the result-extraction hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use xlbench_core::extract::parse_run_output;
use xlbench_core::stats;

fn bench_parse_run_output(c: &mut Criterion) {
    let path = Path::new("stdout_run_L_0001");
    let text = "0.123456\n1.234567\n0.345678\n180000\n238000000\n";

    c.bench_function("parse_run_output", |b| {
        b.iter(|| parse_run_output(black_box(path), black_box(text), 3).unwrap())
    });
}

fn bench_median(c: &mut Criterion) {
    let samples: Vec<f64> = (0..100).map(|i| (i * 37 % 100) as f64 / 10.0).collect();

    c.bench_function("median_100", |b| {
        b.iter(|| stats::median(black_box(&samples)).unwrap())
    });
}

criterion_group!(benches, bench_parse_run_output, bench_median);
criterion_main!(benches);
