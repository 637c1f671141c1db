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

//! Fibonacci benchmark definition.

use super::{BenchmarkSpec, InputSpec};

// M grows as 1.45^(N - 2) so the repeated variants stay measurable while
// the naive recursion stays feasible.
pub(super) static SPEC: BenchmarkSpec = BenchmarkSpec {
    id: 3,
    name: "Fibonacci",
    title: "Fibonacci",
    description: "\
Compute the N-th Fibonacci number using three different, popular implementations:

- Naive Recursion: Version using the naive recursion (1 iteration).
- Tail Recursion: Version using the tail recursion (M iterations).
- Iterative: Iterative version using loops (M iterations).

Each version runs in a separate benchmark stage.
In order to bring the tail-recursive and the iterative versions into a
measurable range, the implementations have to repeat the computation M
times, updating a checksum according to:

    checksum = 0
    for i in 0 .. M:
        checksum += fibonacci(N)
        checksum %= 2147483647

Benchmark aspects: Recursion

Input:

- N -- The Fibonacci number to compute.
- M -- The number of repetitions for the tail-recursive and iterative implementations.

Control output, after the stage run times:

- N-th Fibonacci result (from the first stage)
- checksum from the second stage
- checksum from the third stage
",
    stages: &["Total", "Naive Recursion", "Tail Recursion", "Iterative"],
    linear_scale: false,
    input: InputSpec::Arguments {
        n: [34, 36, 38],
        m: [145_806, 306_557, 644_537],
    },
};
