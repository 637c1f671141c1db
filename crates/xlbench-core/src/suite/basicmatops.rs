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

//! Basic matrix operations benchmark definition.

use super::{BenchmarkSpec, InputSpec};

pub(super) static SPEC: BenchmarkSpec = BenchmarkSpec {
    id: 2,
    name: "BasicMatOps",
    title: "Basic Matrix Operations",
    description: "\
Implement a basic matrix data structure providing addition and multiplication. Rules:

- Default implementations should implement a matrix-like data structure backed by
  the native dynamic array of each language.
- Additional implementations may make use of optimized matrix libraries.
- Required operations: Matrix addition and multiplication.

The benchmark is divided into three stages:

- IO: Read two CSVs and construct matrices.
- Add: Add matrices.
- Mul: Multiply matrices.

Benchmark aspects: Dynamic arrays, indexing, nested loops, code elegance of matrix implementations

Input:

1. Size N of the NxN matrix (allowing to pre-allocate required memory;
   validation of the CSV is not necessary).
2. Path of CSV (first matrix).
3. Path of CSV (second matrix).

Note: The framework may pass the same path as both first and second matrix.
This must not be exploited, i.e., each matrix should still be read individually.

Control output, after the stage run times:

- Sum of diagonal elements after addition
- Sum of diagonal elements after multiplication
",
    stages: &["Total", "IO", "Add", "Mul"],
    linear_scale: false,
    input: InputSpec::GeneratedMatrix { n: [100, 300, 500] },
};
