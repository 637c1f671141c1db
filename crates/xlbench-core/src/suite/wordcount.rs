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

//! Wordcount benchmark definition.

use super::{BenchmarkSpec, InputSpec};

pub(super) static SPEC: BenchmarkSpec = BenchmarkSpec {
    id: 1,
    name: "Wordcount",
    title: "Wordcount",
    description: "\
Perform a simple word count on a text file.
To isolate I/O from other aspects, all solutions should implement the following stages:

- IO: Read entire file into memory (one large string).
- Split: Split string on split characters: '\\n' and ' ' (single space).
- Count: Iterate over words to build a hash map with counts.

Benchmark aspects: Hash maps, basic string operations, allocation

Input:

- Path of text file to read.

Control output, after the stage run times:

- Size of the word map
- Sum of the counts in the map
",
    stages: &["Total", "IO", "Split", "Count"],
    linear_scale: true,
    input: InputSpec::GeneratedText {
        chars: [1_000_000, 10_000_000, 100_000_000],
    },
};
