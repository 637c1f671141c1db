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

//! Input-data generators.
//!
//! Benchmark inputs are generated once and reused across runs, so the
//! generators favor simplicity over speed. Both create parent directories
//! on demand.

use crate::error::{HarnessError, Result};
use rand::distributions::Uniform;
use rand::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Number of distinct words the text generator draws from.
const WORD_POOL_SIZE: usize = 100_000;

/// Maximum word length in generated text.
const MAX_WORD_LEN: usize = 20;

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
    }
    Ok(())
}

fn random_word(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn write_text(out: &mut impl Write, rng: &mut impl Rng, chars_to_write: usize) -> io::Result<()> {
    let pool: Vec<String> = (0..WORD_POOL_SIZE)
        .map(|_| {
            let len = rng.gen_range(1..=MAX_WORD_LEN);
            random_word(rng, len)
        })
        .collect();

    let mut written = 0usize;
    let mut line_len = 0usize;
    while written < chars_to_write {
        let word = &pool[rng.gen_range(0..pool.len())];
        if line_len == 0 {
            write!(out, "{}", word)?;
            line_len = word.len();
            written += word.len();
        } else if line_len + word.len() < 80 {
            write!(out, " {}", word)?;
            line_len += word.len() + 1;
            written += word.len() + 1;
        } else {
            write!(out, "\n{}", word)?;
            line_len = word.len();
            written += word.len();
        }
    }
    out.flush()
}

/// Generates a text file of random lowercase words, wrapped at roughly 80
/// characters per line, until at least `chars_to_write` characters have
/// been emitted.
pub fn generate_text(path: &Path, chars_to_write: usize) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
    let mut out = BufWriter::new(file);
    let mut rng = thread_rng();
    write_text(&mut out, &mut rng, chars_to_write).map_err(|e| HarnessError::io(path, e))
}

fn write_matrix(out: &mut impl Write, rng: &mut impl Rng, n: usize) -> io::Result<()> {
    let dist = Uniform::from(-1.0f64..1.0);
    for _ in 0..n {
        let mut first = true;
        for _ in 0..n {
            if !first {
                write!(out, ";")?;
            }
            first = false;
            write!(out, "{:.18e}", dist.sample(rng))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Generates an `n` x `n` matrix of uniform values in [-1, 1), one
/// `;`-separated row per line.
pub fn generate_matrix(path: &Path, n: usize) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
    let mut out = BufWriter::new(file);
    let mut rng = thread_rng();
    write_matrix(&mut out, &mut rng, n).map_err(|e| HarnessError::io(path, e))
}
