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

//! Structured error types for the harness engine.
//!
//! All fallible operations return `Result<T, HarnessError>`. Soft failures
//! (a malformed stdout capture, a missing `benchmark.yml`) are downgraded
//! to warnings at the call site and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// The main error type for harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// I/O operation failed (file read, write, or directory traversal).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// A build script exited with a non-zero status.
    ///
    /// Build failures are fatal by default; with `keep_going` the failing
    /// entry is dropped from the run phase instead.
    #[error("Build failed for {entry} (exit code {code:?})")]
    BuildFailed {
        /// Entry label (language / benchmark / implementation)
        entry: String,
        /// Exit code, if the process terminated normally
        code: Option<i32>,
    },

    /// A benchmark or run script could not be spawned at all.
    #[error("Failed to execute '{script}' in '{dir}': {message}")]
    Spawn {
        /// Script name (`build.sh` or `run.sh`)
        script: String,
        /// Working directory of the attempted execution
        dir: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// A size string was not one of S, M, L.
    #[error("Unknown size '{0}' (expected S, M, or L)")]
    UnknownSize(String),

    /// A benchmark name has no definition in the suite registry.
    #[error("Unknown benchmark '{0}'")]
    UnknownBenchmark(String),

    /// CSV serialization failed.
    #[error("CSV error for '{path}': {message}")]
    Csv {
        /// Output file path
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// A captured stdout file did not contain the expected stage timings.
    ///
    /// Reporting downgrades this to a warning and skips the file.
    #[error("Malformed run output '{path}': {reason}")]
    MalformedOutput {
        /// The captured stdout file
        path: PathBuf,
        /// Why it could not be parsed
        reason: String,
    },
}

impl HarnessError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a CSV error with path context.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = HarnessError::io(
            "results/stdout_run_S_0001",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("stdout_run_S_0001"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_build_failed_display() {
        let err = HarnessError::BuildFailed {
            entry: "Rust / Fibonacci / default".to_string(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("Rust / Fibonacci / default"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_unknown_size_display() {
        let err = HarnessError::UnknownSize("XL".to_string());
        assert_eq!(err.to_string(), "Unknown size 'XL' (expected S, M, or L)");
    }
}
