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

//! Problem-size tiers.
//!
//! Every benchmark is run at three predefined sizes. The tiers are always
//! iterated in ascending order.

use crate::error::HarnessError;
use std::fmt;
use std::str::FromStr;

/// One of the three predefined problem-size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Size {
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
}

impl Size {
    /// All tiers, in ascending order.
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    /// Returns the tier as its single-letter string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }

    /// Index into per-size parameter tables (S = 0, M = 1, L = 2).
    pub fn index(&self) -> usize {
        match self {
            Size::S => 0,
            Size::M => 1,
            Size::L => 2,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            other => Err(HarnessError::UnknownSize(other.to_string())),
        }
    }
}
