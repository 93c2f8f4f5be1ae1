// Dweve MaxHeap - Instrumented Binary Max-Heap
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

//! Input generators for heap benchmarks.
//!
//! Each [`InputKind`] describes the initial ordering of the values handed to
//! the heap. Generation is driven by a caller-supplied [`Rng`] so runs can be
//! reproduced from a seed.

use crate::error::{validate_dataset_size, BenchError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Fraction of positions disturbed in a nearly-sorted input.
pub const NEARLY_SORTED_SWAP_RATIO: f64 = 0.05;

/// Shape of a generated input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Uniformly random values over the full `i32` range.
    Random,
    /// `0, 1, ..., n-1`.
    Sorted,
    /// `n-1, ..., 1, 0`.
    Reversed,
    /// Sorted, then `floor(n * 0.05)` random position swaps.
    NearlySorted,
}

impl InputKind {
    /// Every input kind, in reporting order.
    pub const ALL: [InputKind; 4] = [
        InputKind::Random,
        InputKind::Sorted,
        InputKind::Reversed,
        InputKind::NearlySorted,
    ];

    /// Name used on the command line and in the CSV `input_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Random => "random",
            InputKind::Sorted => "sorted",
            InputKind::Reversed => "reversed",
            InputKind::NearlySorted => "nearly-sorted",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BenchError::InvalidInputKind(s.to_string()))
    }
}

/// Generates `n` values shaped by `kind`.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`] if `n` exceeds
/// [`MAX_DATASET_SIZE`](crate::error::MAX_DATASET_SIZE).
///
/// # Examples
///
/// ```
/// use maxheap_bench::generators::{generate_input, InputKind};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let values = generate_input(InputKind::Reversed, 4, &mut rng)?;
/// assert_eq!(values, vec![3, 2, 1, 0]);
/// # Ok::<(), maxheap_bench::BenchError>(())
/// ```
pub fn generate_input<R: Rng + ?Sized>(kind: InputKind, n: usize, rng: &mut R) -> Result<Vec<i32>> {
    validate_dataset_size(n)?;
    let values = match kind {
        InputKind::Random => (0..n).map(|_| rng.gen::<i32>()).collect(),
        InputKind::Sorted => ascending(n),
        InputKind::Reversed => ascending(n).into_iter().rev().collect(),
        InputKind::NearlySorted => {
            let mut values = ascending(n);
            let swaps = (n as f64 * NEARLY_SORTED_SWAP_RATIO) as usize;
            for _ in 0..swaps {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                values.swap(a, b);
            }
            values
        }
    };
    Ok(values)
}

// n is bounded by MAX_DATASET_SIZE, which fits in i32.
fn ascending(n: usize) -> Vec<i32> {
    (0..n).map(|i| i as i32).collect()
}
