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

//! Centralized benchmark configuration.
//!
//! Provides the sizes, input kinds, fill strategy, seed and output path a
//! [`BenchmarkRunner`](crate::runner::BenchmarkRunner) works from.

use crate::error::{validate_dataset_size, BenchError, Result};
use crate::generators::InputKind;
use crate::runner::Strategy;
use std::path::PathBuf;

/// Standard input sizes for a sweep.
pub const STANDARD_SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

/// Default location of the results file, relative to the working directory.
pub const DEFAULT_RESULTS_PATH: &str = "docs/performance-plots/results.csv";

/// Environment variable overriding [`DEFAULT_RESULTS_PATH`].
pub const RESULTS_PATH_ENV: &str = "MAXHEAP_RESULTS_CSV";

/// Returns the results path from [`RESULTS_PATH_ENV`], or the default.
pub fn default_results_path() -> PathBuf {
    std::env::var_os(RESULTS_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH))
}

/// Benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use maxheap_bench::config::BenchConfig;
/// use maxheap_bench::generators::InputKind;
/// use maxheap_bench::runner::Strategy;
///
/// let config = BenchConfig::default()
///     .with_sizes(&[1_000, 10_000])
///     .with_inputs(&[InputKind::Random])
///     .with_strategy(Strategy::Insert)
///     .with_seed(42);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Input sizes to run.
    pub sizes: Vec<usize>,
    /// Input shapes to run at every size.
    pub inputs: Vec<InputKind>,
    /// How the heap is filled before draining.
    pub strategy: Strategy,
    /// Seed for input generation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// CSV file rows are appended to.
    pub output: PathBuf,
}

impl BenchConfig {
    /// Creates a configuration for the given sizes with every other setting
    /// at its default.
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            inputs: InputKind::ALL.to_vec(),
            strategy: Strategy::default(),
            seed: None,
            output: default_results_path(),
        }
    }

    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn with_inputs(mut self, inputs: &[InputKind]) -> Self {
        self.inputs = inputs.to_vec();
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Number of runs a sweep over this configuration performs.
    pub fn run_count(&self) -> usize {
        self.sizes.len() * self.inputs.len()
    }

    /// Checks that every size is in `[1, MAX_DATASET_SIZE]` and that there is
    /// something to run.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::invalid_config("sizes", "must not be empty"));
        }
        if self.inputs.is_empty() {
            return Err(BenchError::invalid_config("inputs", "must not be empty"));
        }
        for &size in &self.sizes {
            if size == 0 {
                return Err(BenchError::invalid_config("sizes", "Size must be at least 1"));
            }
            validate_dataset_size(size)?;
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(STANDARD_SIZES)
    }
}
