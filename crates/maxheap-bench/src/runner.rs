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

//! Benchmark runner for timed heap build/drain runs.
//!
//! A run generates an input, resets the shared [`Counters`], fills a fresh
//! heap of capacity `n`, drains it with `extract_max` until empty, and records
//! the elapsed time together with the counter totals.

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::generators::{generate_input, InputKind};
use maxheap_core::{Counters, MaxHeap};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

/// Algorithms the harness can benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    MaxHeap,
}

impl Algorithm {
    /// Name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::MaxHeap => "maxheap",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maxheap" => Ok(Algorithm::MaxHeap),
            other => Err(BenchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// How a heap is filled before it is drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One linear-time `build_heap` call.
    #[default]
    Build,
    /// `n` sequential `insert` calls.
    Insert,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Build => "build",
            Strategy::Insert => "insert",
        }
    }

    /// Value written to the CSV `algorithm` column.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Build => "MaxHeap",
            Strategy::Insert => "MaxHeapInsert",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "build" => Ok(Strategy::Build),
            "insert" => Ok(Strategy::Insert),
            other => Err(BenchError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Outcome of a single timed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Label for the CSV `algorithm` column.
    pub algorithm: String,
    pub input_type: InputKind,
    pub n: usize,
    /// Wall-clock time for construct + fill + drain.
    pub time_ns: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub array_accesses: u64,
    pub memory_allocations: u64,
}

/// Executes heap runs against a single set of counters.
///
/// # Example
///
/// ```no_run
/// use maxheap_bench::config::BenchConfig;
/// use maxheap_bench::generators::InputKind;
/// use maxheap_bench::runner::BenchmarkRunner;
///
/// let mut runner = BenchmarkRunner::new(BenchConfig::default().with_seed(1));
/// let record = runner.run(InputKind::Random, 1_000).unwrap();
/// assert_eq!(record.n, 1_000);
/// ```
pub struct BenchmarkRunner {
    config: BenchConfig,
    counters: Counters,
    rng: StdRng,
}

impl BenchmarkRunner {
    /// Creates a runner; the input generator is seeded from the config or
    /// from OS entropy.
    pub fn new(config: BenchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            counters: Counters::new(),
            rng,
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Counters as left by the most recent run.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Performs one run of the configured strategy over a generated input.
    ///
    /// # Errors
    ///
    /// - [`BenchError::InvalidConfig`] if `n` is zero
    /// - [`BenchError::DatasetTooLarge`] if `n` exceeds the dataset limit
    /// - [`BenchError::OrderViolation`] if the drain is not non-increasing
    pub fn run(&mut self, input: InputKind, n: usize) -> Result<RunRecord> {
        if n == 0 {
            return Err(BenchError::invalid_config("size", "Size must be at least 1"));
        }
        let values = generate_input(input, n, &mut self.rng)?;
        let strategy = self.config.strategy;
        debug!(input = %input, n, strategy = %strategy, "starting heap run");

        self.counters.reset();
        let start = Instant::now();
        fill_and_drain(&self.counters, strategy, &values)?;
        let elapsed = start.elapsed();

        let totals = self.counters.snapshot();
        let record = RunRecord {
            algorithm: strategy.label().to_string(),
            input_type: input,
            n,
            time_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            comparisons: totals.comparisons,
            swaps: totals.swaps,
            array_accesses: totals.array_accesses,
            memory_allocations: totals.memory_allocations,
        };
        debug!(
            time_ns = record.time_ns,
            comparisons = record.comparisons,
            swaps = record.swaps,
            "finished heap run"
        );
        Ok(record)
    }

    /// Runs every configured size against every configured input kind.
    pub fn run_all(&mut self) -> Result<Vec<RunRecord>> {
        self.config.validate()?;
        info!(
            runs = self.config.run_count(),
            strategy = %self.config.strategy,
            "starting sweep"
        );

        let sizes = self.config.sizes.clone();
        let inputs = self.config.inputs.clone();
        let mut records = Vec::with_capacity(sizes.len() * inputs.len());
        for &n in &sizes {
            for &input in &inputs {
                records.push(self.run(input, n)?);
            }
        }
        Ok(records)
    }
}

fn fill_and_drain(counters: &Counters, strategy: Strategy, values: &[i32]) -> Result<()> {
    let mut heap = MaxHeap::with_counter(values.len(), counters)?;
    match strategy {
        Strategy::Build => heap.build_heap(values)?,
        Strategy::Insert => {
            for &value in values {
                heap.insert(value)?;
            }
        }
    }

    let mut previous = heap.extract_max()?;
    while !heap.is_empty() {
        let next = heap.extract_max()?;
        if next > previous {
            return Err(BenchError::OrderViolation { previous, next });
        }
        previous = next;
    }
    Ok(())
}
