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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use maxheap_bench::{Algorithm, InputKind, Strategy};
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Benchmark a single heap run
    ///
    /// Generates an input of the requested size and shape, fills a heap of
    /// exactly that capacity, drains it, and reports time and operation
    /// counts.
    Run {
        /// Algorithm to benchmark (maxheap)
        #[arg(long, value_name = "ALGO")]
        algo: Algorithm,

        /// Number of elements (at least 1)
        #[arg(long, value_name = "N")]
        size: usize,

        /// Input shape (random, sorted, reversed, nearly-sorted)
        #[arg(long, value_name = "TYPE")]
        input: InputKind,

        /// Fill strategy before draining (build, insert)
        #[arg(long, default_value = "build")]
        strategy: Strategy,

        /// Seed for input generation
        #[arg(long)]
        seed: Option<u64>,

        /// Results CSV path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip writing the results CSV
        #[arg(long)]
        no_csv: bool,
    },

    /// Benchmark every combination of sizes and input types
    ///
    /// Appends one CSV row per run. Defaults to the standard sizes and all
    /// four input types.
    Sweep {
        /// Comma-separated sizes
        #[arg(long, value_delimiter = ',', value_name = "N,...")]
        sizes: Vec<usize>,

        /// Comma-separated input types
        #[arg(long, value_delimiter = ',', value_name = "TYPE,...")]
        inputs: Vec<InputKind>,

        /// Fill strategy before draining (build, insert)
        #[arg(long, default_value = "build")]
        strategy: Strategy,

        /// Seed for input generation
        #[arg(long)]
        seed: Option<u64>,

        /// Results CSV path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if arguments fail validation, a heap run fails, or the
    /// results file cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run {
                algo,
                size,
                input,
                strategy,
                seed,
                output,
                no_csv,
            } => commands::run(algo, size, input, strategy, seed, output.as_deref(), !no_csv),
            Commands::Sweep {
                sizes,
                inputs,
                strategy,
                seed,
                output,
            } => commands::sweep(&sizes, &inputs, strategy, seed, output.as_deref()),
        }
    }
}
