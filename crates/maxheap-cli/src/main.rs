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

//! MaxHeap Command Line Interface

use clap::{ArgAction, Parser};
use maxheap_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// MaxHeap - instrumented binary max-heap benchmarks
///
/// Times heap construction and full drains over generated inputs and records
/// comparisons and swaps alongside wall-clock time.
///
/// # Examples
///
/// ```bash
/// # One run over 10,000 random values
/// maxheap run --algo maxheap --size 10000 --input random
///
/// # Sequential inserts instead of bottom-up construction
/// maxheap run --algo maxheap --size 10000 --input sorted --strategy insert
///
/// # Every input type at three sizes, reproducibly
/// maxheap sweep --sizes 1000,10000,100000 --seed 42
/// ```
#[derive(Parser)]
#[command(name = "maxheap")]
#[command(author, version, about = "MaxHeap - instrumented binary max-heap benchmarks", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "maxheap_cli={level},maxheap_bench={level}",
            level = default_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
