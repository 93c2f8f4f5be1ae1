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

//! Run command - one timed heap build/drain

use super::configure;
use crate::error::CliError;
use maxheap_bench::{
    print_record, Algorithm, BenchConfig, BenchmarkRunner, CsvReporter, InputKind, Strategy,
};
use std::path::Path;
use tracing::info;

/// Benchmark one heap run and report it.
///
/// Prints the console summary and, when `write_csv` is set, appends one row
/// to the results file.
///
/// # Errors
///
/// Returns `Err` if:
/// - `size` is zero
/// - the heap run fails
/// - the results file cannot be written
pub fn run(
    algorithm: Algorithm,
    size: usize,
    input: InputKind,
    strategy: Strategy,
    seed: Option<u64>,
    output: Option<&Path>,
    write_csv: bool,
) -> Result<(), CliError> {
    if size < 1 {
        return Err(CliError::invalid_input("Size must be at least 1"));
    }
    info!(algorithm = %algorithm, size, input = %input, "running benchmark");

    let config = configure(
        BenchConfig::new(&[size])
            .with_inputs(&[input])
            .with_strategy(strategy),
        seed,
        output,
    );
    let reporter = CsvReporter::new(&config.output);
    let mut runner = BenchmarkRunner::new(config);

    let record = runner.run(input, size)?;
    print_record(&record);

    if write_csv {
        reporter.append(std::slice::from_ref(&record))?;
        info!(path = %reporter.path().display(), "appended result");
    }
    Ok(())
}
