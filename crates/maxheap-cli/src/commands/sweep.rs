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

//! Sweep command - every size against every input type

use super::configure;
use crate::error::CliError;
use maxheap_bench::{print_record, BenchConfig, BenchmarkRunner, CsvReporter, InputKind, Strategy};
use std::path::Path;
use tracing::info;

/// Benchmark the cartesian product of `sizes` and `inputs`.
///
/// Empty `sizes` or `inputs` fall back to the standard sizes and all input
/// types. Rows are appended only after every run succeeded.
///
/// # Errors
///
/// Returns `Err` if a size is zero or too large, a heap run fails, or the
/// results file cannot be written.
pub fn sweep(
    sizes: &[usize],
    inputs: &[InputKind],
    strategy: Strategy,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let mut config = BenchConfig::default().with_strategy(strategy);
    if !sizes.is_empty() {
        config = config.with_sizes(sizes);
    }
    if !inputs.is_empty() {
        config = config.with_inputs(inputs);
    }
    let config = configure(config, seed, output);
    config.validate()?;

    let reporter = CsvReporter::new(&config.output);
    let records = BenchmarkRunner::new(config).run_all()?;
    for record in &records {
        print_record(record);
        println!();
    }

    reporter.append(&records)?;
    info!(
        rows = records.len(),
        path = %reporter.path().display(),
        "appended sweep results"
    );
    Ok(())
}
