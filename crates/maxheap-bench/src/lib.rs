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

//! MaxHeap Benchmark Framework
//!
//! Timed build/drain runs over generated inputs, with operation counts taken
//! from the heap's instrumentation and appended to a CSV results file.
//!
//! ## Features
//!
//! - **Input generators**: random, sorted, reversed and nearly-sorted arrays
//! - **Runner**: resets counters, times construct + fill + drain, snapshots totals
//! - **Reporters**: append-only CSV file and console summary
//!
//! ## Usage
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package maxheap-bench
//! ```
//!
//! Programmatic sweep:
//! ```no_run
//! use maxheap_bench::{BenchConfig, BenchmarkRunner, CsvReporter};
//!
//! let config = BenchConfig::default().with_sizes(&[1_000, 10_000]).with_seed(7);
//! let reporter = CsvReporter::new(&config.output);
//! let records = BenchmarkRunner::new(config).run_all()?;
//! reporter.append(&records)?;
//! # Ok::<(), maxheap_bench::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod reporters;
pub mod runner;

pub use config::{BenchConfig, DEFAULT_RESULTS_PATH, RESULTS_PATH_ENV, STANDARD_SIZES};
pub use error::{validate_dataset_size, BenchError, Result, MAX_DATASET_SIZE};
pub use generators::{generate_input, InputKind};
pub use reporters::{format_record, print_record, CsvReporter, CSV_HEADER};
pub use runner::{Algorithm, BenchmarkRunner, RunRecord, Strategy};
