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

//! MaxHeap CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **run**: one timed build/drain run, printed to the console and appended
//!   to the results CSV
//! - **sweep**: every combination of sizes and input types, one CSV row each
//!
//! # Examples
//!
//! ```no_run
//! use maxheap_bench::{Algorithm, InputKind, Strategy};
//! use maxheap_cli::commands::run;
//!
//! # fn main() -> Result<(), maxheap_cli::error::CliError> {
//! run(Algorithm::MaxHeap, 1_000, InputKind::Random, Strategy::Build, Some(42), None, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Results go to `docs/performance-plots/results.csv` unless
//! `MAXHEAP_RESULTS_CSV` or `--output` says otherwise. Log verbosity follows
//! `RUST_LOG`.

pub mod cli;
pub mod commands;
pub mod error;
