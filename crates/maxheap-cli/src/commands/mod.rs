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

//! CLI command implementations

mod run;
mod sweep;

pub use run::run;
pub use sweep::sweep;

use maxheap_bench::BenchConfig;
use std::path::Path;

/// Applies the seed and output path shared by every command.
///
/// Without `output` the config keeps its default, which honours
/// `MAXHEAP_RESULTS_CSV`.
fn configure(config: BenchConfig, seed: Option<u64>, output: Option<&Path>) -> BenchConfig {
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    match output {
        Some(path) => config.with_output(path),
        None => config,
    }
}
