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

//! Structured error types for the MaxHeap CLI.

use maxheap_bench::BenchError;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input generation, a heap run or report writing failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Invalid input provided by the user.
    #[error("{0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an invalid input error.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxheap_cli::error::CliError;
    ///
    /// let err = CliError::invalid_input("Size must be at least 1");
    /// assert_eq!(err.to_string(), "Size must be at least 1");
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_error_passes_through() {
        let err: CliError = BenchError::InvalidInputKind("zigzag".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input type: zigzag");
    }

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(
            CliError::invalid_input("Size must be at least 1").to_string(),
            "Size must be at least 1"
        );
    }
}
