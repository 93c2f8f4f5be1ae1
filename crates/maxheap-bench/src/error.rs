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

//! Error types for benchmark operations.

use maxheap_core::HeapError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum input size for a single run (10 million elements).
///
/// Larger requests are rejected before any memory is allocated.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while generating inputs, running heaps or writing
/// reports.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A heap operation failed.
    #[error(transparent)]
    Heap(#[from] HeapError),

    /// File system operation failed.
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV serialization failed.
    #[error("CSV error for '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig { parameter: String, reason: String },

    #[error("Invalid input type: {0}")]
    InvalidInputKind(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Dataset size exceeds [`MAX_DATASET_SIZE`].
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge { requested: usize, max: usize },

    /// A drained heap produced a larger value after a smaller one.
    #[error("heap drained out of order: {previous} followed by {next}")]
    OrderViolation { previous: i32, next: i32 },
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Validate that a dataset size is within acceptable limits
///
/// # Examples
///
/// ```
/// use maxheap_bench::error::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize) -> Result<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}
