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

//! Error types for heap operations.

use std::fmt;
use thiserror::Error;

/// The category a [`HeapError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapErrorKind {
    /// Heap constructed with a non-positive capacity.
    InvalidConstruction,
    /// Peek or extract on an empty heap.
    EmptyState,
    /// Insert into a heap that is at capacity.
    FullState,
    /// Index outside the valid region.
    OutOfRange,
    /// Argument rejected by a precondition.
    InvalidArgument,
}

impl fmt::Display for HeapErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstruction => write!(f, "InvalidConstruction"),
            Self::EmptyState => write!(f, "EmptyState"),
            Self::FullState => write!(f, "FullState"),
            Self::OutOfRange => write!(f, "OutOfRange"),
            Self::InvalidArgument => write!(f, "InvalidArgument"),
        }
    }
}

/// An error returned by a [`MaxHeap`](crate::MaxHeap) operation.
///
/// Every variant is a precondition violation. The heap is never modified
/// when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Capacity must be positive.
    #[error("capacity must be positive")]
    InvalidCapacity,

    /// The heap holds no elements.
    #[error("heap is empty")]
    Empty,

    /// The heap is at capacity.
    #[error("heap is full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the heap.
        capacity: usize,
    },

    /// Index is not in `[0, size)`.
    #[error("index {index} out of range for heap of size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of valid elements.
        size: usize,
    },

    /// `increase_key` was given a value smaller than the current key.
    #[error("new value {new} is smaller than current value {current} at index {index}")]
    KeyDecrease {
        /// Index of the key.
        index: usize,
        /// Value stored at `index`.
        current: i32,
        /// Rejected replacement value.
        new: i32,
    },

    /// `build_heap` input does not fit.
    #[error("input of length {len} is larger than capacity {capacity}")]
    InputTooLarge {
        /// Input length.
        len: usize,
        /// Fixed capacity of the heap.
        capacity: usize,
    },
}

impl HeapError {
    /// Returns the category of this error.
    pub fn kind(&self) -> HeapErrorKind {
        match self {
            Self::InvalidCapacity => HeapErrorKind::InvalidConstruction,
            Self::Empty => HeapErrorKind::EmptyState,
            Self::Full { .. } => HeapErrorKind::FullState,
            Self::IndexOutOfRange { .. } => HeapErrorKind::OutOfRange,
            Self::KeyDecrease { .. } | Self::InputTooLarge { .. } => {
                HeapErrorKind::InvalidArgument
            }
        }
    }
}

/// Result type for heap operations.
pub type HeapResult<T> = Result<T, HeapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(HeapError::InvalidCapacity.kind(), HeapErrorKind::InvalidConstruction);
        assert_eq!(HeapError::Empty.kind(), HeapErrorKind::EmptyState);
        assert_eq!(HeapError::Full { capacity: 2 }.kind(), HeapErrorKind::FullState);
        assert_eq!(
            HeapError::IndexOutOfRange { index: 3, size: 1 }.kind(),
            HeapErrorKind::OutOfRange
        );
        assert_eq!(
            HeapError::KeyDecrease { index: 0, current: 10, new: 5 }.kind(),
            HeapErrorKind::InvalidArgument
        );
        assert_eq!(
            HeapError::InputTooLarge { len: 6, capacity: 5 }.kind(),
            HeapErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::Full { capacity: 2 }.to_string(),
            "heap is full (capacity 2)"
        );
        let msg = HeapError::KeyDecrease { index: 1, current: 10, new: 5 }.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("index 1"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", HeapErrorKind::OutOfRange), "OutOfRange");
        assert_eq!(format!("{}", HeapErrorKind::InvalidArgument), "InvalidArgument");
    }
}
