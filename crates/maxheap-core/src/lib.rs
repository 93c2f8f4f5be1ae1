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

//! Fixed-capacity binary max-heap over `i32`, instrumented with operation
//! counters.
//!
//! # Overview
//!
//! - [`MaxHeap`]: array-backed heap with `insert`, `extract_max`, `peek_max`,
//!   `increase_key` and linear-time `build_heap`
//! - [`OpCounter`]: sink the heap reports comparisons, swaps, array accesses
//!   and allocations to
//! - [`Counters`]: recording sink with `reset` and `snapshot`
//! - [`HeapError`]: one variant per precondition violation
//!
//! # Example
//!
//! ```
//! use maxheap_core::{Counters, MaxHeap};
//!
//! let counters = Counters::new();
//! let mut heap = MaxHeap::with_counter(20, &counters)?;
//! heap.build_heap(&[4, 1, 3, 2, 16, 9, 10, 14, 8, 7])?;
//! assert_eq!(heap.peek_max()?, 16);
//! assert_eq!(counters.swaps(), 7);
//! # Ok::<(), maxheap_core::HeapError>(())
//! ```
//!
//! The core performs no logging; errors are returned to the caller as-is.

mod counters;
mod error;
mod heap;

pub use counters::{CounterSnapshot, Counters, NullCounter, OpCounter};
pub use error::{HeapError, HeapErrorKind, HeapResult};
pub use heap::MaxHeap;
