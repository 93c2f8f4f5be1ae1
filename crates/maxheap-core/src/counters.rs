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

//! Operation counters for heap instrumentation.
//!
//! A heap reports every primitive step it takes to an [`OpCounter`] sink:
//! element comparisons, swaps, buffer reads/writes, and buffer allocations.
//! [`Counters`] records them; [`NullCounter`] discards them.
//!
//! Counters are plain [`Cell`]s and therefore `!Sync`. A measurement window
//! is bracketed by [`Counters::reset`] and [`Counters::snapshot`]:
//!
//! ```
//! use maxheap_core::{Counters, MaxHeap};
//!
//! let counters = Counters::new();
//! let mut heap = MaxHeap::with_counter(8, &counters)?;
//! heap.build_heap(&[3, 1, 4, 1, 5])?;
//! while !heap.is_empty() {
//!     heap.extract_max()?;
//! }
//!
//! let totals = counters.snapshot();
//! assert_eq!(totals.memory_allocations, 1);
//! assert!(totals.comparisons > 0);
//! # Ok::<(), maxheap_core::HeapError>(())
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Sink for primitive heap operations.
pub trait OpCounter {
    /// One key comparison.
    fn comparison(&self);
    /// One element swap.
    fn swap(&self);
    /// One buffer read or write.
    fn array_access(&self);
    /// One buffer allocation.
    fn allocation(&self);
}

/// Counter sink that records nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullCounter;

impl OpCounter for NullCounter {
    #[inline]
    fn comparison(&self) {}
    #[inline]
    fn swap(&self) {}
    #[inline]
    fn array_access(&self) {}
    #[inline]
    fn allocation(&self) {}
}

/// Totals captured from [`Counters`] at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub array_accesses: u64,
    pub memory_allocations: u64,
}

/// Four independent, monotonically increasing operation counters.
#[derive(Debug, Default)]
pub struct Counters {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    array_accesses: Cell<u64>,
    memory_allocations: Cell<u64>,
}

#[inline]
fn bump(cell: &Cell<u64>) {
    cell.set(cell.get() + 1);
}

impl Counters {
    /// Creates a counter set with every total at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn swaps(&self) -> u64 {
        self.swaps.get()
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses.get()
    }

    pub fn memory_allocations(&self) -> u64 {
        self.memory_allocations.get()
    }

    /// Zeroes all four counters.
    pub fn reset(&self) {
        self.comparisons.set(0);
        self.swaps.set(0);
        self.array_accesses.set(0);
        self.memory_allocations.set(0);
    }

    /// Captures the current totals.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons(),
            swaps: self.swaps(),
            array_accesses: self.array_accesses(),
            memory_allocations: self.memory_allocations(),
        }
    }
}

impl OpCounter for Counters {
    #[inline]
    fn comparison(&self) {
        bump(&self.comparisons);
    }

    #[inline]
    fn swap(&self) {
        bump(&self.swaps);
    }

    #[inline]
    fn array_access(&self) {
        bump(&self.array_accesses);
    }

    #[inline]
    fn allocation(&self) {
        bump(&self.memory_allocations);
    }
}

impl<C: OpCounter + ?Sized> OpCounter for &C {
    #[inline]
    fn comparison(&self) {
        (**self).comparison();
    }
    #[inline]
    fn swap(&self) {
        (**self).swap();
    }
    #[inline]
    fn array_access(&self) {
        (**self).array_access();
    }
    #[inline]
    fn allocation(&self) {
        (**self).allocation();
    }
}

impl<C: OpCounter + ?Sized> OpCounter for Rc<C> {
    #[inline]
    fn comparison(&self) {
        (**self).comparison();
    }
    #[inline]
    fn swap(&self) {
        (**self).swap();
    }
    #[inline]
    fn array_access(&self) {
        (**self).array_access();
    }
    #[inline]
    fn allocation(&self) {
        (**self).allocation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = Counters::new();
        assert_eq!(counters.snapshot(), CounterSnapshot::default());
    }

    #[test]
    fn test_counters_are_independent() {
        let counters = Counters::new();
        counters.comparison();
        counters.comparison();
        counters.swap();
        counters.array_access();
        counters.array_access();
        counters.array_access();
        counters.allocation();

        assert_eq!(counters.comparisons(), 2);
        assert_eq!(counters.swaps(), 1);
        assert_eq!(counters.array_accesses(), 3);
        assert_eq!(counters.memory_allocations(), 1);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let counters = Counters::new();
        counters.comparison();
        counters.swap();
        counters.array_access();
        counters.allocation();
        counters.reset();
        assert_eq!(counters.snapshot(), CounterSnapshot::default());
    }

    #[test]
    fn test_shared_handles_forward() {
        let counters = Rc::new(Counters::new());
        let handle = Rc::clone(&counters);
        handle.swap();
        (&*counters).swap();
        assert_eq!(counters.swaps(), 2);
    }

    #[test]
    fn test_null_counter_is_noop() {
        let counter = NullCounter;
        counter.comparison();
        counter.allocation();
        assert_eq!(counter, NullCounter);
    }
}
