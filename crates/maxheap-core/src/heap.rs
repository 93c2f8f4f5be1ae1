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

//! Array-backed binary max-heap with a fixed capacity.
//!
//! Layout (0-indexed):
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//!
//! heap order: buffer[parent(i)] >= buffer[i] for all i in [1, size)
//! ```
//!
//! Every buffer read or write, key comparison and swap is reported to the
//! heap's [`OpCounter`]. The cost model:
//!
//! | step                     | comparisons | array accesses | swaps |
//! |--------------------------|-------------|----------------|-------|
//! | parent/child comparison  | 1           | 2              | 0     |
//! | swap                     | 0           | 3              | 1     |
//! | single read or write     | 0           | 1              | 0     |

use crate::counters::{NullCounter, OpCounter};
use crate::error::{HeapError, HeapResult};

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Fixed-capacity binary max-heap over `i32`.
///
/// # Examples
///
/// ```
/// use maxheap_core::MaxHeap;
///
/// let mut heap = MaxHeap::new(10)?;
/// heap.insert(1)?;
/// heap.insert(3)?;
/// heap.insert(2)?;
/// assert_eq!(heap.peek_max()?, 3);
///
/// heap.increase_key(1, 4)?;
/// assert_eq!(heap.extract_max()?, 4);
/// assert_eq!(heap.peek_max()?, 3);
/// # Ok::<(), maxheap_core::HeapError>(())
/// ```
#[derive(Debug)]
pub struct MaxHeap<C: OpCounter = NullCounter> {
    buffer: Box<[i32]>,
    size: usize,
    counter: C,
}

impl MaxHeap<NullCounter> {
    /// Creates an uninstrumented heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> HeapResult<Self> {
        Self::with_counter(capacity, NullCounter)
    }
}

impl<C: OpCounter> MaxHeap<C> {
    /// Creates a heap that reports its operations to `counter`.
    ///
    /// Records exactly one allocation on success.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_counter(capacity: usize, counter: C) -> HeapResult<Self> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let buffer = vec![0; capacity].into_boxed_slice();
        counter.allocation();
        Ok(Self {
            buffer,
            size: 0,
            counter,
        })
    }

    /// Number of elements in the heap.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maximum number of elements the heap can hold.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Consumes the heap and hands back its counter.
    pub fn into_counter(self) -> C {
        self.counter
    }

    /// The valid region of the buffer in heap order.
    ///
    /// Not instrumented.
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer[..self.size]
    }

    /// Checks the heap-order invariant without touching the counter.
    pub fn is_valid_heap(&self) -> bool {
        let items = self.as_slice();
        (1..items.len()).all(|i| items[parent(i)] >= items[i])
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_max(&self) -> HeapResult<i32> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.read(0))
    }

    /// Adds `value` to the heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Full`] if the heap is at capacity.
    pub fn insert(&mut self, value: i32) -> HeapResult<()> {
        if self.size == self.capacity() {
            return Err(HeapError::Full {
                capacity: self.capacity(),
            });
        }
        self.write(self.size, value);
        self.sift_up(self.size);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn extract_max(&mut self) -> HeapResult<i32> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        let max = self.read(0);
        self.size -= 1;
        if self.size > 0 {
            let last = self.read(self.size);
            self.write(0, last);
            self.sift_down(0);
        }
        Ok(max)
    }

    /// Raises the key at `index` to `new_value` and restores heap order.
    ///
    /// An equal value is accepted and leaves the heap as it was.
    ///
    /// # Errors
    ///
    /// - [`HeapError::IndexOutOfRange`] if `index >= size`
    /// - [`HeapError::KeyDecrease`] if `new_value` is smaller than the current key;
    ///   the heap is not modified
    pub fn increase_key(&mut self, index: usize, new_value: i32) -> HeapResult<()> {
        if index >= self.size {
            return Err(HeapError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        let current = self.read(index);
        self.counter.comparison();
        if new_value < current {
            return Err(HeapError::KeyDecrease {
                index,
                current,
                new: new_value,
            });
        }
        self.write(index, new_value);
        self.sift_up(index);
        Ok(())
    }

    /// Replaces the heap contents with `values` and heapifies bottom-up.
    ///
    /// Runs in O(n): sift-down is applied to every internal node from the
    /// last one up to the root.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InputTooLarge`] if `values` does not fit; the heap
    /// is not modified.
    pub fn build_heap(&mut self, values: &[i32]) -> HeapResult<()> {
        if values.len() > self.capacity() {
            return Err(HeapError::InputTooLarge {
                len: values.len(),
                capacity: self.capacity(),
            });
        }
        for (i, &value) in values.iter().enumerate() {
            self.write(i, value);
        }
        self.size = values.len();
        for i in (0..self.size / 2).rev() {
            self.sift_down(i);
        }
        Ok(())
    }

    #[inline]
    fn read(&self, i: usize) -> i32 {
        self.counter.array_access();
        self.buffer[i]
    }

    #[inline]
    fn write(&mut self, i: usize, value: i32) {
        self.counter.array_access();
        self.buffer[i] = value;
    }

    /// Compares `buffer[a] > buffer[b]`, counting the comparison and both reads.
    #[inline]
    fn greater(&self, a: usize, b: usize) -> bool {
        let lhs = self.read(a);
        let rhs = self.read(b);
        self.counter.comparison();
        lhs > rhs
    }

    fn swap(&mut self, i: usize, j: usize) {
        let temp = self.read(i);
        self.buffer[i] = self.buffer[j];
        self.counter.array_access();
        self.write(j, temp);
        self.counter.swap();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            // Equal keys stop the walk.
            if !self.greater(index, p) {
                break;
            }
            self.swap(index, p);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let l = left(index);
            let r = right(index);
            let mut largest = index;

            if l < self.size && self.greater(l, largest) {
                largest = l;
            }
            if r < self.size && self.greater(r, largest) {
                largest = r;
            }
            if largest == index {
                break;
            }
            self.swap(index, largest);
            index = largest;
        }
    }
}
