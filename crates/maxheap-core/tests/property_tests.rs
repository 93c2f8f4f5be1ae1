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

//! Property-based tests for heap ordering and boundary behaviour.

use maxheap_core::{HeapError, MaxHeap, OpCounter};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Extract,
    Increase { slot: usize, delta: u16 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Insert),
        2 => Just(Op::Extract),
        1 => (any::<usize>(), any::<u16>()).prop_map(|(slot, delta)| Op::Increase { slot, delta }),
    ]
}

fn drain<C: OpCounter>(heap: &mut MaxHeap<C>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.size());
    while let Ok(value) = heap.extract_max() {
        out.push(value);
    }
    out
}

fn sorted_desc(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: heap order holds after every operation in an arbitrary sequence.
    #[test]
    fn prop_heap_order_survives_any_sequence(ops in prop::collection::vec(op(), 0..200)) {
        let mut heap = MaxHeap::new(64).unwrap();
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let full = heap.size() == heap.capacity();
                    let result = heap.insert(v);
                    prop_assert_eq!(result.is_err(), full);
                }
                Op::Extract => {
                    let was_empty = heap.is_empty();
                    prop_assert_eq!(heap.extract_max().is_err(), was_empty);
                }
                Op::Increase { slot, delta } => {
                    if heap.is_empty() {
                        continue;
                    }
                    let index = slot % heap.size();
                    let current = heap.as_slice()[index];
                    let new_value = current.saturating_add(i32::from(delta));
                    let before = heap.peek_max().unwrap();
                    heap.increase_key(index, new_value).unwrap();
                    prop_assert!(heap.peek_max().unwrap() >= before);
                }
            }
            prop_assert!(heap.is_valid_heap());
        }
    }

    /// Property: draining yields the multiset in non-increasing order.
    #[test]
    fn prop_extraction_is_sorted_descending(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = MaxHeap::new(values.len().max(1)).unwrap();
        for &v in &values {
            heap.insert(v).unwrap();
        }
        prop_assert_eq!(drain(&mut heap), sorted_desc(&values));
    }

    /// Property: insert-then-drain and build-then-drain agree.
    #[test]
    fn prop_insert_and_build_agree(values in prop::collection::vec(-50i32..50, 1..300)) {
        let mut inserted = MaxHeap::new(values.len()).unwrap();
        for &v in &values {
            inserted.insert(v).unwrap();
        }
        let mut built = MaxHeap::new(values.len()).unwrap();
        built.build_heap(&values).unwrap();
        prop_assert!(built.is_valid_heap());

        prop_assert_eq!(drain(&mut inserted), drain(&mut built));
    }

    /// Property: a smaller key is rejected and the heap is left unmodified.
    #[test]
    fn prop_increase_key_rejects_decrease(
        values in prop::collection::vec(-1000i32..1000, 1..100),
        slot in any::<usize>(),
        drop_by in 1i32..100,
    ) {
        let mut heap = MaxHeap::new(values.len()).unwrap();
        heap.build_heap(&values).unwrap();
        let before = heap.as_slice().to_vec();
        let index = slot % heap.size();
        let current = before[index];

        let result = heap.increase_key(index, current - drop_by);
        prop_assert_eq!(
            result,
            Err(HeapError::KeyDecrease { index, current, new: current - drop_by })
        );
        prop_assert_eq!(heap.as_slice(), before.as_slice());
    }

    /// Property: build rejects oversized input and keeps prior contents.
    #[test]
    fn prop_build_rejects_oversized(
        existing in prop::collection::vec(any::<i32>(), 1..20),
        extra in 1usize..10,
    ) {
        let capacity = existing.len();
        let mut heap = MaxHeap::new(capacity).unwrap();
        heap.build_heap(&existing).unwrap();
        let before = heap.as_slice().to_vec();

        let oversized = vec![0; capacity + extra];
        let err = heap.build_heap(&oversized).unwrap_err();
        prop_assert_eq!(err, HeapError::InputTooLarge { len: capacity + extra, capacity });
        prop_assert_eq!(heap.as_slice(), before.as_slice());
    }
}
