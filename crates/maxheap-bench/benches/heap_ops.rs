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

//! Criterion benchmarks comparing bottom-up construction against sequential
//! insertion, each followed by a full drain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use maxheap_bench::{generate_input, InputKind};
use maxheap_core::MaxHeap;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn input(kind: InputKind, n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(12345);
    generate_input(kind, n, &mut rng).expect("benchmark input within limits")
}

fn drain(heap: &mut MaxHeap) {
    while let Ok(value) = heap.extract_max() {
        black_box(value);
    }
}

fn bench_build_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_then_drain");
    for kind in InputKind::ALL {
        for &n in SIZES {
            let values = input(kind, n);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(kind.as_str(), n), &values, |b, values| {
                b.iter(|| {
                    let mut heap = MaxHeap::new(values.len()).unwrap();
                    heap.build_heap(black_box(values)).unwrap();
                    drain(&mut heap);
                })
            });
        }
    }
    group.finish();
}

fn bench_insert_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_drain");
    for kind in InputKind::ALL {
        for &n in SIZES {
            let values = input(kind, n);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(kind.as_str(), n), &values, |b, values| {
                b.iter(|| {
                    let mut heap = MaxHeap::new(values.len()).unwrap();
                    for &v in values.iter() {
                        heap.insert(black_box(v)).unwrap();
                    }
                    drain(&mut heap);
                })
            });
        }
    }
    group.finish();
}

fn bench_increase_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("increase_key");
    for &n in SIZES {
        let values = input(InputKind::Random, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut heap = MaxHeap::new(values.len()).unwrap();
                heap.build_heap(values).unwrap();
                let last = heap.size() - 1;
                heap.increase_key(last, i32::MAX).unwrap();
                black_box(heap.peek_max().unwrap());
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_then_drain,
    bench_insert_then_drain,
    bench_increase_key
);
criterion_main!(benches);
