// AlgoBench - Search and Sort Algorithm Benchmarking
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

//! Sort catalog benchmarks.
//!
//! Runs every registered sort over each input distribution with criterion,
//! as a cross-check for the figures the measurement engine reports.

use algobench_core::algorithms::{AlgorithmKind, Outcome};
use algobench_core::{generate, Distribution, Registry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [usize; 2] = [100, 1_000];

fn bench_sorts(c: &mut Criterion) {
    let registry = Registry::standard();
    let mut rng = StdRng::seed_from_u64(42);

    for &distribution in Distribution::all() {
        let mut group = c.benchmark_group(format!("sort/{}", distribution.id()));

        for &size in &SIZES {
            let input = generate(size, distribution, &mut rng);
            group.throughput(Throughput::Elements(size as u64));

            for descriptor in registry.of_kind(AlgorithmKind::Sort) {
                group.bench_with_input(
                    BenchmarkId::new(descriptor.name(), size),
                    &input,
                    |b, input| {
                        b.iter(|| {
                            let outcome =
                                descriptor.invoke(black_box(input), 0, distribution, &mut rng);
                            if let Outcome::Sorted(output) = outcome {
                                black_box(output);
                            }
                        })
                    },
                );
            }
        }

        group.finish();
    }
}

fn bench_searches(c: &mut Criterion) {
    let registry = Registry::standard();
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("search");

    for &distribution in Distribution::all() {
        let input = generate(10_000, distribution, &mut rng);
        for descriptor in registry.of_kind(AlgorithmKind::Search) {
            group.bench_with_input(
                BenchmarkId::new(descriptor.name(), distribution.id()),
                &input,
                |b, input| {
                    b.iter(|| descriptor.invoke(black_box(input), 5_000, distribution, &mut rng))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_searches);
criterion_main!(benches);
