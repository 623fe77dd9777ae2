// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spindle_adaptors::adjacent::adjacent;
use spindle_adaptors::circular::circular;
use spindle_adaptors::concat::concat;
use spindle_adaptors::filter::filter;
use spindle_adaptors::transform::transform;
use spindle_adaptors::zip::zip;
use spindle_core::range::RangeFacade;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    (0..len).map(|_| rng.random_range(0..1_000)).collect()
}

fn bench_transform_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_filter");

    for len in SIZES {
        let data = random_values(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("spindle", len), &data, |b, data| {
            b.iter(|| {
                let odd_squares = filter(transform(data, |x| x * x), |x: &u64| x % 2 == 1);
                black_box(odd_squares.iter().sum::<u64>())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", len), &data, |b, data| {
            b.iter(|| black_box(data.iter().map(|x| x * x).filter(|x| x % 2 == 1).sum::<u64>()))
        });
    }
    group.finish();
}

fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");

    for len in SIZES {
        let lhs = random_values(len);
        let rhs = random_values(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("spindle", len),
            &(&lhs, &rhs),
            |b, (lhs, rhs)| {
                b.iter(|| black_box(zip((*lhs, *rhs)).iter().map(|(x, y)| x * y).sum::<u64>()))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std", len),
            &(&lhs, &rhs),
            |b, (lhs, rhs)| {
                b.iter(|| black_box(lhs.iter().zip(rhs.iter()).map(|(x, y)| x * y).sum::<u64>()))
            },
        );
    }
    group.finish();
}

fn bench_adjacent(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacent");

    for len in SIZES {
        let data = random_values(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("spindle", len), &data, |b, data| {
            b.iter(|| {
                let rises = adjacent::<2, _>(data).iter().filter(|w| w[0] < w[1]).count();
                black_box(rises)
            })
        });

        group.bench_with_input(BenchmarkId::new("std", len), &data, |b, data| {
            b.iter(|| black_box(data.windows(2).filter(|w| w[0] < w[1]).count()))
        });
    }
    group.finish();
}

fn bench_concat_circular(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat_circular");

    for len in SIZES {
        let data = random_values(len);
        group.throughput(Throughput::Elements(3 * len as u64));

        group.bench_with_input(BenchmarkId::new("spindle", len), &data, |b, data| {
            b.iter(|| {
                let laps = concat(circular(data, 2), data);
                black_box(laps.iter().copied().max())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", len), &data, |b, data| {
            b.iter(|| {
                let laps = data.iter().cycle().take(2 * data.len()).chain(data.iter());
                black_box(laps.copied().max())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_transform_filter,
    bench_zip,
    bench_adjacent,
    bench_concat_circular
);
criterion_main!(benches);
