// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigInt, BigUint};
use rand::{rngs::StdRng, SeedableRng};
use std::{hint::black_box, time::Duration};
use tower_math::{
    batch_inversion,
    fields::{bls12_381::BaseElement, Fp2},
    FieldElement, PrimeField,
};

const SIZES: [usize; 3] = [1_024, 16_384, 262_144];

pub fn base_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381");
    let mut rng = StdRng::seed_from_u64(42);

    group.bench_function("add", |bench| {
        let x = BaseElement::try_random(&mut rng).unwrap();
        let y = BaseElement::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("mul", |bench| {
        let x = BaseElement::try_random(&mut rng).unwrap();
        let y = BaseElement::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("square", |bench| {
        let x = BaseElement::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x).square())
    });

    group.bench_function("inv", |bench| {
        let x = BaseElement::try_random(&mut rng).unwrap();
        bench.iter(|| BaseElement::inv(black_box(x)))
    });

    group.bench_function("legendre", |bench| {
        let x = BaseElement::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x).legendre())
    });
}

pub fn extension_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_quad");
    let mut rng = StdRng::seed_from_u64(43);

    group.bench_function("add", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        let y = Fp2::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("mul", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        let y = Fp2::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("square", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x).square())
    });

    group.bench_function("inv", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        bench.iter(|| Fp2::inv(black_box(x)))
    });

    group.bench_function("exp", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        let k = BigInt::from(BaseElement::try_random(&mut rng).unwrap().to_biguint());
        bench.iter(|| Fp2::exp_signed(black_box(x), black_box(&k)))
    });

    group.bench_function("sqrt", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap().square();
        bench.iter(|| black_box(x).sqrt())
    });

    group.bench_function("legendre", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        bench.iter(|| black_box(x).legendre())
    });

    group.bench_function("frobenius", |bench| {
        let x = Fp2::try_random(&mut rng).unwrap();
        let q: &BigUint = BaseElement::modulus();
        bench.iter(|| black_box(x).exp(q))
    });
}

pub fn batch_inv(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_inv");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    let mut rng = StdRng::seed_from_u64(44);

    for &size in SIZES.iter() {
        let values = (0..size)
            .map(|_| Fp2::try_random(&mut rng).unwrap())
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("fp2", size), |bench| {
            bench.iter_with_large_drop(|| batch_inversion(&values));
        });
    }

    group.finish();
}

criterion_group!(field_group, batch_inv, base_ops, extension_ops);
criterion_main!(field_group);
