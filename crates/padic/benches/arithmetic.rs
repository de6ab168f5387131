//! Benchmarks for the cycle-detecting digit arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use padic::digits::arithmetic::{multiply, multiply_digit, negate, sum};
use padic::{DigitSequence, PAdicIntegers, SamplingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    let a = DigitSequence::parse("1234", "3457").unwrap();
    let b = DigitSequence::parse("98765", "12").unwrap();
    let c3 = DigitSequence::parse("123", "").unwrap();

    group.bench_function("two_operands", |bench| {
        let operands = [a.clone(), b.clone()];
        bench.iter(|| black_box(sum(10, black_box(&operands)).unwrap()));
    });

    // Co-prime cycle lengths 4, 5 and 3: the common period is 60.
    group.bench_function("three_coprime_periods", |bench| {
        let operands = [a.clone(), b.clone(), c3.clone()];
        bench.iter(|| black_box(sum(10, black_box(&operands)).unwrap()));
    });

    for n in [2usize, 8, 32] {
        let operands = vec![a.clone(); n];
        group.bench_with_input(BenchmarkId::new("same_operand", n), &operands, |bench, ops| {
            bench.iter(|| black_box(sum(10, black_box(ops)).unwrap()));
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let x = DigitSequence::parse("5", "4").unwrap();
    let y = DigitSequence::parse("6", "").unwrap();
    group.bench_function("digit", |bench| {
        bench.iter(|| black_box(multiply_digit(10, black_box(7), black_box(&x)).unwrap()));
    });
    group.bench_function("short_cycles", |bench| {
        bench.iter(|| black_box(multiply(10, black_box(&x), black_box(&y)).unwrap()));
    });

    let finite_a = DigitSequence::parse("0", "12345").unwrap();
    let finite_b = DigitSequence::parse("0", "5678").unwrap();
    group.bench_function("finite", |bench| {
        bench.iter(|| {
            black_box(multiply(10, black_box(&finite_a), black_box(&finite_b)).unwrap())
        });
    });

    let z7 = PAdicIntegers::of(7).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let config = SamplingConfig {
        head_sigma: 4.0,
        repetend_sigma: 3.0,
    };
    let pairs: Vec<_> = (0..16)
        .map(|_| {
            (
                z7.next_random_with(&mut rng, &config).unwrap(),
                z7.next_random_with(&mut rng, &config).unwrap(),
            )
        })
        .collect();
    group.bench_function("random_7_adic", |bench| {
        bench.iter(|| {
            for (p, q) in &pairs {
                black_box(p.times(q).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_negate(c: &mut Criterion) {
    let a = DigitSequence::parse("1234", "3457").unwrap();
    c.bench_function("negate", |bench| {
        bench.iter(|| black_box(negate(10, black_box(&a)).unwrap()));
    });
}

criterion_group!(benches, bench_sum, bench_multiply, bench_negate);
criterion_main!(benches);
