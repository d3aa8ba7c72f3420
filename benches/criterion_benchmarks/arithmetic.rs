use criterion::{black_box, Criterion, criterion_group, criterion_main};

use relp_bignum::{BigInteger, BigUnsigned, Step};

fn wide(digits: usize) -> BigUnsigned {
    BigUnsigned::from_digits((1..=digits as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

pub fn add_wide(c: &mut Criterion) {
    let (a, b) = (wide(64), wide(48));
    c.bench_function("add 64 and 48 digits", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn sub_wide(c: &mut Criterion) {
    let (a, b) = (wide(64), wide(48));
    c.bench_function("subtract 48 from 64 digits", |bencher| bencher.iter(|| {
        black_box(&a) - black_box(&b)
    }));
}

pub fn mul_wide(c: &mut Criterion) {
    let (a, b) = (wide(32), wide(32));
    c.bench_function("multiply 32 by 32 digits", |bencher| bencher.iter(|| {
        black_box(&a) * black_box(&b)
    }));
}

pub fn increment_carry(c: &mut Criterion) {
    let all_ones = BigUnsigned::from_digits(vec![u64::MAX; 64]);
    c.bench_function("increment with full carry", |bencher| bencher.iter(|| {
        let mut x = black_box(&all_ones).clone();
        x.increment();
        x
    }));
}

pub fn signed_mixed(c: &mut Criterion) {
    let a = BigInteger::from(wide(32));
    let b = -BigInteger::from(wide(33));
    c.bench_function("add differing signs", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

criterion_group!(arithmetic,
    add_wide,
    sub_wide,
    mul_wide,
    increment_carry,
    signed_mixed,
);
criterion_main!(arithmetic);
