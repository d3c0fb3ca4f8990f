use criterion::{criterion_group, criterion_main, Criterion};
use lens_math::roots::polyroots;
use num_complex::Complex64;
use std::hint::black_box;

fn bench_quartic(c: &mut Criterion) {
    let e = Complex64::from_polar(1.0, 0.7);
    let (z1, z2) = (-0.99, 0.11);
    let coeffs = [
        e,
        e * (-2.0 * z1 - 2.0 * z2),
        e * (4.0 * z1 * z2 + z1 * z1 + z2 * z2) - 1.0,
        e * (-2.0 * z1 * z1 * z2 - 2.0 * z1 * z2 * z2),
        e * (z1 * z1 * z2 * z2) + z1 * z2,
    ];

    c.bench_function("polyroots_quartic", |b| {
        b.iter(|| polyroots(black_box(&coeffs)))
    });
}

fn bench_degree_10(c: &mut Criterion) {
    let coeffs: Vec<Complex64> = (0..11)
        .map(|k| Complex64::new((k as f64 + 1.0).sin(), (k as f64).cos()))
        .collect();

    c.bench_function("polyroots_degree_10", |b| {
        b.iter(|| polyroots(black_box(&coeffs)))
    });
}

criterion_group!(benches, bench_quartic, bench_degree_10);
criterion_main!(benches);
