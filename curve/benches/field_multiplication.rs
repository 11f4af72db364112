use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{FieldElement, RandomField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_field_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = FieldElement::random(&mut rng);
    let b = FieldElement::random(&mut rng);
    c.bench_function("field_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_field_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = FieldElement::random(&mut rng);
    c.bench_function("field_invert", |bencher| {
        bencher.iter(|| black_box(black_box(&a).invert()))
    });
}

fn bench_field_sqrt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let square = FieldElement::random(&mut rng).square();
    c.bench_function("field_sqrt", |bencher| {
        bencher.iter(|| black_box(black_box(&square).sqrt()))
    });
}

criterion_group!(benches, bench_field_mul, bench_field_invert, bench_field_sqrt);
criterion_main!(benches);
