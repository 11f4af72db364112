use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{EdwardsPoint, FieldElement, Group, MontgomeryPoint, RandomField, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    FieldElement::random(rng).into_biguint()
}

fn bench_edwards_double(c: &mut Criterion) {
    let g = EdwardsPoint::generator();
    c.bench_function("edwards_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_montgomery_double(c: &mut Criterion) {
    let g = MontgomeryPoint::generator();
    c.bench_function("montgomery_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_edwards_add(c: &mut Criterion) {
    let g = EdwardsPoint::generator();
    let h = g.mul_u64(3).expect("mul");
    c.bench_function("edwards_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add(black_box(&h))))
    });
}

fn bench_montgomery_add(c: &mut Criterion) {
    let g = MontgomeryPoint::generator();
    let h = g.mul_u64(3).expect("mul");
    c.bench_function("montgomery_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add(black_box(&h))))
    });
}

fn bench_edwards_scalar_mul(c: &mut Criterion) {
    let g = EdwardsPoint::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("edwards_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_montgomery_scalar_mul(c: &mut Criterion) {
    let g = MontgomeryPoint::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("montgomery_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_birational_maps(c: &mut Criterion) {
    let ed = EdwardsPoint::generator();
    let mont = MontgomeryPoint::generator();
    c.bench_function("edwards_to_montgomery", |bencher| {
        bencher.iter(|| black_box(black_box(&ed).to_montgomery()))
    });
    c.bench_function("montgomery_to_edwards", |bencher| {
        bencher.iter(|| black_box(black_box(&mont).to_edwards()))
    });
}

criterion_group!(
    benches,
    bench_edwards_double,
    bench_montgomery_double,
    bench_edwards_add,
    bench_montgomery_add,
    bench_edwards_scalar_mul,
    bench_montgomery_scalar_mul,
    bench_birational_maps
);
criterion_main!(benches);
