use criterion::{criterion_group, criterion_main, Criterion};
use daskzg_bls12_381::{
    batch_inversion::batch_inverse, ff::Field, group::Group, lincomb::g1_lincomb, G1Point,
    G1Projective, Scalar,
};

fn bench_lincomb(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let points: Vec<G1Point> = (0..1024)
        .map(|_| G1Projective::random(&mut rng).into())
        .collect();
    let scalars: Vec<Scalar> = (0..1024).map(|_| Scalar::random(&mut rng)).collect();

    c.bench_function("g1_lincomb 1024", |b| {
        b.iter(|| g1_lincomb(&points, &scalars));
    });
}

fn bench_batch_inverse(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let values: Vec<Scalar> = (0..4096).map(|_| Scalar::random(&mut rng)).collect();

    c.bench_function("batch_inverse 4096", |b| {
        b.iter(|| {
            let mut scratch = values.clone();
            batch_inverse(&mut scratch)
        });
    });
}

criterion_group!(benches, bench_lincomb, bench_batch_inverse);
criterion_main!(benches);
