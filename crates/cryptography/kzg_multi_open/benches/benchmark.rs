use bls12_381::{ff::Field, Scalar};
use criterion::{criterion_group, criterion_main, Criterion};
use daskzg_multi_open_fk20::FK20MultiSettings;
use kzg::{srs::insecure_srs_from_secret, KZGSettings};
use polynomial::FFTSettings;

fn random_scalars(size: usize) -> Vec<Scalar> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| Scalar::random(&mut rng)).collect()
}

fn insecure_fk20(scale: u8, coset_width: usize) -> FK20MultiSettings {
    let fft_settings = FFTSettings::new(scale).expect("valid scale");
    let domain_size = fft_settings.max_width();
    let (g1, g2) = insecure_srs_from_secret(Scalar::from(1_927_409_816u64), domain_size);
    let kzg_settings = KZGSettings::new(fft_settings, g1, g2).expect("valid reference string");
    FK20MultiSettings::new(kzg_settings, domain_size, coset_width).expect("valid parameters")
}

pub fn bench_compute_proofs_fk20(c: &mut Criterion) {
    const SCALE: u8 = 13;
    const COSET_WIDTH: usize = 64;

    let fk20 = insecure_fk20(SCALE, COSET_WIDTH);
    let polynomial = random_scalars(fk20.domain_size() / 2);

    c.bench_function(
        &format!(
            "fk20 multi proofs. POLY_SIZE {}, COSET_WIDTH {}, NUM_PROOFS {}",
            polynomial.len(),
            COSET_WIDTH,
            fk20.num_proofs()
        ),
        |b| b.iter(|| fk20.fk20_multi_da_optimized(&polynomial)),
    );
}

pub fn bench_check_proof_multi(c: &mut Criterion) {
    const COSET_WIDTH: usize = 64;

    let fk20 = insecure_fk20(12, COSET_WIDTH);
    let kzg = fk20.kzg_settings();
    let mut polynomial = random_scalars(fk20.domain_size() / 2);

    let commitment = kzg.commit_to_poly(&polynomial).expect("reference string is long enough");
    let proofs = fk20.fk20_multi_da_optimized(&polynomial).expect("polynomial fits");

    polynomial.resize(fk20.domain_size(), Scalar::ZERO);
    let evaluations = kzg.fft_settings().fft(&polynomial, false).expect("power of two");
    let ys: Vec<Scalar> = (0..COSET_WIDTH)
        .map(|j| evaluations[j * fk20.num_proofs()])
        .collect();

    c.bench_function("check_proof_multi 64 points", |b| {
        b.iter(|| kzg.check_proof_multi(&commitment, &proofs[0], Scalar::ONE, &ys));
    });
}

criterion_group!(benches, bench_compute_proofs_fk20, bench_check_proof_multi);
criterion_main!(benches);
