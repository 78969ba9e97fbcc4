use common::{default_context, random_data};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rust_das_kzg::{Error, RecoveryError, Sample};

mod common;

fn select_samples(samples: &[Sample], keep: &[usize]) -> Vec<Sample> {
    keep.iter().map(|&i| samples[i].clone()).collect()
}

#[test]
fn extend_commit_prove_verify_recover() {
    let ctx = default_context();
    let config = *ctx.config();
    let data = random_data(&config, 1234);

    let extended = ctx.extend_data(&data).expect("data has the right length");
    let (commitment, samples) = ctx
        .compute_samples_and_proofs(&data)
        .expect("failed to compute samples");
    assert_eq!(samples.len(), 16);
    assert_eq!(
        samples
            .iter()
            .flat_map(|sample| sample.evaluations.clone())
            .collect::<Vec<_>>(),
        extended.evaluations
    );

    assert!(ctx
        .verify_samples(&commitment, &samples)
        .expect("samples are well formed"));

    // Keep exactly half, chosen at random
    let mut indices: Vec<usize> = (0..samples.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(7));
    let half = select_samples(&samples, &indices[..samples.len() / 2]);

    let recovered = ctx
        .recover_extended_data(&half)
        .expect("half of the samples is enough");
    assert_eq!(recovered, extended.evaluations);
    assert_eq!(ctx.recover_data(&half).expect("recovery failed"), data);
}

#[test]
fn recovery_from_every_half_pattern_shape() {
    let ctx = default_context();
    let config = *ctx.config();
    let data = random_data(&config, 99);
    let (_, samples) = ctx.compute_samples_and_proofs(&data).unwrap();
    let n = samples.len();

    let keep_patterns: Vec<Vec<usize>> = vec![
        (0..n).collect(),
        (0..n / 2).collect(),
        (n / 2..n).collect(),
        (0..n).step_by(2).collect(),
        (1..n).step_by(2).collect(),
        (0..n).filter(|i| i % 4 < 2).collect(),
        (0..n).rev().take(n / 2 + 3).collect(),
    ];

    for keep in keep_patterns {
        let partial = select_samples(&samples, &keep);
        assert_eq!(ctx.recover_data(&partial).unwrap(), data, "keeping {keep:?}");
    }
}

#[test]
fn recovered_samples_carry_valid_proofs() {
    let ctx = default_context();
    let config = *ctx.config();
    let data = random_data(&config, 5);
    let (commitment, samples) = ctx.compute_samples_and_proofs(&data).unwrap();

    let keep: Vec<usize> = (0..samples.len()).filter(|i| i % 2 == 1).collect();
    let recovered = ctx
        .recover_samples_and_proofs(&select_samples(&samples, &keep))
        .unwrap();

    assert_eq!(recovered, samples);
    assert!(ctx.verify_samples(&commitment, &recovered).unwrap());
}

#[test]
fn more_than_half_missing_is_insufficient() {
    let ctx = default_context();
    let config = *ctx.config();
    let data = random_data(&config, 6);
    let (_, samples) = ctx.compute_samples_and_proofs(&data).unwrap();

    let keep: Vec<usize> = (0..samples.len() / 2 - 1).collect();
    let err = ctx
        .recover_extended_data(&select_samples(&samples, &keep))
        .unwrap_err();
    assert!(err.is_insufficient_samples());
    assert!(matches!(
        err,
        Error::Recovery(RecoveryError::InsufficientSamples {
            num_samples_received: 7,
            min_samples_needed: 8,
        })
    ));
}

#[test]
fn corrupted_sample_breaks_recovery() {
    let ctx = default_context();
    let config = *ctx.config();
    let data = random_data(&config, 8);
    let (_, samples) = ctx.compute_samples_and_proofs(&data).unwrap();

    // One spare sample beyond the minimum lets the decoder notice the error
    let mut partial = select_samples(&samples, &(0..samples.len() / 2 + 1).collect::<Vec<_>>());
    partial[0].evaluations[0] += bls12_381::Scalar::from(1u64);

    assert!(matches!(
        ctx.recover_extended_data(&partial),
        Err(Error::Recovery(RecoveryError::ReedSolomon(_)))
    ));
}
