use rand::RngCore;
use rust_das_kzg::{Config, DASContext, TrustedSetup};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn main() {
    let config = Config::default();
    let trusted_setup = TrustedSetup::generate_insecure(
        "1927409816240961209460912649124",
        config.num_extended_elements(),
    )
    .expect("seed is decimal");
    let ctx = DASContext::new(&trusted_setup, config).expect("setup is long enough");

    let mut data = vec![0u8; config.num_data_elements() * 31];
    rand::thread_rng().fill_bytes(&mut data);

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let (commitment, samples) = ctx
        .compute_samples_and_proofs(&data)
        .expect("failed to compute samples");
    assert!(ctx
        .verify_samples(&commitment, &samples)
        .expect("samples are well formed"));

    let half: Vec<_> = samples.into_iter().step_by(2).collect();
    let recovered = ctx.recover_data(&half).expect("failed to recover data");
    assert_eq!(recovered, data);
}
