use rand::{rngs::StdRng, RngCore, SeedableRng};
use rust_das_kzg::{Config, DASContext, TrustedSetup};

pub const SECRET_SEED: &str = "1927409816240961209460912649124";

/// Context for 1024 data elements in samples of 128.
pub fn default_context() -> DASContext {
    let config = Config::default();
    let setup = TrustedSetup::generate_insecure(SECRET_SEED, config.num_extended_elements())
        .expect("seed is decimal");
    DASContext::new(&setup, config).expect("setup is long enough")
}

/// Random data for `config` with the first 100 bytes zeroed.
pub fn random_data(config: &Config, seed: u64) -> Vec<u8> {
    let mut data = vec![0u8; config.num_data_elements() * 31];
    StdRng::seed_from_u64(seed).fill_bytes(&mut data);
    data[..100].fill(0);
    data
}
