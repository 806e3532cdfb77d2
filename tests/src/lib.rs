//! Shared helpers for the fipsdsa integration tests

use std::sync::Arc;

use fipsdsa_sign::{DomainParameters, KeyPair, KeyPairGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Install a `RUST_LOG`-driven subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Reproducible randomness
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// The published 1024-bit FIPS 186 parameters
pub fn fips_1024() -> Arc<DomainParameters> {
    Arc::new(DomainParameters::fips_1024().expect("published parameters parse"))
}

/// A key pair over the 1024-bit parameters
pub fn key_pair(seed: u64) -> KeyPair {
    KeyPairGenerator::new(fips_1024())
        .generate(&mut rng(seed))
        .expect("key generation")
}

/// Decode a hex string, panicking on malformed input
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex")
}
