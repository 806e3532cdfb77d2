//! # fipsdsa
//!
//! The FIPS 186 Digital Signature Algorithm with the SHA-1 and SHA-2
//! digests it is built on.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fipsdsa = "0.3"
//! ```
//!
//! ```no_run
//! use fipsdsa::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> fipsdsa::api::Result<()> {
//! let cache = ParameterCache::new();
//! let params = fipsdsa::generate_parameters(&cache, 1024, &mut OsRng)?;
//! let pair = fipsdsa::generate_key_pair(&params, &mut OsRng)?;
//!
//! let signature = fipsdsa::sign(pair.signing_key(), b"message", &mut OsRng)?;
//! assert!(fipsdsa::verify(pair.verifying_key(), b"message", &signature)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`fipsdsa-api`]: Error taxonomy and shared traits
//! - [`fipsdsa-params`]: Size tables, IVs and published parameters
//! - [`fipsdsa-algorithms`]: SHA-1, SHA-224 and SHA-256
//! - [`fipsdsa-sign`]: Parameter generation, keys and the signature engine

#![forbid(unsafe_code)]

use std::sync::Arc;

use rand::{CryptoRng, RngCore};

pub use fipsdsa_algorithms as algorithms;
pub use fipsdsa_api as api;
pub use fipsdsa_params as params;
pub use fipsdsa_sign as sign;

// Signature components and parameters are num-bigint-dig integers
pub use num_bigint::BigUint;

use fipsdsa_algorithms::DigestAlgorithm;
use fipsdsa_api::Result;
use fipsdsa_sign::{
    DomainParameters, DsaSignature, DsaVariant, KeyPair, KeyPairGenerator, NonceHistory,
    ParameterCache, SeedMaterial, SignatureEngine, SigningKey, VerifyingKey,
};

/// Common imports for fipsdsa users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Hasher, Signature, SignatureBytes};

    pub use crate::algorithms::{DigestAlgorithm, HashFunction, Sha1, Sha224, Sha256};

    pub use crate::sign::{
        DhParameters, DomainParameters, DsaSha1, DsaSignature, DsaVariant, GeneratorConfig,
        KeyPair, KeyPairGenerator, KeySize, NonceHistory, ParameterCache, ParameterGenerator,
        SeedMaterial, SignatureEngine, SigningKey, VerifyingKey,
    };
}

/// Domain parameters for a modulus length, from `cache` or freshly generated
///
/// Supported lengths are 512 to 1024 bits in steps of 64, and 2048.
pub fn generate_parameters<R: RngCore + CryptoRng>(
    cache: &ParameterCache,
    prime_bits: usize,
    rng: &mut R,
) -> Result<Arc<DomainParameters>> {
    Ok(cache.get_or_generate(prime_bits, rng)?)
}

/// A fresh key pair over `params`
pub fn generate_key_pair<R: RngCore + CryptoRng>(
    params: &Arc<DomainParameters>,
    rng: &mut R,
) -> Result<KeyPair> {
    Ok(KeyPairGenerator::new(Arc::clone(params)).generate(rng)?)
}

/// The narrowest digest that covers the subprime
fn variant_for(params: &DomainParameters) -> DsaVariant {
    [DsaVariant::Sha1WithDsa, DsaVariant::Sha224WithDsa]
        .into_iter()
        .find(|v| params.subprime_bits() <= v.digest_bits())
        .unwrap_or(DsaVariant::Sha256WithDsa)
}

/// Sign `message`
///
/// SHA-1 is used with 160-bit subprimes, SHA-224 with 224-bit ones and
/// SHA-256 with anything wider.
pub fn sign<R: RngCore + CryptoRng>(
    key: &SigningKey,
    message: &[u8],
    rng: &mut R,
) -> Result<DsaSignature> {
    let mut engine = SignatureEngine::with_rng(variant_for(key.params()), rng);
    engine.init_sign(key)?;
    engine.update(message)?;
    Ok(engine.sign_to_signature(&SeedMaterial::FreshRandom, &mut NonceHistory::new())?)
}

/// Check `signature` over `message`
///
/// Returns `Ok(false)` for a well-formed signature that does not match, and
/// `InvalidSignature` when `r` or `s` is outside `(0, q)`.
pub fn verify(key: &VerifyingKey, message: &[u8], signature: &DsaSignature) -> Result<bool> {
    let mut engine = SignatureEngine::new(variant_for(key.params()));
    engine.init_verify(key)?;
    engine.update(message)?;
    Ok(engine.verify_signature(signature)?)
}

/// One-shot digest
pub fn digest(algorithm: DigestAlgorithm, message: &[u8]) -> Vec<u8> {
    algorithm.digest(message)
}

/// One-shot digest by algorithm name (`"SHA-1"`, `"SHA"`, `"SHA-224"`, `"SHA-256"`)
pub fn digest_by_name(name: &str, message: &[u8]) -> Result<Vec<u8>> {
    Ok(DigestAlgorithm::from_name(name)?.digest(message))
}
