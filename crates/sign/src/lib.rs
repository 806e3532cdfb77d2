//! Digital Signature Algorithm (FIPS 186)
//!
//! This crate implements DSA domain-parameter generation, key-pair
//! generation, signing and verification on top of the digest engines in
//! `fipsdsa-algorithms` and the big-integer arithmetic of `num-bigint-dig`.

#![forbid(unsafe_code)]

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::dsa::{
    DhParameters, DomainParameters, DsaSha1, DsaSignature, DsaVariant, GeneratorConfig, KeyPair,
    KeyPairGenerator, KeySize, NonceHistory, ParameterCache, ParameterGenerator, SeedMaterial,
    SignatureEngine, SigningKey, VerifyingKey,
};
