//! Digital Signature Algorithm (FIPS 186)
//!
//! The pieces compose leaf first:
//!
//! - [`arith`]: primality and inverse helpers over `num-bigint-dig`
//! - [`seed`]: the FIPS 186 G function and seed/nonce bookkeeping
//! - [`paramgen`]: domain-parameter generation (FIPS 186-3 A.1.1.2)
//! - [`cache`]: shared, lazily filled parameter cache
//! - [`keys`]: key types and key-pair generation
//! - [`der`]: `SEQUENCE { INTEGER r, INTEGER s }` codec
//! - [`engine`]: the streaming sign/verify state machine
//!
//! [`DsaSha1`] wraps the engine behind the generic `Signature` trait.

pub mod arith;
pub mod cache;
pub mod der;
pub mod engine;
pub mod keys;
pub mod paramgen;
pub mod params;
pub mod scheme;
pub mod seed;

pub use cache::ParameterCache;
pub use der::DsaSignature;
pub use engine::{DsaVariant, SignatureEngine};
pub use keys::{KeyPair, KeyPairGenerator, SigningKey, VerifyingKey};
pub use paramgen::{generate_g, GeneratedPrimes, GeneratorConfig, KeySize, ParameterGenerator};
pub use params::{DhParameters, DomainParameters};
pub use scheme::DsaSha1;
pub use seed::{g_function, NonceHistory, SeedMaterial};
