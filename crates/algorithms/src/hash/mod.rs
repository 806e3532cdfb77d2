//! Hash function implementations
//!
//! This module contains the FIPS 180-4 hash functions used by the DSA
//! implementation, together with the block engine they share.

use std::fmt;
use std::str::FromStr;

use fipsdsa_api::Hasher;

use crate::error::{Error, Result};

pub mod engine;
pub mod sha1;
pub mod sha2;

// Re-exports
pub use engine::{BlockHashEngine, CompressionCore, EngineStatus};
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256};

/// Hash function result
pub type Hash = Vec<u8>;

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;
    /// Block length in bytes
    const BLOCK_SIZE: usize;
    /// Canonical algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Trait for cryptographic hash functions
pub trait HashFunction: Sized {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;

    /// Fixed-size digest type
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> String {
        Self::Algorithm::ALGORITHM_ID.to_string()
    }
}

/// Runtime selector over the supported digests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-1, 160-bit output
    Sha1,
    /// SHA-224, 224-bit output
    Sha224,
    /// SHA-256, 256-bit output
    Sha256,
}

impl DigestAlgorithm {
    /// Look up an algorithm by its standard name
    ///
    /// Accepts `"SHA-1"`, `"SHA1"`, `"SHA"`, `"SHA-224"` and `"SHA-256"`
    /// (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        const NAMES: [(&str, DigestAlgorithm); 7] = [
            ("SHA-1", DigestAlgorithm::Sha1),
            ("SHA1", DigestAlgorithm::Sha1),
            ("SHA", DigestAlgorithm::Sha1),
            ("SHA-224", DigestAlgorithm::Sha224),
            ("SHA224", DigestAlgorithm::Sha224),
            ("SHA-256", DigestAlgorithm::Sha256),
            ("SHA256", DigestAlgorithm::Sha256),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, alg)| *alg)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    /// The digest whose output length matches a DSA subprime length
    pub fn for_subprime_bits(bits: usize) -> Result<Self> {
        match bits {
            160 => Ok(DigestAlgorithm::Sha1),
            224 => Ok(DigestAlgorithm::Sha224),
            256 => Ok(DigestAlgorithm::Sha256),
            _ => Err(Error::param(
                "subprime bits",
                format!("no digest with a {}-bit output", bits),
            )),
        }
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => <sha1::Sha1Algorithm as HashAlgorithm>::ALGORITHM_ID,
            DigestAlgorithm::Sha224 => <sha2::Sha224Algorithm as HashAlgorithm>::ALGORITHM_ID,
            DigestAlgorithm::Sha256 => <sha2::Sha256Algorithm as HashAlgorithm>::ALGORITHM_ID,
        }
    }

    /// Digest length in bytes
    pub fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => <sha1::Sha1Algorithm as HashAlgorithm>::OUTPUT_SIZE,
            DigestAlgorithm::Sha224 => <sha2::Sha224Algorithm as HashAlgorithm>::OUTPUT_SIZE,
            DigestAlgorithm::Sha256 => <sha2::Sha256Algorithm as HashAlgorithm>::OUTPUT_SIZE,
        }
    }

    /// Digest length in bits
    pub fn output_bits(self) -> usize {
        self.output_size() * 8
    }

    /// A fresh streaming hasher for this algorithm
    pub fn new_hasher(self) -> Box<dyn Hasher> {
        match self {
            DigestAlgorithm::Sha1 => Box::new(Sha1::new()),
            DigestAlgorithm::Sha224 => Box::new(Sha224::new()),
            DigestAlgorithm::Sha256 => Box::new(Sha256::new()),
        }
    }

    /// Hash `data` in one call
    pub fn digest(self, data: &[u8]) -> Hash {
        let mut hasher = self.new_hasher();
        hasher.update(data);
        hasher.digest()
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
