//! Message digest primitives for the fipsdsa library
//!
//! This crate provides the block-oriented hash engines the DSA implementation
//! is built on: SHA-1, SHA-224 and SHA-256 as specified in FIPS PUB 180-4.
//! Every engine is a [`hash::BlockHashEngine`] driven by an algorithm specific
//! compression core, so buffering, padding and the finalize/resume state
//! machine are shared.
//!
//! # Security Features
//!
//! - Engine state and buffered input are zeroized on drop
//! - Digests compare in constant time

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{
    BlockHashEngine, CompressionCore, DigestAlgorithm, EngineStatus, HashAlgorithm, HashFunction,
    Sha1, Sha224, Sha256,
};

// Type system
pub mod types;
pub use types::Digest;
