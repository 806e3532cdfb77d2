//! Public API traits and types for the fipsdsa library
//!
//! This crate provides the public API surface shared by the fipsdsa crates:
//! the error taxonomy every operation reports through, and the trait
//! definitions for digests and signature schemes.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Hasher, Signature, SignatureBytes};

// Re-export trait modules for direct access
pub use traits::{hash, signature};
