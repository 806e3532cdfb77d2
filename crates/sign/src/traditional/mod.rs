//! Traditional signature schemes
//!
//! This module contains the finite-field Digital Signature Algorithm.

pub mod dsa;

// Re-export DSA types
pub use dsa::{DsaSha1, SignatureEngine};
