//! Constant values for fipsdsa cryptographic operations
//!
//! Hash sizes and initial values live under [`utils`], the DSA size table,
//! primality certainties, G-function IVs and the well-known FIPS 186 domain
//! parameters live under [`traditional`].

#![forbid(unsafe_code)]

pub mod traditional;
pub mod utils;
