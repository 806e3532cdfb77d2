//! Trait definitions shared across the fipsdsa crates

pub mod hash;
pub mod signature;

pub use hash::Hasher;
pub use signature::{Signature, SignatureBytes};
