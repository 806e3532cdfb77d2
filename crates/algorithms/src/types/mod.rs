//! Type-safe wrappers for cryptographic types

// Submodules
pub mod digest;

// Re-export main types
pub use digest::Digest;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
