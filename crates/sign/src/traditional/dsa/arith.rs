//! Modular arithmetic helpers
//!
//! Thin wrappers over `num-bigint-dig` that pin down the conventions used
//! throughout DSA: certainty-to-rounds mapping and non-negative inverses.

use num_bigint::{prime::probably_prime, BigInt, BigUint, ModInverse, Sign};
use num_traits::{One, Zero};

/// Miller–Rabin rounds for a primality certainty `c`, i.e. `ceil(c / 2)`
pub fn certainty_rounds(certainty: u32) -> usize {
    certainty.div_ceil(2).max(1) as usize
}

/// Probabilistic primality test with error bound `2^-certainty`
pub fn is_probable_prime(n: &BigUint, certainty: u32) -> bool {
    probably_prime(n, certainty_rounds(certainty))
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if a.is_zero() || m.is_zero() || m.is_one() {
        return None;
    }
    let inv = a.mod_inverse(m)?;
    // Normalize into [0, m)
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    (((inv % &m) + &m) % &m).to_biguint()
}

/// Big-endian bytes without leading zeros; zero encodes as the empty string
pub fn minimal_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Big-endian bytes left-padded to `len`
///
/// Values wider than `len` are returned unpadded.
pub fn padded_bytes(n: &BigUint, len: usize) -> Vec<u8> {
    let bytes = minimal_bytes(n);
    if bytes.len() >= len {
        return bytes;
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}
