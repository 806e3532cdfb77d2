//! Deterministic seed expansion and nonce bookkeeping
//!
//! FIPS 186-2 derives private keys and per-signature nonces from 160-bit
//! seeds through the G function, a single SHA-1 compression keyed by an IV.
//! Subprimes wider than 160 bits cannot be covered by G; those secrets are
//! drawn as `N + 64` random bits reduced into `[1, q)` (FIPS 186-4 B.1.1).

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

use fipsdsa_algorithms::hash::sha1;
use fipsdsa_params::traditional::dsa::{
    DSA_EXTRA_RANDOM_BITS, DSA_LEGACY_SUBPRIME_BITS, DSA_SEED_BYTES, DSA_SEED_WORDS,
};

use crate::error::{Error, Result};

/// Five 32-bit words of G-function input
pub type SeedWords = [u32; DSA_SEED_WORDS];

/// One SHA-1 compression of `seed` (zero padded to a block) from state `iv`
///
/// The result is `iv + working variables`, word by word.
pub fn g_function(seed: &SeedWords, iv: &SeedWords) -> SeedWords {
    let mut block = [0u32; 16];
    block[..DSA_SEED_WORDS].copy_from_slice(seed);
    let mut state = *iv;
    sha1::compress_words(&mut state, &block);
    block.zeroize();
    state
}

/// G output read as a 160-bit big-endian integer and reduced mod `q`
pub fn expand_mod_q(seed: &SeedWords, iv: &SeedWords, q: &BigUint) -> BigUint {
    let mut words = g_function(seed, iv);
    let mut bytes = [0u8; DSA_SEED_BYTES];
    BigEndian::write_u32_into(&words, &mut bytes);
    let value = BigUint::from_bytes_be(&bytes) % q;
    words.zeroize();
    bytes.zeroize();
    value
}

/// Where the randomness behind a key or nonce comes from
#[derive(Clone)]
pub enum SeedMaterial {
    /// Five words drawn from the caller's RNG for every attempt
    FreshRandom,
    /// A caller-chosen 20-byte seed, read as five big-endian words
    ApplicationSeed([u8; DSA_SEED_BYTES]),
}

impl SeedMaterial {
    /// Wrap an application seed, which must be exactly 20 bytes
    pub fn application(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; DSA_SEED_BYTES] = bytes.try_into().map_err(|_| {
            Error::InvalidParameter(format!(
                "application seed must be {} bytes, got {}",
                DSA_SEED_BYTES,
                bytes.len()
            ))
        })?;
        Ok(SeedMaterial::ApplicationSeed(seed))
    }

    /// The seed as G-function words, if one was supplied
    pub fn words(&self) -> Option<SeedWords> {
        match self {
            SeedMaterial::FreshRandom => None,
            SeedMaterial::ApplicationSeed(bytes) => {
                let mut words = [0u32; DSA_SEED_WORDS];
                BigEndian::read_u32_into(bytes, &mut words);
                Some(words)
            }
        }
    }
}

impl Zeroize for SeedMaterial {
    fn zeroize(&mut self) {
        if let SeedMaterial::ApplicationSeed(bytes) = self {
            bytes.zeroize();
        }
    }
}

impl Drop for SeedMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for SeedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMaterial::FreshRandom => f.write_str("FreshRandom"),
            SeedMaterial::ApplicationSeed(_) => f.write_str("ApplicationSeed(..)"),
        }
    }
}

/// Seed words behind the most recent nonce
///
/// Owned by the caller and threaded through signing so an application seed
/// is never used for two consecutive signatures.
#[derive(Clone, Default)]
pub struct NonceHistory {
    last: Option<SeedWords>,
}

impl NonceHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `words` equals the seed behind the previous nonce
    pub fn is_repeat(&self, words: &SeedWords) -> bool {
        self.last.as_ref() == Some(words)
    }

    /// Remember the seed behind the nonce just used
    pub fn record(&mut self, words: SeedWords) {
        if let Some(mut old) = self.last.replace(words) {
            old.zeroize();
        }
    }

    /// Whether any nonce has been recorded
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Forget the recorded seed
    pub fn clear(&mut self) {
        if let Some(mut old) = self.last.take() {
            old.zeroize();
        }
    }
}

impl Drop for NonceHistory {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for NonceHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonceHistory")
            .field("recorded", &self.last.is_some())
            .finish()
    }
}

/// Five words from `rng`
pub(crate) fn random_seed_words<R: RngCore + CryptoRng>(rng: &mut R) -> SeedWords {
    core::array::from_fn(|_| rng.next_u32())
}

/// Derive a secret in `(0, q)`
///
/// An application seed is tried once through G; if it yields a value out of
/// range, or `q` is wider than 160 bits, fresh randomness takes over. Returns
/// the secret and, on the G path, the seed words that produced it.
pub(crate) fn derive_secret<R: RngCore + CryptoRng>(
    q: &BigUint,
    iv: &SeedWords,
    application: Option<SeedWords>,
    rng: &mut R,
    purpose: &'static str,
) -> (BigUint, Option<SeedWords>) {
    if q.bits() > DSA_LEGACY_SUBPRIME_BITS {
        trace!(purpose, subprime_bits = q.bits(), "drawing wide-subprime secret");
        return (wide_secret(q, rng), None);
    }

    if let Some(words) = application {
        let value = expand_mod_q(&words, iv, q);
        if !value.is_zero() {
            return (value, Some(words));
        }
        trace!(purpose, "application seed gave zero, using fresh randomness");
    }

    loop {
        let mut words = random_seed_words(rng);
        let value = expand_mod_q(&words, iv, q);
        if !value.is_zero() {
            return (value, Some(words));
        }
        words.zeroize();
        trace!(purpose, "G output reduced to zero, redrawing seed");
    }
}

/// `(c mod (q - 1)) + 1` for `c` of `N + 64` random bits
fn wide_secret<R: RngCore + CryptoRng>(q: &BigUint, rng: &mut R) -> BigUint {
    let mut c = rng.gen_biguint(q.bits() + DSA_EXTRA_RANDOM_BITS);
    let value = (&c % (q - BigUint::one())) + BigUint::one();
    c.zeroize();
    value
}

#[cfg(test)]
mod tests;
