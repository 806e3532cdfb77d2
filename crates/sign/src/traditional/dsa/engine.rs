//! Streaming DSA signature engine
//!
//! A [`SignatureEngine`] is initialized for signing or verification, fed the
//! message in any number of `update` calls, and finalized with
//! [`SignatureEngine::sign`] or [`SignatureEngine::verify`]. Finalizing
//! resets the digest and keeps the key, so the engine can be reused.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{trace, warn};
use zeroize::Zeroize;

use fipsdsa_algorithms::{validate, DigestAlgorithm};
use fipsdsa_api::Hasher;
use fipsdsa_params::traditional::dsa::{DSA_NONCE_IV, DSA_RAW_DIGEST_SIZE};

use super::arith::{mod_inverse, padded_bytes};
use super::der::DsaSignature;
use super::keys::{SigningKey, VerifyingKey};
use super::seed::{derive_secret, NonceHistory, SeedMaterial};
use crate::error::{Error, Result};

/// How the message is reduced before signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DsaVariant {
    /// SHA-1 digest of the message
    Sha1WithDsa,
    /// SHA-224 digest of the message
    Sha224WithDsa,
    /// SHA-256 digest of the message
    Sha256WithDsa,
    /// The caller supplies a 20-byte digest directly
    RawDsa,
}

impl DsaVariant {
    /// Standard algorithm name
    pub fn name(self) -> &'static str {
        match self {
            DsaVariant::Sha1WithDsa => "SHA1withDSA",
            DsaVariant::Sha224WithDsa => "SHA224withDSA",
            DsaVariant::Sha256WithDsa => "SHA256withDSA",
            DsaVariant::RawDsa => "NONEwithDSA",
        }
    }

    /// Message digest, or `None` in raw mode
    pub fn digest(self) -> Option<DigestAlgorithm> {
        match self {
            DsaVariant::Sha1WithDsa => Some(DigestAlgorithm::Sha1),
            DsaVariant::Sha224WithDsa => Some(DigestAlgorithm::Sha224),
            DsaVariant::Sha256WithDsa => Some(DigestAlgorithm::Sha256),
            DsaVariant::RawDsa => None,
        }
    }

    /// Bits of digest the variant feeds into the signature
    pub fn digest_bits(self) -> usize {
        self.digest()
            .map_or(DSA_RAW_DIGEST_SIZE * 8, DigestAlgorithm::output_bits)
    }
}

impl FromStr for DsaVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            DsaVariant::Sha1WithDsa,
            DsaVariant::Sha224WithDsa,
            DsaVariant::Sha256WithDsa,
            DsaVariant::RawDsa,
        ]
        .into_iter()
        .find(|v| v.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| Error::InvalidParameter(format!("unknown DSA variant {:?}", s)))
    }
}

impl fmt::Display for DsaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw-mode input: up to 20 bytes plus a count of everything offered
struct RawDigest {
    buf: [u8; DSA_RAW_DIGEST_SIZE],
    len: usize,
}

impl RawDigest {
    fn new() -> Self {
        Self {
            buf: [0u8; DSA_RAW_DIGEST_SIZE],
            len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        if self.len < DSA_RAW_DIGEST_SIZE {
            let take = data.len().min(DSA_RAW_DIGEST_SIZE - self.len);
            self.buf[self.len..self.len + take].copy_from_slice(&data[..take]);
        }
        self.len = self.len.saturating_add(data.len());
    }

    /// Hand out the buffered digest; the buffer is emptied either way
    fn take(&mut self) -> Result<Vec<u8>> {
        let len = core::mem::replace(&mut self.len, 0);
        let out = self.buf.to_vec();
        self.buf.zeroize();
        if len != DSA_RAW_DIGEST_SIZE {
            return Err(Error::InvalidDigestLength {
                expected: DSA_RAW_DIGEST_SIZE,
                actual: len,
            });
        }
        Ok(out)
    }

    fn reset(&mut self) {
        self.buf.zeroize();
        self.len = 0;
    }
}

enum MessageDigest {
    Hashed(Box<dyn Hasher>),
    Raw(RawDigest),
}

impl MessageDigest {
    fn for_variant(variant: DsaVariant) -> Self {
        match variant.digest() {
            Some(alg) => MessageDigest::Hashed(alg.new_hasher()),
            None => MessageDigest::Raw(RawDigest::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            MessageDigest::Hashed(h) => h.update(data),
            MessageDigest::Raw(r) => r.update(data),
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        match self {
            MessageDigest::Hashed(h) => Ok(h.digest()),
            MessageDigest::Raw(r) => r.take(),
        }
    }

    fn reset(&mut self) {
        match self {
            MessageDigest::Hashed(h) => h.reset(),
            MessageDigest::Raw(r) => r.reset(),
        }
    }
}

enum Mode {
    Uninitialized,
    Sign(SigningKey),
    Verify(VerifyingKey),
}

/// DSA sign/verify state machine
///
/// `R` supplies nonce randomness; it defaults to the operating system RNG.
pub struct SignatureEngine<R: RngCore + CryptoRng = OsRng> {
    variant: DsaVariant,
    mode: Mode,
    digest: MessageDigest,
    rng: R,
}

impl SignatureEngine<OsRng> {
    /// Engine drawing nonces from the operating system
    pub fn new(variant: DsaVariant) -> Self {
        Self::with_rng(variant, OsRng)
    }
}

impl<R: RngCore + CryptoRng> SignatureEngine<R> {
    /// Engine drawing nonces from `rng`
    pub fn with_rng(variant: DsaVariant, rng: R) -> Self {
        Self {
            variant,
            mode: Mode::Uninitialized,
            digest: MessageDigest::for_variant(variant),
            rng,
        }
    }

    /// Variant chosen at construction
    pub fn variant(&self) -> DsaVariant {
        self.variant
    }

    /// True once `init_sign` or `init_verify` has succeeded
    pub fn is_initialized(&self) -> bool {
        !matches!(self.mode, Mode::Uninitialized)
    }

    /// Prepare to sign with `key`
    ///
    /// # Errors
    ///
    /// `InvalidKey` when the variant's digest is shorter than `q`.
    pub fn init_sign(&mut self, key: &SigningKey) -> Result<()> {
        self.check_strength(key.params().q())?;
        self.digest.reset();
        self.mode = Mode::Sign(key.clone());
        Ok(())
    }

    /// Prepare to verify against `key`
    pub fn init_verify(&mut self, key: &VerifyingKey) -> Result<()> {
        self.check_strength(key.params().q())?;
        self.digest.reset();
        self.mode = Mode::Verify(key.clone());
        Ok(())
    }

    fn check_strength(&self, q: &BigUint) -> Result<()> {
        let digest_bits = self.variant.digest_bits();
        if digest_bits < q.bits() {
            return Err(Error::InvalidKey(format!(
                "{} digest ({} bits) is weaker than the {}-bit subprime",
                self.variant,
                digest_bits,
                q.bits()
            )));
        }
        Ok(())
    }

    fn require_initialized(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(Error::InvalidState(
                "engine not initialized for signing or verification".into(),
            ));
        }
        Ok(())
    }

    /// Feed message bytes
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.require_initialized()?;
        self.digest.update(data);
        Ok(())
    }

    /// Feed `data[offset..offset + len]`
    ///
    /// State is checked before the range.
    pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<()> {
        self.require_initialized()?;
        validate::range("DSA update", data.len(), offset, len)?;
        self.digest.update(&data[offset..offset + len]);
        Ok(())
    }

    /// Sign the buffered message with fresh nonce randomness
    pub fn sign(&mut self) -> Result<Vec<u8>> {
        self.sign_with(&SeedMaterial::FreshRandom, &mut NonceHistory::new())
    }

    /// Sign the buffered message, deriving the nonce from `seed` if allowed
    ///
    /// An application seed equal to the one in `history` is refused and the
    /// nonce comes from fresh randomness instead.
    pub fn sign_with(&mut self, seed: &SeedMaterial, history: &mut NonceHistory) -> Result<Vec<u8>> {
        Ok(self.sign_to_signature(seed, history)?.to_der())
    }

    /// As [`SignatureEngine::sign_with`], without DER encoding
    pub fn sign_to_signature(
        &mut self,
        seed: &SeedMaterial,
        history: &mut NonceHistory,
    ) -> Result<DsaSignature> {
        let key = match &self.mode {
            Mode::Sign(key) => key.clone(),
            _ => {
                return Err(Error::InvalidState(
                    "engine not initialized for signing".into(),
                ))
            }
        };
        let digest = self.digest.finish()?;
        let params = key.params();
        let (p, q, g) = (params.p(), params.q(), params.g());
        let z = leftmost_bits(&digest, q.bits());

        let application = seed.words().filter(|words| {
            let repeat = history.is_repeat(words);
            if repeat {
                warn!("application seed repeats the previous nonce seed, using fresh randomness");
            }
            !repeat
        });

        let (mut k, words) = derive_secret(q, &DSA_NONCE_IV, application, &mut self.rng, "nonce");
        if let Some(words) = words {
            history.record(words);
        }

        let r = g.modpow(&k, p) % q;
        let mut k_inv = mod_inverse(&k, q)
            .ok_or_else(|| Error::InvalidParameter("nonce has no inverse modulo q".into()))?;
        let s = (&k_inv * ((&z + key.x() * &r) % q)) % q;
        k.zeroize();
        k_inv.zeroize();
        trace!(subprime_bits = q.bits(), "signed message");

        Ok(DsaSignature::new(r, s))
    }

    /// Check a DER signature over the buffered message
    ///
    /// The digest is consumed before the signature is decoded, so a malformed
    /// signature still leaves the engine ready for the next message.
    ///
    /// # Errors
    ///
    /// `Encoding` for malformed DER, `InvalidSignature` for `r` or `s`
    /// outside `(0, q)`.
    pub fn verify(&mut self, signature: &[u8]) -> Result<bool> {
        let digest = self.verify_digest()?;
        let signature = DsaSignature::from_der(signature)?;
        self.check(&digest, &signature)
    }

    /// As [`SignatureEngine::verify`] for an already decoded signature
    pub fn verify_signature(&mut self, signature: &DsaSignature) -> Result<bool> {
        let digest = self.verify_digest()?;
        self.check(&digest, signature)
    }

    fn verify_digest(&mut self) -> Result<Vec<u8>> {
        if !matches!(self.mode, Mode::Verify(_)) {
            return Err(Error::InvalidState(
                "engine not initialized for verification".into(),
            ));
        }
        self.digest.finish()
    }

    fn check(&self, digest: &[u8], signature: &DsaSignature) -> Result<bool> {
        let key = match &self.mode {
            Mode::Verify(key) => key,
            _ => {
                return Err(Error::InvalidState(
                    "engine not initialized for verification".into(),
                ))
            }
        };
        let params = key.params();
        let (p, q, g) = (params.p(), params.q(), params.g());
        let (r, s) = (signature.r(), signature.s());

        if r.is_zero() || r >= q {
            return Err(Error::InvalidSignature("r is outside (0, q)".into()));
        }
        if s.is_zero() || s >= q {
            return Err(Error::InvalidSignature("s is outside (0, q)".into()));
        }

        let z = leftmost_bits(digest, q.bits());
        let w = mod_inverse(s, q)
            .ok_or_else(|| Error::InvalidSignature("s has no inverse modulo q".into()))?;
        let u1 = (&z * &w) % q;
        let u2 = (r * &w) % q;
        let v = ((g.modpow(&u1, p) * key.y().modpow(&u2, p)) % p) % q;

        let width = (q.bits() + 7) / 8;
        let matches = padded_bytes(&v, width).ct_eq(&padded_bytes(r, width));
        Ok(matches.into())
    }

    /// Discard buffered message data, keeping the key
    pub fn reset(&mut self) {
        self.digest.reset();
    }
}

impl<R: RngCore + CryptoRng> fmt::Debug for SignatureEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::Uninitialized => "uninitialized",
            Mode::Sign(_) => "sign",
            Mode::Verify(_) => "verify",
        };
        f.debug_struct("SignatureEngine")
            .field("variant", &self.variant)
            .field("mode", &mode)
            .finish()
    }
}

/// The leftmost `min(bits, 8 * digest.len())` bits of `digest` as an integer
fn leftmost_bits(digest: &[u8], bits: usize) -> BigUint {
    let z = BigUint::from_bytes_be(digest);
    let outlen = digest.len() * 8;
    if outlen > bits {
        z >> (outlen - bits)
    } else {
        z
    }
}
