//! DSA key types and key-pair generation
//!
//! The private key `x` lies in `(0, q)` and the public key is
//! `y = g^x mod p`. Both keys hold a shared reference to the domain
//! parameters they belong to.

use core::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use fipsdsa_params::traditional::dsa::DSA_KEYGEN_IV;

use super::arith::minimal_bytes;
use super::cache::ParameterCache;
use super::params::DomainParameters;
use super::seed::{derive_secret, SeedMaterial};
use crate::error::{Error, Result};

/// DSA private key `x`
///
/// The scalar is never exposed as bytes. It is wiped when the key is dropped.
#[derive(Clone)]
pub struct SigningKey {
    x: BigUint,
    params: Arc<DomainParameters>,
}

impl SigningKey {
    /// Wrap a private scalar, which must satisfy `0 < x < q`
    pub fn new(x: BigUint, params: impl Into<Arc<DomainParameters>>) -> Result<Self> {
        let params = params.into();
        if x.is_zero() || &x >= params.q() {
            return Err(Error::InvalidKey("private key must satisfy 0 < x < q".into()));
        }
        Ok(Self { x, params })
    }

    /// Domain parameters this key belongs to
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }

    /// Compute `y = g^x mod p`
    pub fn verifying_key(&self) -> VerifyingKey {
        let y = self.params.g().modpow(&self.x, self.params.p());
        VerifyingKey {
            y,
            params: Arc::clone(&self.params),
        }
    }

    pub(crate) fn x(&self) -> &BigUint {
        &self.x
    }
}

impl Zeroize for SigningKey {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("x", &"<redacted>")
            .field("prime_bits", &self.params.prime_bits())
            .finish()
    }
}

/// DSA public key `y`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    y: BigUint,
    params: Arc<DomainParameters>,
}

impl VerifyingKey {
    /// Wrap a public value, which must satisfy `1 < y < p`
    pub fn new(y: BigUint, params: impl Into<Arc<DomainParameters>>) -> Result<Self> {
        let params = params.into();
        if y <= BigUint::one() || &y >= params.p() {
            return Err(Error::InvalidKey("public key must satisfy 1 < y < p".into()));
        }
        Ok(Self { y, params })
    }

    /// Decode an unsigned big-endian `y`
    ///
    /// A leading sign byte of `0x00` is accepted.
    pub fn from_bytes(bytes: &[u8], params: impl Into<Arc<DomainParameters>>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidKey("empty public key".into()));
        }
        Self::new(BigUint::from_bytes_be(bytes), params)
    }

    /// Unsigned big-endian `y` without leading zeros
    pub fn to_bytes(&self) -> Vec<u8> {
        minimal_bytes(&self.y)
    }

    /// Public value `y`
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Domain parameters this key belongs to
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }
}

/// Matching private and public keys
#[derive(Clone, Debug)]
pub struct KeyPair {
    signing: SigningKey,
    verifying: VerifyingKey,
}

impl KeyPair {
    /// Private half
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing
    }

    /// Public half
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying
    }

    /// Shared domain parameters
    pub fn params(&self) -> &Arc<DomainParameters> {
        self.signing.params()
    }

    /// Split into `(signing, verifying)`
    pub fn into_parts(self) -> (SigningKey, VerifyingKey) {
        (self.signing, self.verifying)
    }
}

/// Generates key pairs over fixed domain parameters
#[derive(Clone, Debug)]
pub struct KeyPairGenerator {
    params: Arc<DomainParameters>,
}

impl KeyPairGenerator {
    /// Generator over explicit parameters
    pub fn new(params: impl Into<Arc<DomainParameters>>) -> Self {
        Self {
            params: params.into(),
        }
    }

    /// Generator over cached parameters for `prime_bits`, generating them
    /// on a miss
    pub fn for_key_size<R: RngCore + CryptoRng>(
        cache: &ParameterCache,
        prime_bits: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self::new(cache.get_or_generate(prime_bits, rng)?))
    }

    /// Parameters keys are generated over
    pub fn params(&self) -> &Arc<DomainParameters> {
        &self.params
    }

    /// Generate a key pair from fresh randomness
    pub fn generate<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        self.generate_with(&SeedMaterial::FreshRandom, rng)
    }

    /// Generate a key pair, deriving `x` from `seed` when one is given
    ///
    /// With a 160-bit subprime an application seed makes `x` deterministic
    /// unless G reduces it to zero. Wider subprimes always use `rng`.
    pub fn generate_with<R: RngCore + CryptoRng>(
        &self,
        seed: &SeedMaterial,
        rng: &mut R,
    ) -> Result<KeyPair> {
        let (x, mut words) =
            derive_secret(self.params.q(), &DSA_KEYGEN_IV, seed.words(), rng, "private key");
        words.zeroize();

        let signing = SigningKey {
            x,
            params: Arc::clone(&self.params),
        };
        let verifying = signing.verifying_key();
        debug!(prime_bits = self.params.prime_bits(), "generated DSA key pair");

        Ok(KeyPair { signing, verifying })
    }
}
