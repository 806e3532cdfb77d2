//! Domain-parameter generation
//!
//! Implements FIPS 186-3 Appendix A.1.1.2: a seeded search for `q` followed
//! by a counter-driven search for `p`, and the unverifiable generator
//! construction of A.2.1 for `g`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use fipsdsa_algorithms::DigestAlgorithm;
use fipsdsa_params::traditional::dsa::{
    DSA_2048_224, DSA_2048_256, DSA_CERTAINTY_2048, DSA_CERTAINTY_LEGACY,
    DSA_DEFAULT_MAX_SEED_ATTEMPTS, DSA_LEGACY_SUBPRIME_BITS, DSA_MAX_LEGACY_PRIME_BITS,
    DSA_MIN_PRIME_BITS, DSA_PRIME_BITS_STEP,
};

use super::arith::{is_probable_prime, minimal_bytes};
use super::params::DomainParameters;
use crate::error::{Error, Result};

/// Run-time knobs for [`ParameterGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cap on seed draws; `None` searches until parameters are found
    pub max_seed_attempts: Option<u64>,
    /// Primality certainty to use instead of the size table's
    pub certainty_override: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_seed_attempts: Some(DSA_DEFAULT_MAX_SEED_ATTEMPTS),
            certainty_override: None,
        }
    }
}

impl GeneratorConfig {
    /// No cap on seed draws
    pub fn unbounded() -> Self {
        Self {
            max_seed_attempts: None,
            ..Self::default()
        }
    }

    /// Replace the seed-attempt cap
    pub fn with_max_seed_attempts(mut self, attempts: Option<u64>) -> Self {
        self.max_seed_attempts = attempts;
        self
    }

    /// Replace the primality certainty
    pub fn with_certainty(mut self, certainty: u32) -> Self {
        self.certainty_override = Some(certainty);
        self
    }
}

/// A supported `(L, N)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySize {
    /// Modulus length `L`
    pub prime_bits: usize,
    /// Subprime length `N`
    pub subprime_bits: usize,
}

impl KeySize {
    /// Validate an explicit `(L, N)` pair
    ///
    /// Accepted: `L` in 512..=1024 in steps of 64 with `N = 160`, and
    /// `L = 2048` with `N` of 224 or 256.
    pub fn new(prime_bits: usize, subprime_bits: usize) -> Result<Self> {
        let legacy = (DSA_MIN_PRIME_BITS..=DSA_MAX_LEGACY_PRIME_BITS).contains(&prime_bits)
            && prime_bits % DSA_PRIME_BITS_STEP == 0
            && subprime_bits == DSA_LEGACY_SUBPRIME_BITS;
        let wide =
            (prime_bits, subprime_bits) == DSA_2048_224 || (prime_bits, subprime_bits) == DSA_2048_256;
        if !(legacy || wide) {
            return Err(Error::UnsupportedKeySize {
                prime_bits,
                subprime_bits: Some(subprime_bits),
            });
        }
        Ok(Self {
            prime_bits,
            subprime_bits,
        })
    }

    /// The default subprime for a modulus length
    pub fn for_prime_bits(prime_bits: usize) -> Result<Self> {
        let subprime_bits = if prime_bits == DSA_2048_224.0 {
            DSA_2048_224.1
        } else {
            DSA_LEGACY_SUBPRIME_BITS
        };
        Self::new(prime_bits, subprime_bits).map_err(|_| Error::UnsupportedKeySize {
            prime_bits,
            subprime_bits: None,
        })
    }

    /// Primality certainty for this size
    pub fn certainty(&self) -> u32 {
        if self.prime_bits <= DSA_MAX_LEGACY_PRIME_BITS {
            DSA_CERTAINTY_LEGACY
        } else {
            DSA_CERTAINTY_2048
        }
    }

    /// Digest whose output length equals `N`
    pub fn digest(&self) -> Result<DigestAlgorithm> {
        Ok(DigestAlgorithm::for_subprime_bits(self.subprime_bits)?)
    }
}

/// Output of the `p`/`q` search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrimes {
    /// Prime modulus
    pub p: BigUint,
    /// Prime subprime
    pub q: BigUint,
    /// `domain_parameter_seed` the primes were derived from
    pub seed: Vec<u8>,
    /// Counter value at which `p` was accepted
    pub counter: usize,
}

/// FIPS 186-3 parameter generator for one key size
#[derive(Debug, Clone)]
pub struct ParameterGenerator {
    size: KeySize,
    config: GeneratorConfig,
}

impl ParameterGenerator {
    /// Generator for a modulus length with its default subprime
    pub fn new(prime_bits: usize) -> Result<Self> {
        Ok(Self::with_size(KeySize::for_prime_bits(prime_bits)?))
    }

    /// Generator for an explicit size
    pub fn with_size(size: KeySize) -> Self {
        Self {
            size,
            config: GeneratorConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Target size
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Certainty used for every primality test
    pub fn certainty(&self) -> u32 {
        self.config
            .certainty_override
            .unwrap_or_else(|| self.size.certainty())
    }

    /// Generate a complete `(p, q, g)` triple
    pub fn generate<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<DomainParameters> {
        let primes = self.generate_primes(rng)?;
        let g = generate_g(&primes.p, &primes.q)?;
        DomainParameters::new(primes.p, primes.q, g)
    }

    /// Draw seeds until one yields primes `p` and `q`
    pub fn generate_primes<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<GeneratedPrimes> {
        let mut seed = vec![0u8; self.size.subprime_bits / 8];
        let mut attempts = 0u64;
        loop {
            if let Some(max) = self.config.max_seed_attempts {
                if attempts >= max {
                    return Err(Error::ParameterGenerationExhausted {
                        prime_bits: self.size.prime_bits,
                        attempts,
                    });
                }
            }
            attempts += 1;

            rng.try_fill_bytes(&mut seed)?;
            if let Some(primes) = self.generate_with_seed(&seed)? {
                debug!(
                    prime_bits = self.size.prime_bits,
                    subprime_bits = self.size.subprime_bits,
                    attempts,
                    counter = primes.counter,
                    "found DSA primes"
                );
                return Ok(primes);
            }
            trace!(attempts, "seed rejected, redrawing");
        }
    }

    /// Run the search for one `domain_parameter_seed`
    ///
    /// Returns `Ok(None)` when `q` is composite or the counter runs out.
    pub fn generate_with_seed(&self, seed: &[u8]) -> Result<Option<GeneratedPrimes>> {
        let KeySize {
            prime_bits: l,
            subprime_bits: n_bits,
        } = self.size;
        if seed.len() * 8 < n_bits {
            return Err(Error::InvalidParameter(format!(
                "seed must be at least {} bits, got {}",
                n_bits,
                seed.len() * 8
            )));
        }

        let digest = self.size.digest()?;
        let certainty = self.certainty();
        let outlen = digest.output_bits();
        let seedlen = seed.len() * 8;

        // q = 2^(N-1) + U + 1 - (U mod 2), U = H(seed) mod 2^(N-1)
        let top = BigUint::one() << (n_bits - 1);
        let u = BigUint::from_bytes_be(&digest.digest(seed)) % &top;
        let odd = (&u & BigUint::one()).is_one();
        let mut q = &top + &u + BigUint::one();
        if odd {
            q -= BigUint::one();
        }
        if !is_probable_prime(&q, certainty) {
            return Ok(None);
        }
        trace!(subprime_bits = n_bits, "found q");

        let n = (l - 1) / outlen;
        let b = (l - 1) % outlen;
        let seed_int = BigUint::from_bytes_be(seed);
        let seed_modulus = BigUint::one() << seedlen;
        let low_mask = (BigUint::one() << b) - BigUint::one();
        let p_min = BigUint::one() << (l - 1);
        let two_q = &q << 1usize;

        let mut offset = 1usize;
        for counter in 0..4 * l {
            let mut w = BigUint::zero();
            for j in 0..=n {
                let input = (&seed_int + BigUint::from((offset + j) as u64)) % &seed_modulus;
                let mut v = BigUint::from_bytes_be(&digest.digest(&minimal_bytes(&input)));
                if j == n {
                    v &= &low_mask;
                }
                w += v << (j * outlen);
            }

            let x = w + &p_min;
            // p = X - (c - 1), ordered so a zero remainder cannot underflow
            let c = &x % &two_q;
            let p = x + BigUint::one() - c;
            if p >= p_min && is_probable_prime(&p, certainty) {
                return Ok(Some(GeneratedPrimes {
                    p,
                    q,
                    seed: seed.to_vec(),
                    counter,
                }));
            }
            offset += n + 1;
        }

        Ok(None)
    }
}

/// Smallest `h = 1, 2, …` with `g = h^((p-1)/q) mod p >= 2`
pub fn generate_g(p: &BigUint, q: &BigUint) -> Result<BigUint> {
    let p_minus_1 = p - BigUint::one();
    if q.is_zero() || !(&p_minus_1 % q).is_zero() {
        return Err(Error::InvalidParameter("q does not divide p - 1".into()));
    }
    let e = &p_minus_1 / q;

    let mut h = BigUint::one();
    while h < p_minus_1 {
        let g = h.modpow(&e, p);
        if g > BigUint::one() {
            return Ok(g);
        }
        h += BigUint::one();
    }
    Err(Error::InvalidParameter("no generator of order q exists".into()))
}
