//! Shared cache of domain parameters
//!
//! Generating parameters is expensive, so sizes are generated once and
//! shared as `Arc`s. The cache is an ordinary value; callers decide its
//! lifetime and how widely it is shared.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::{CryptoRng, RngCore};
use tracing::{info, warn};

use fipsdsa_params::traditional::dsa::WELL_KNOWN_DSA_PARAMS;

use super::paramgen::{GeneratorConfig, KeySize, ParameterGenerator};
use super::params::{DhParameters, DomainParameters};
use crate::error::Result;

/// Thread-safe store of DSA and Diffie–Hellman parameters keyed by size
///
/// There is no single-flight: two threads asking for the same missing size
/// may both generate. The first insert wins and both receive it.
pub struct ParameterCache {
    config: GeneratorConfig,
    dsa: RwLock<HashMap<KeySize, Arc<DomainParameters>>>,
    dh: RwLock<HashMap<usize, Arc<DhParameters>>>,
}

impl Default for ParameterCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterCache {
    /// A cache holding the published 512, 768 and 1024-bit parameters
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Pre-populated cache whose generator uses `config`
    pub fn with_config(config: GeneratorConfig) -> Self {
        let mut dsa = HashMap::new();
        let mut dh = HashMap::new();
        for wk in WELL_KNOWN_DSA_PARAMS.iter() {
            let size = KeySize {
                prime_bits: wk.prime_bits,
                subprime_bits: fipsdsa_params::traditional::dsa::DSA_LEGACY_SUBPRIME_BITS,
            };
            match DomainParameters::from_well_known(wk) {
                Ok(params) => {
                    dh.insert(wk.prime_bits, Arc::new(DhParameters::from(&params)));
                    dsa.insert(size, Arc::new(params));
                }
                Err(e) => warn!(prime_bits = wk.prime_bits, error = %e, "skipping well-known parameters"),
            }
        }
        Self {
            config,
            dsa: RwLock::new(dsa),
            dh: RwLock::new(dh),
        }
    }

    /// An empty cache
    pub fn empty(config: GeneratorConfig) -> Self {
        Self {
            config,
            dsa: RwLock::new(HashMap::new()),
            dh: RwLock::new(HashMap::new()),
        }
    }

    /// Generator configuration used for misses
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Cached DSA parameters for a modulus length, without generating
    pub fn get(&self, prime_bits: usize) -> Option<Arc<DomainParameters>> {
        let size = KeySize::for_prime_bits(prime_bits).ok()?;
        self.get_sized(size)
    }

    /// Cached DSA parameters for an explicit size, without generating
    pub fn get_sized(&self, size: KeySize) -> Option<Arc<DomainParameters>> {
        self.dsa.read().get(&size).cloned()
    }

    /// Cached DH parameters for a modulus length, without generating
    pub fn get_dh(&self, prime_bits: usize) -> Option<Arc<DhParameters>> {
        self.dh.read().get(&prime_bits).cloned()
    }

    /// DSA parameters for a modulus length with its default subprime
    ///
    /// Generates and inserts on a miss.
    pub fn get_or_generate<R: RngCore + CryptoRng>(
        &self,
        prime_bits: usize,
        rng: &mut R,
    ) -> Result<Arc<DomainParameters>> {
        self.get_or_generate_sized(KeySize::for_prime_bits(prime_bits)?, rng)
    }

    /// DSA parameters for an explicit size, generating on a miss
    pub fn get_or_generate_sized<R: RngCore + CryptoRng>(
        &self,
        size: KeySize,
        rng: &mut R,
    ) -> Result<Arc<DomainParameters>> {
        if let Some(params) = self.get_sized(size) {
            return Ok(params);
        }

        info!(
            prime_bits = size.prime_bits,
            subprime_bits = size.subprime_bits,
            "generating DSA parameters for cache"
        );
        // Generation runs without holding the lock
        let generated = ParameterGenerator::with_size(size)
            .with_config(self.config)
            .generate(rng)?;

        let mut map = self.dsa.write();
        Ok(map
            .entry(size)
            .or_insert_with(|| Arc::new(generated))
            .clone())
    }

    /// DH `(p, g)` for a modulus length, generating on a miss
    ///
    /// Misses are filled by DSA generation; the subprime is discarded.
    pub fn get_or_generate_dh<R: RngCore + CryptoRng>(
        &self,
        prime_bits: usize,
        rng: &mut R,
    ) -> Result<Arc<DhParameters>> {
        if let Some(params) = self.get_dh(prime_bits) {
            return Ok(params);
        }

        let size = KeySize::for_prime_bits(prime_bits)?;
        info!(prime_bits, "generating DH parameters for cache");
        let generated = ParameterGenerator::with_size(size)
            .with_config(self.config)
            .generate(rng)?;
        let dh = DhParameters::from(&generated);

        let mut map = self.dh.write();
        Ok(map.entry(prime_bits).or_insert_with(|| Arc::new(dh)).clone())
    }
}
