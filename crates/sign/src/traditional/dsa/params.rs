//! DSA domain parameters
//!
//! [`DomainParameters`] holds `(p, q, g)`. Construction checks the cheap
//! structural relations; [`DomainParameters::validate`] adds the primality
//! and subgroup-order checks.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use fipsdsa_params::traditional::dsa::{WellKnownDsaParams, DSA_1024};

use super::arith::is_probable_prime;
use crate::error::{Error, Result};

/// DSA domain parameters `(p, q, g)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl DomainParameters {
    /// Build parameters, rejecting values where `q >= p`, `q ∤ p - 1` or
    /// `g ∉ (1, p)`
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        if q <= BigUint::one() || q >= p {
            return Err(Error::InvalidParameter(
                "subprime q must satisfy 1 < q < p".into(),
            ));
        }
        if !((&p - BigUint::one()) % &q).is_zero() {
            return Err(Error::InvalidParameter("q does not divide p - 1".into()));
        }
        if g <= BigUint::one() || g >= p {
            return Err(Error::InvalidParameter(
                "generator g must satisfy 1 < g < p".into(),
            ));
        }
        Ok(Self { p, q, g })
    }

    /// Parse hexadecimal `p`, `q` and `g`
    pub fn from_hex(p: &str, q: &str, g: &str) -> Result<Self> {
        Self::new(parse_hex("p", p)?, parse_hex("q", q)?, parse_hex("g", g)?)
    }

    /// One of the published FIPS 186 parameter sets
    pub fn from_well_known(params: &WellKnownDsaParams) -> Result<Self> {
        Self::from_hex(params.p, params.q, params.g)
    }

    /// The published 1024-bit FIPS 186 parameters
    pub fn fips_1024() -> Result<Self> {
        Self::from_well_known(&DSA_1024)
    }

    /// Prime modulus `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Subprime `q`
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Generator `g`
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length `L` of `p`
    pub fn prime_bits(&self) -> usize {
        self.p.bits()
    }

    /// Bit length `N` of `q`
    pub fn subprime_bits(&self) -> usize {
        self.q.bits()
    }

    /// Full check: `p` and `q` prime and `g` of order `q`
    pub fn validate(&self, certainty: u32) -> Result<()> {
        if !is_probable_prime(&self.q, certainty) {
            return Err(Error::InvalidParameter("q is not prime".into()));
        }
        if !is_probable_prime(&self.p, certainty) {
            return Err(Error::InvalidParameter("p is not prime".into()));
        }
        if !self.g.modpow(&self.q, &self.p).is_one() {
            return Err(Error::InvalidParameter(
                "g does not generate a subgroup of order q".into(),
            ));
        }
        Ok(())
    }
}

/// Diffie–Hellman style `(p, g)` pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    p: BigUint,
    g: BigUint,
}

impl DhParameters {
    /// Build a pair with `1 < g < p`
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        if g <= BigUint::one() || g >= p {
            return Err(Error::InvalidParameter(
                "generator g must satisfy 1 < g < p".into(),
            ));
        }
        Ok(Self { p, g })
    }

    /// Prime modulus `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Generator `g`
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length of `p`
    pub fn prime_bits(&self) -> usize {
        self.p.bits()
    }
}

impl From<&DomainParameters> for DhParameters {
    fn from(params: &DomainParameters) -> Self {
        Self {
            p: params.p.clone(),
            g: params.g.clone(),
        }
    }
}

fn parse_hex(name: &str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidParameter(format!("{} is not valid hexadecimal", name)))
}
