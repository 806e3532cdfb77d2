//! SHA-2 hash function implementations
//!
//! This module implements SHA-224 and SHA-256 as specified in FIPS PUB 180-4.
//! Both share one compression function; SHA-224 differs only in its initial
//! hash value and in truncating the output to seven words.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use fipsdsa_params::utils::hash::{
    SHA224_IV, SHA224_OUTPUT_SIZE, SHA256_IV, SHA256_K, SHA256_OUTPUT_SIZE, SHA_BLOCK_SIZE,
};

use crate::error::Result;
use crate::hash::engine::{BlockHashEngine, CompressionCore, EngineStatus};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

// Define algorithm marker types for each hash function
/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// Marker type for SHA-224 algorithm
pub enum Sha224Algorithm {}

impl HashAlgorithm for Sha224Algorithm {
    const OUTPUT_SIZE: usize = SHA224_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-224";
}

fn compress256(state: &mut [u32; 8], block: &[u8; SHA_BLOCK_SIZE]) {
    let mut w = [0u32; 64];
    BigEndian::read_u32_into(block, &mut w[..16]);

    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for i in 0..64 {
        let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(SHA256_K[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);

    w.zeroize();
}

fn write_words(state: &[u32; 8], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
    }
}

/// SHA-256 chaining state
#[derive(Clone, Zeroize)]
pub struct Sha256Core {
    state: [u32; 8],
}

impl CompressionCore for Sha256Core {
    type Algorithm = Sha256Algorithm;

    fn initial() -> Self {
        Self { state: SHA256_IV }
    }

    fn compress(&mut self, block: &[u8; SHA_BLOCK_SIZE]) {
        compress256(&mut self.state, block);
    }

    fn write_output(&self, out: &mut [u8]) {
        write_words(&self.state, out);
    }
}

/// SHA-224 chaining state
#[derive(Clone, Zeroize)]
pub struct Sha224Core {
    state: [u32; 8],
}

impl CompressionCore for Sha224Core {
    type Algorithm = Sha224Algorithm;

    fn initial() -> Self {
        Self { state: SHA224_IV }
    }

    fn compress(&mut self, block: &[u8; SHA_BLOCK_SIZE]) {
        compress256(&mut self.state, block);
    }

    fn write_output(&self, out: &mut [u8]) {
        write_words(&self.state, out);
    }
}

/// SHA-256 hash function
#[derive(Clone, Default)]
pub struct Sha256 {
    engine: BlockHashEngine<Sha256Core>,
}

/// SHA-224 hash function
#[derive(Clone, Default)]
pub struct Sha224 {
    engine: BlockHashEngine<Sha224Core>,
}

impl Sha256 {
    /// Creates a new SHA-256 hasher
    pub fn new() -> Self {
        Self {
            engine: BlockHashEngine::new(),
        }
    }

    /// Lifecycle state of the underlying engine
    pub fn status(&self) -> EngineStatus {
        self.engine.status()
    }
}

impl Sha224 {
    /// Creates a new SHA-224 hasher
    pub fn new() -> Self {
        Self {
            engine: BlockHashEngine::new(),
        }
    }

    /// Lifecycle state of the underlying engine
    pub fn status(&self) -> EngineStatus {
        self.engine.status()
    }
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha256::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.engine.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; SHA256_OUTPUT_SIZE];
        self.engine.finalize_into(&mut digest)?;
        Ok(Digest::new(digest))
    }
}

impl HashFunction for Sha224 {
    type Algorithm = Sha224Algorithm;
    type Output = Digest<SHA224_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha224::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.engine.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; SHA224_OUTPUT_SIZE];
        self.engine.finalize_into(&mut digest)?;
        Ok(Digest::new(digest))
    }
}

impl fipsdsa_api::Hasher for Sha256 {
    fn algorithm(&self) -> &'static str {
        Sha256Algorithm::ALGORITHM_ID
    }

    fn output_size(&self) -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        SHA_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
    }

    fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> fipsdsa_api::Result<()> {
        Ok(self.engine.update_range(data, offset, len)?)
    }

    fn digest_into(&mut self, out: &mut [u8]) -> fipsdsa_api::Result<usize> {
        Ok(self.engine.finalize_into(out)?)
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

impl fipsdsa_api::Hasher for Sha224 {
    fn algorithm(&self) -> &'static str {
        Sha224Algorithm::ALGORITHM_ID
    }

    fn output_size(&self) -> usize {
        SHA224_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        SHA_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
    }

    fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> fipsdsa_api::Result<()> {
        Ok(self.engine.update_range(data, offset, len)?)
    }

    fn digest_into(&mut self, out: &mut [u8]) -> fipsdsa_api::Result<usize> {
        Ok(self.engine.finalize_into(out)?)
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

#[cfg(test)]
mod tests;
