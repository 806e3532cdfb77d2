//! SHA-1 hash function
//!
//! This module implements the SHA-1 hash function as specified in FIPS 180-4.
//! SHA-1 is considered broken for collision resistance; it is kept because
//! legacy DSA (`N = 160`) and the FIPS 186 G function are defined on it.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use fipsdsa_params::utils::hash::{SHA1_IV, SHA1_K, SHA1_OUTPUT_SIZE, SHA_BLOCK_SIZE};

use crate::error::Result;
use crate::hash::engine::{BlockHashEngine, CompressionCore, EngineStatus};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// Run one SHA-1 compression over a caller-supplied state
///
/// `block` is the message block already split into big-endian words. The
/// working variables are added back into `state` as in FIPS 180-4 6.1.2.
pub fn compress_words(state: &mut [u32; 5], block: &[u32; 16]) {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(block);
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | ((!b) & d), SHA1_K[0]),
            20..=39 => (b ^ c ^ d, SHA1_K[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), SHA1_K[2]),
            _ => (b ^ c ^ d, SHA1_K[3]),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);

    w.zeroize();
}

/// SHA-1 chaining state
#[derive(Clone, Zeroize)]
pub struct Sha1Core {
    h: [u32; 5],
}

impl CompressionCore for Sha1Core {
    type Algorithm = Sha1Algorithm;

    fn initial() -> Self {
        Self { h: SHA1_IV }
    }

    fn compress(&mut self, block: &[u8; SHA_BLOCK_SIZE]) {
        let mut words = [0u32; 16];
        BigEndian::read_u32_into(block, &mut words);
        compress_words(&mut self.h, &words);
        words.zeroize();
    }

    fn write_output(&self, out: &mut [u8]) {
        for (chunk, word) in out.chunks_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
    }
}

/// SHA-1 hash function
#[derive(Clone, Default)]
pub struct Sha1 {
    engine: BlockHashEngine<Sha1Core>,
}

impl Sha1 {
    /// Creates a new SHA-1 hasher
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

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1::new()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.engine.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut digest = [0u8; SHA1_OUTPUT_SIZE];
        self.engine.finalize_into(&mut digest)?;
        Ok(Digest::new(digest))
    }
}

impl fipsdsa_api::Hasher for Sha1 {
    fn algorithm(&self) -> &'static str {
        Sha1Algorithm::ALGORITHM_ID
    }

    fn output_size(&self) -> usize {
        SHA1_OUTPUT_SIZE
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
