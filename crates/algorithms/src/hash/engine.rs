//! Shared Merkle–Damgård block engine
//!
//! [`BlockHashEngine`] owns everything SHA-1 and SHA-2 have in common: the
//! 64-byte block buffer, the processed-byte counter, FIPS 180-4 padding and
//! the finalize/resume state machine. The algorithm itself is supplied as a
//! [`CompressionCore`].

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use fipsdsa_params::utils::hash::{SHA_BLOCK_SIZE, SHA_LENGTH_OFFSET};

use super::HashAlgorithm;
use crate::error::{validate, Result};

/// Chaining state plus compression function of one hash algorithm
pub trait CompressionCore: Clone + Zeroize + Send {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;

    /// State holding the algorithm's initial hash value
    fn initial() -> Self;

    /// Fold one 64-byte block into the state
    fn compress(&mut self, block: &[u8; SHA_BLOCK_SIZE]);

    /// Serialize the state words big-endian, truncated to `out.len()` bytes
    fn write_output(&self, out: &mut [u8]);
}

/// Lifecycle of a [`BlockHashEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// Holding the initial value, nothing absorbed
    Clean,
    /// Data absorbed since the last reset
    Dirty,
    /// A digest was produced; the next update or digest starts a new message
    Finalized,
}

/// Block-buffering hash engine generic over its compression core
#[derive(Clone)]
pub struct BlockHashEngine<C: CompressionCore> {
    core: C,
    buffer: [u8; SHA_BLOCK_SIZE],
    buffer_idx: usize,
    bytes_processed: u64,
    status: EngineStatus,
}

impl<C: CompressionCore> Drop for BlockHashEngine<C> {
    fn drop(&mut self) {
        self.core.zeroize();
        self.buffer.zeroize();
    }
}

impl<C: CompressionCore> Default for BlockHashEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CompressionCore> BlockHashEngine<C> {
    /// A clean engine holding the algorithm's IV
    pub fn new() -> Self {
        Self {
            core: C::initial(),
            buffer: [0u8; SHA_BLOCK_SIZE],
            buffer_idx: 0,
            bytes_processed: 0,
            status: EngineStatus::Clean,
        }
    }

    /// Current lifecycle state
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Message bytes absorbed since the last reset (wrapping)
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Digest length in bytes
    pub fn output_size(&self) -> usize {
        C::Algorithm::OUTPUT_SIZE
    }

    /// Absorb `data`
    ///
    /// An empty slice is a no-op and leaves a finalized engine finalized.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if self.status == EngineStatus::Finalized {
            self.reset();
        }
        self.status = EngineStatus::Dirty;
        self.bytes_processed = self.bytes_processed.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    /// Absorb `data[offset..offset + len]`
    pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<()> {
        validate::range(C::Algorithm::ALGORITHM_ID, data.len(), offset, len)?;
        self.update(&data[offset..offset + len]);
        Ok(())
    }

    /// Pad, compress the final block(s) and write the digest into `out`
    ///
    /// Returns the number of bytes written. A finalized engine is reset
    /// first, so calling this twice yields the digest of the empty message.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let output_size = C::Algorithm::OUTPUT_SIZE;
        validate::min_length(C::Algorithm::ALGORITHM_ID, out.len(), output_size)?;

        if self.status == EngineStatus::Finalized {
            self.reset();
        }

        let bit_len = self.bytes_processed.wrapping_mul(8);
        let pad_len = if self.buffer_idx < SHA_LENGTH_OFFSET {
            SHA_LENGTH_OFFSET - self.buffer_idx
        } else {
            SHA_BLOCK_SIZE + SHA_LENGTH_OFFSET - self.buffer_idx
        };

        // 0x80, zeros, then the 64-bit message length; never more than two blocks
        let mut padding = [0u8; 2 * SHA_BLOCK_SIZE];
        padding[0] = 0x80;
        BigEndian::write_u64(&mut padding[pad_len..pad_len + 8], bit_len);
        self.absorb(&padding[..pad_len + 8]);
        debug_assert_eq!(self.buffer_idx, 0);

        self.core.write_output(&mut out[..output_size]);
        self.status = EngineStatus::Finalized;
        Ok(output_size)
    }

    /// Restore the initial state; a clean engine is left untouched
    pub fn reset(&mut self) {
        if self.status == EngineStatus::Clean {
            return;
        }
        self.core = C::initial();
        self.buffer.zeroize();
        self.buffer_idx = 0;
        self.bytes_processed = 0;
        self.status = EngineStatus::Clean;
    }

    fn absorb(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SHA_BLOCK_SIZE {
                self.core.compress(&self.buffer);
                self.buffer_idx = 0;
            }
        }
    }
}
