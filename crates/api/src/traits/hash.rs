//! Streaming digest capability
//!
//! [`Hasher`] is object safe so a signature engine can hold whichever digest
//! its variant calls for behind a `Box<dyn Hasher>`.

use crate::Result;

/// Incremental message digest with explicit finalize/resume semantics
///
/// Finalizing is destructive. The next `update` or `digest` after a
/// `digest` implicitly resets the state first, so a hasher is never left
/// carrying data from a previous message.
pub trait Hasher: Send {
    /// Name of the algorithm, e.g. `"SHA-1"`
    fn algorithm(&self) -> &'static str;

    /// Digest length in bytes
    fn output_size(&self) -> usize;

    /// Block length in bytes
    fn block_size(&self) -> usize;

    /// Absorb `data`
    fn update(&mut self, data: &[u8]);

    /// Absorb `data[offset..offset + len]`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the range overflows or exceeds `data`.
    fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<()>;

    /// Finish the digest into `out`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// `BufferTooSmall` if `out` is shorter than [`Hasher::output_size`].
    fn digest_into(&mut self, out: &mut [u8]) -> Result<usize>;

    /// Finish the digest and return it
    fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.output_size()];
        // The buffer is sized from output_size, so this cannot fail.
        let written = self.digest_into(&mut out).unwrap_or(0);
        out.truncate(written);
        out
    }

    /// Restore the initial state
    fn reset(&mut self);
}
