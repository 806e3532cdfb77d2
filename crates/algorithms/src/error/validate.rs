//! Validation utilities for digest primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an output buffer holds at least `required` bytes
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall {
            context,
            required,
            actual,
        });
    }
    Ok(())
}

/// Validate that `offset..offset + len` lies inside a buffer of `buf_len` bytes
#[inline(always)]
pub fn range(context: &'static str, buf_len: usize, offset: usize, len: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(Error::Range {
            context,
            offset,
            len,
            buf_len,
        }),
    }
}
