//! DER codec for DSA signatures
//!
//! `SEQUENCE { INTEGER r, INTEGER s }` with minimal definite lengths.
//! Integers are written as unsigned magnitudes with a `0x00` prefix when
//! the top bit is set.

use num_bigint::BigUint;

use fipsdsa_api::{Result as ApiResult, SignatureBytes};

use super::arith::minimal_bytes;
use crate::error::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// A DSA signature `(r, s)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaSignature {
    r: BigUint,
    s: BigUint,
}

impl DsaSignature {
    /// Wrap raw components; range checks against `q` happen at verification
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Component `r`
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Component `s`
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Serialize to DER
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);

        let mut der = Vec::with_capacity(r.len() + s.len() + 4);
        der.push(TAG_SEQUENCE);
        encode_length(r.len() + s.len(), &mut der);
        der.extend_from_slice(&r);
        der.extend_from_slice(&s);
        der
    }

    /// Parse DER, rejecting trailing bytes after the sequence
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut reader = Reader { buf: der, pos: 0 };

        let body_len = reader.header(TAG_SEQUENCE, "SEQUENCE")?;
        if reader.remaining() != body_len {
            return Err(Error::Encoding(format!(
                "SEQUENCE length {} does not match {} remaining bytes",
                body_len,
                reader.remaining()
            )));
        }

        let r = reader.integer("r")?;
        let s = reader.integer("s")?;
        if reader.remaining() != 0 {
            return Err(Error::Encoding(
                "unexpected data after INTEGER s".into(),
            ));
        }

        Ok(Self { r, s })
    }
}

impl SignatureBytes for DsaSignature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_der(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_der()
    }
}

/// Tag, length and content octets of an INTEGER
fn encode_integer(value: &BigUint) -> Vec<u8> {
    let mut magnitude = minimal_bytes(value);
    if magnitude.first().map_or(true, |b| b & 0x80 != 0) {
        // Zero needs one content octet; a set top bit needs a sign octet
        magnitude.insert(0, 0x00);
    }

    let mut out = Vec::with_capacity(magnitude.len() + 4);
    out.push(TAG_INTEGER);
    encode_length(magnitude.len(), &mut out);
    out.extend_from_slice(&magnitude);
    out
}

/// Short form below 128, long form with minimal octets otherwise
fn encode_length(len: usize, out: &mut Vec<u8>) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn byte(&mut self, what: &str) -> Result<u8> {
        let b = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| Error::Encoding(format!("truncated {}", what)))?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::Encoding(format!(
                "{} needs {} bytes, {} available",
                what,
                len,
                self.remaining()
            )));
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Read a tag and length, returning the content length
    fn header(&mut self, tag: u8, what: &str) -> Result<usize> {
        let found = self.byte(what)?;
        if found != tag {
            return Err(Error::Encoding(format!(
                "expected {} tag 0x{:02x}, found 0x{:02x}",
                what, tag, found
            )));
        }

        let first = self.byte(what)?;
        if first & 0x80 == 0 {
            return Ok(first as usize);
        }

        let count = (first & 0x7f) as usize;
        if count == 0 || count > core::mem::size_of::<usize>() {
            return Err(Error::Encoding(format!(
                "unsupported {} length encoding 0x{:02x}",
                what, first
            )));
        }
        let len = self
            .take(count, what)?
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize);
        Ok(len)
    }

    fn integer(&mut self, name: &str) -> Result<BigUint> {
        let len = self.header(TAG_INTEGER, "INTEGER")?;
        if len == 0 {
            return Err(Error::Encoding(format!("INTEGER {} is empty", name)));
        }
        let content = self.take(len, "INTEGER")?;
        Ok(BigUint::from_bytes_be(content))
    }
}
