//! Error type definitions for DSA and digest operations

/// Primary error type for fipsdsa operations
///
/// Every kind is reported synchronously to the caller. The FIPS 186 retry
/// loops (seed redraw, offset increment, nonce rejection) are control flow
/// and never surface here, with the single exception of
/// [`Error::ParameterGenerationExhausted`] when a configured attempt cap runs
/// out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bad buffer offsets/lengths, unsupported key sizes, malformed inputs
    #[error("{context}: invalid argument: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Key material that does not fit the domain parameters or the algorithm
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Raw-mode digest input that was not exactly the expected size
    #[error("{context}: invalid digest length (expected {expected}, got {actual})")]
    InvalidDigestLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// DER decoding failure
    #[error("Invalid signature encoding: {context}: {message}")]
    InvalidSignatureEncoding {
        context: &'static str,
        message: String,
    },

    /// Signature values outside `(0, q)`
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Output buffer shorter than the digest length
    #[error("{context}: buffer too small (need {required}, got {actual})")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    /// Operation not valid in the engine's current state
    #[error("{context}: invalid state: {message}")]
    InvalidState {
        context: &'static str,
        message: String,
    },

    /// The configured seed-attempt cap was reached before parameters were found
    #[error("parameter generation for {prime_bits}-bit primes gave up after {attempts} seed attempts")]
    ParameterGenerationExhausted { prime_bits: usize, attempts: u64 },

    /// The randomness source failed
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for fipsdsa operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`]
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// True for the two outcomes a verifier treats as "signature rejected"
    pub fn is_signature_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignature { .. } | Self::InvalidSignatureEncoding { .. }
        )
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGeneration {
            context: "randomness source",
            message: e.to_string(),
        }
    }
}
