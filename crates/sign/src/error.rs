//! Error types for the signature crate

/// Errors that can occur during DSA operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A modulus/subprime combination outside the supported table
    #[error("Unsupported DSA key size: {prime_bits}-bit modulus, subprime {subprime_bits:?}")]
    UnsupportedKeySize {
        prime_bits: usize,
        subprime_bits: Option<usize>,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Raw DSA input that was not exactly one digest long
    #[error("Invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    /// Malformed DER signature
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Signature values outside `(0, q)`
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Engine used before initialization or in the wrong mode
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Parameter generation hit its seed-attempt cap
    #[error("Parameter generation for {prime_bits}-bit primes gave up after {attempts} seeds")]
    ParameterGenerationExhausted { prime_bits: usize, attempts: u64 },

    /// RNG error
    #[error("RNG error: {0}")]
    Rng(String),

    /// Digest layer error
    #[error(transparent)]
    Algorithm(#[from] fipsdsa_algorithms::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Rng(err.to_string())
    }
}

// Convert to api::Error
impl From<Error> for fipsdsa_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::UnsupportedKeySize { .. } => fipsdsa_api::Error::InvalidArgument {
                context: "DSA key size",
                message: err.to_string(),
            },
            Error::InvalidParameter(message) => fipsdsa_api::Error::InvalidArgument {
                context: "DSA",
                message,
            },
            Error::InvalidKey(message) => fipsdsa_api::Error::InvalidKey {
                context: "DSA",
                message,
            },
            Error::InvalidDigestLength { expected, actual } => {
                fipsdsa_api::Error::InvalidDigestLength {
                    context: "raw DSA",
                    expected,
                    actual,
                }
            }
            Error::Encoding(message) => fipsdsa_api::Error::InvalidSignatureEncoding {
                context: "DSA DER parsing",
                message,
            },
            Error::InvalidSignature(message) => fipsdsa_api::Error::InvalidSignature {
                context: "DSA verify",
                message,
            },
            Error::InvalidState(message) => fipsdsa_api::Error::InvalidState {
                context: "DSA signature engine",
                message,
            },
            Error::ParameterGenerationExhausted {
                prime_bits,
                attempts,
            } => fipsdsa_api::Error::ParameterGenerationExhausted {
                prime_bits,
                attempts,
            },
            Error::Rng(message) => fipsdsa_api::Error::RandomGeneration {
                context: "DSA",
                message,
            },
            Error::Algorithm(inner) => inner.into(),
        }
    }
}
