//! Error handling for digest primitives

use std::borrow::Cow;

use fipsdsa_api::Error as CoreError;

/// The error type for digest primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An `offset`/`len` pair that does not fit the input buffer
    #[error("Invalid range for {context}: {offset}+{len} exceeds {buf_len} bytes")]
    Range {
        /// Context where the range was checked
        context: &'static str,
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        len: usize,
        /// Length of the buffer the range indexes
        buf_len: usize,
    },

    /// Output buffer shorter than the digest
    #[error("Output buffer too small for {context}: need {required}, got {actual}")]
    BufferTooSmall {
        /// Context where the output was written
        context: &'static str,
        /// Bytes the digest needs
        required: usize,
        /// Bytes the caller provided
        actual: usize,
    },

    /// A digest name that does not map to a supported algorithm
    #[error("Unsupported digest algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for digest primitives operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidArgument {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidArgument {
                context,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::Range {
                context,
                offset,
                len,
                buf_len,
            } => CoreError::InvalidArgument {
                context,
                message: format!(
                    "range {}+{} out of bounds for buffer of {} bytes",
                    offset, len, buf_len
                ),
            },
            Error::BufferTooSmall {
                context,
                required,
                actual,
            } => CoreError::BufferTooSmall {
                context,
                required,
                actual,
            },
            Error::UnknownAlgorithm(name) => CoreError::InvalidArgument {
                context: "digest algorithm",
                message: format!("unsupported digest algorithm {:?}", name),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
