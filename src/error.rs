use thiserror::Error;

/// Errors returned by the hashing and cipher operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Malformed input: bad base64, wrong IV length, unknown algorithm or key size.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Cipher or padding failure while decrypting.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// The OS random generator could not be read.
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),
}

impl CryptoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CryptoError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = CryptoError::invalid("initializationVector parameter length must be 16");
        assert_eq!(
            err.to_string(),
            "invalid argument: initializationVector parameter length must be 16"
        );

        let err = CryptoError::Decryption("unpad error".into());
        assert!(err.to_string().starts_with("decryption failed"));
    }
}
