use thiserror::Error;

/// Result type specialized for Dilithium operations.
pub type DilithiumResult<T> = std::result::Result<T, DilithiumError>;

/// Errors surfaced by the byte-level entry points.
///
/// Signature problems never show up here: `verify` reports every malformed
/// or invalid signature as a plain `false`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DilithiumError {
    #[error("unsupported Dilithium security level {0}")]
    UnsupportedLevel(usize),
    #[error("parameter set violates the Dilithium structural relations")]
    InvalidParameters,
    #[error("public key must be {expected} bytes, got {actual}")]
    PublicKeyLength { expected: usize, actual: usize },
    #[error("secret key must be {expected} bytes, got {actual}")]
    SecretKeyLength { expected: usize, actual: usize },
    #[error("signature must be {expected} bytes, got {actual}")]
    SignatureLength { expected: usize, actual: usize },
}
