use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors returned by matrix construction.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("matrix of {rows}x{cols} cannot be built from {actual} polynomials")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        actual: usize,
    },
}
