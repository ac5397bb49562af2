//! Top-level error type aggregating every failure kind named in the design.

use thiserror::Error;

use crate::cache::CacheError;
use crate::fetch::FetchError;
use crate::validation::Error as ValidationErrors;

/// Errors raised while resolving a JSON Reference.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReferenceError {
    /// `resolve()` was called with an empty `$ref`.
    #[error("reference must not be empty")]
    Empty,

    /// The `$ref` string could not be split into a valid `(url, pointer)` pair.
    #[error("invalid reference `{0}`")]
    Invalid(String),

    /// The reference was well-formed but nothing was found at that location.
    #[error("unresolved reference `{0}`")]
    Unresolved(String),
}

/// Errors raised while migrating a document between spec versions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MigrateError {
    /// The loaded or requested spec version is outside `{1.2, 2.0, 3.0.0}`.
    #[error("unsupported spec version `{0}`")]
    UnsupportedVersion(String),

    /// Migration would move a document to a version older than its current one.
    #[error("refusing to downgrade from `{from}` to `{to}`")]
    Downgrade { from: String, to: String },

    /// A structural rule was violated while converting a node (e.g. `$ref` on Items).
    #[error("schema error at `{path}`: {message}")]
    Schema { path: String, message: String },
}

/// The crate-wide error type returned by the `App` façade.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Migrate(#[from] MigrateError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("schema inclusion cycle detected: {0}")]
    CycleDetection(String),

    #[error("{0}")]
    Parse(String),

    /// An `App` operation was called from a lifecycle state that doesn't
    /// support it (e.g. `prepare` before `load`).
    #[error("invalid operation for current app state: {0}")]
    InvalidState(String),
}

impl From<ValidationErrors> for Error {
    fn from(e: ValidationErrors) -> Self {
        Error::Validation(e)
    }
}
