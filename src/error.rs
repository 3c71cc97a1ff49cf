//! Error types for material document mapping.

use crate::types::MaterialKind;

/// Errors that can occur while mapping materials to and from documents.
///
/// All failures are synchronous and fail-fast: either a full record is
/// produced or one of these is returned. There is no retryable class,
/// since the mapper performs no I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The document's `type` tag does not name one of the eight material kinds.
    #[error("unknown material type: {0}")]
    UnknownMaterialType(String),

    /// An attribute was present but had the wrong shape for its schema.
    #[error("invalid {kind} material attributes: {message}")]
    SchemaViolation {
        /// The material kind whose schema was violated.
        kind: MaterialKind,
        /// Explanation of the violation, as reported by the decoder.
        message: String,
    },
}

/// A specialized Result type for material mapping operations.
pub type Result<T> = std::result::Result<T, Error>;
