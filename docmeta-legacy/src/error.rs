//! Error types for legacy metadata assembly.

use thiserror::Error;

/// Failures that abort building a page's metadata.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// A date could not be formatted with the docset culture.
    #[error(transparent)]
    Types(#[from] docmeta_types::Error),

    /// The template's schema transform rejected the metadata.
    #[error("schema transform '{schema}' failed: {reason}")]
    Transform { schema: String, reason: String },

    /// The legacy schema post-processor rejected the metadata.
    #[error("legacy schema post-processing failed: {0}")]
    PostProcess(String),
}

/// Result type for legacy metadata operations.
pub type LegacyResult<T> = Result<T, LegacyError>;
