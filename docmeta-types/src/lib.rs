//! Core type definitions for docmeta.
//!
//! This crate defines the building blocks shared by every stage of page
//! metadata assembly:
//! - [`Metadata`]: the ordered JSON document passed stage to stage
//! - recursive null removal and top-level key filtering over that document
//! - site path normalization
//! - [`Culture`]: culture-specific date formatting with custom patterns
//!
//! Nothing here knows about pages or docsets; those live in `docmeta-model`.

mod culture;
mod json;
mod path;

pub use culture::Culture;
pub use json::{Metadata, remove_nulls, without_prefixed_keys};
pub use path::{normalize_file, relative_path};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid date format pattern {pattern:?}: {reason}")]
    DateFormat { pattern: String, reason: String },
}
