//! Legacy page metadata assembly.
//!
//! Four entry points turn a page's inputs into the metadata documents the
//! rendering pipeline consumes:
//! - [`build_common_metadata`]: docset identity fields, merged into any document
//! - [`build_raw_metadata`]: the full document for legacy static rendering
//! - [`project_output_metadata`]: the published subset for dynamic rendering
//! - [`build_redirection_metadata`]: locale and target for redirect-only pages
//!
//! Data flows one way: authored metadata, then common fields, then the ordered
//! raw-metadata steps, then the injected [`MetadataTransform`] and
//! [`LegacySchemaProcessor`], then cleanup, then output projection. Every
//! function takes its inputs by shared reference or by value and returns a new
//! document, so pages can be built concurrently against one shared [`Docset`]
//! and TOC index.
//!
//! [`Docset`]: docmeta_model::Docset

mod collaborator;
mod common;
mod contributor;
mod error;
mod output;
mod raw;
mod redirection;

pub use collaborator::{Collaborators, LegacySchemaProcessor, MetadataTransform, PassThrough};
pub use common::build_common_metadata;
pub use contributor::project_contributor;
pub use error::{LegacyError, LegacyResult};
pub use output::{RESERVED_PREFIXES, project_output_metadata};
pub use raw::{
    CONCEPTUAL_SCHEMA, PROVENANCE_KEY, TRANSIENT_DATETIME_KEY, build_raw_metadata,
    remove_transient_datetime,
};
pub use redirection::build_redirection_metadata;
