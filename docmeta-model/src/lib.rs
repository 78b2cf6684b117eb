//! Read-only input model for page metadata assembly.
//!
//! Defines everything the metadata builders consume but never write back to:
//! - [`Docset`] / [`DocsetConfig`]: docset identity, URLs and feature flags
//! - [`PageModel`] / [`Contributor`]: one page's authored and derived state
//! - [`Document`] / [`ContentType`]: where a page lives and what kind it is
//! - [`LegacyManifestOutput`]: the page's final output path
//! - [`TocIndex`]: lookup of a page's owning table of contents
//!
//! Every type deserializes from the JSON/TOML produced by the surrounding
//! build pipeline, and every type is `Send + Sync` so one docset and one TOC
//! index can be shared across pages built in parallel.

mod docset;
mod document;
mod page;
mod toc;

pub use docmeta_types::Culture;
pub use docset::{Contribution, Docset, DocsetConfig};
pub use document::{ContentType, Document, LegacyManifestOutput, LegacyPageOutput};
pub use page::{Contributor, PageModel, UNKNOWN_UPDATED_AT};
pub use toc::{TableOfContentsMap, TocIndex};
