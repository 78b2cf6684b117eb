use docmeta_model::PageModel;
use docmeta_types::Metadata;

use crate::LegacyResult;

/// Applies a named template schema transform to a metadata document.
///
/// Implemented by the docset's template engine. Errors are returned to the
/// caller of [`build_raw_metadata`](crate::build_raw_metadata) unchanged.
pub trait MetadataTransform: Send + Sync {
    fn transform_metadata(&self, schema: &str, metadata: Metadata) -> LegacyResult<Metadata>;
}

/// Rewrites assembled metadata into the legacy schema using the page model.
///
/// Runs after [`MetadataTransform`] and still sees the transient
/// `updated_at_date_time` field inside the provenance block.
pub trait LegacySchemaProcessor: Send + Sync {
    fn post_process(&self, metadata: Metadata, page: &PageModel) -> LegacyResult<Metadata>;
}

/// The external stages a raw metadata build hands off to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub transform: &'a dyn MetadataTransform,
    pub post_processor: &'a dyn LegacySchemaProcessor,
}

impl<'a> Collaborators<'a> {
    #[must_use]
    pub fn new(
        transform: &'a dyn MetadataTransform,
        post_processor: &'a dyn LegacySchemaProcessor,
    ) -> Self {
        Self {
            transform,
            post_processor,
        }
    }
}

impl Collaborators<'static> {
    /// Collaborators that return their input unchanged.
    #[must_use]
    pub fn pass_through() -> Self {
        Self::new(&PassThrough, &PassThrough)
    }
}

/// Identity transform and post-processor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl MetadataTransform for PassThrough {
    fn transform_metadata(&self, _schema: &str, metadata: Metadata) -> LegacyResult<Metadata> {
        Ok(metadata)
    }
}

impl LegacySchemaProcessor for PassThrough {
    fn post_process(&self, metadata: Metadata, _page: &PageModel) -> LegacyResult<Metadata> {
        Ok(metadata)
    }
}
