use docmeta_model::{Docset, PageModel};
use docmeta_types::{Metadata, remove_nulls};
use serde_json::{Value, json};

/// Builds the minimal metadata for a redirect-only page.
///
/// Holds the redirect target and the docset locale. A page without a
/// redirect target yields just the locale.
#[must_use]
pub fn build_redirection_metadata(docset: &Docset, page: &PageModel) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("redirect_url".into(), json!(page.redirect_target()));
    metadata.insert("locale".into(), Value::from(docset.config.locale.as_str()));
    remove_nulls(metadata)
}
