use docmeta_model::Docset;
use docmeta_types::{Metadata, remove_nulls};
use serde_json::{Value, json};

const SITE_NAME: &str = "Docs";

/// Stamps docset-wide identity fields onto `metadata`.
///
/// Existing values under the same keys are overwritten. The result has no
/// nulls at any depth.
#[must_use]
pub fn build_common_metadata(mut metadata: Metadata, docset: &Docset) -> Metadata {
    let config = &docset.config;

    metadata.insert("depot_name".into(), Value::from(config.depot_name()));

    metadata.insert("search.ms_docsetname".into(), Value::from(config.name.as_str()));
    metadata.insert("search.ms_product".into(), Value::from(config.product.as_str()));
    metadata.insert("search.ms_sitename".into(), Value::from(SITE_NAME));

    metadata.insert("locale".into(), Value::from(config.locale.as_str()));
    metadata.insert("site_name".into(), Value::from(SITE_NAME));
    metadata.insert("version".into(), Value::from(0));

    metadata.insert(
        "__global".into(),
        json!({ "tutorial_allContributors": "all {0} contributors" }),
    );

    remove_nulls(metadata)
}
