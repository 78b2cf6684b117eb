use docmeta_model::Contributor;
use serde_json::{Value, json};

/// Projects a contributor into its metadata shape.
///
/// Missing ids and profile URLs are written as null and pruned downstream.
#[must_use]
pub fn project_contributor(contributor: &Contributor) -> Value {
    let display_name = contributor
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&contributor.name);

    json!({
        "display_name": display_name,
        "id": contributor.id,
        "profile_url": contributor.profile_url,
    })
}
