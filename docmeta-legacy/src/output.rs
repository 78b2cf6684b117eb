use docmeta_types::{Metadata, without_prefixed_keys};
use serde_json::Value;

/// Top-level key prefixes that never leave the build.
pub const RESERVED_PREFIXES: [&str; 2] = ["_op_", "fileRelativePath"];

/// Projects raw metadata into the document published for dynamic rendering.
///
/// Top-level keys starting with a [`RESERVED_PREFIXES`] entry are dropped;
/// nested values are carried over untouched.
#[must_use]
pub fn project_output_metadata(raw: &Metadata) -> Metadata {
    let mut output = without_prefixed_keys(raw, &RESERVED_PREFIXES);
    output.insert("is_dynamic_rendering".into(), Value::Bool(true));
    output
}
