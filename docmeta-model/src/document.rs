use serde::{Deserialize, Serialize};

/// The kind of content a document holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Page,
    /// A page that only redirects elsewhere.
    Redirection,
    TableOfContents,
    Resource,
}

/// A source document within a docset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Source path relative to the docset root (e.g., "articles/intro.md").
    pub file_path: String,
    /// Output path including the site base path (e.g., "dotnet/articles/intro.json").
    pub output_path: String,
    pub content_type: ContentType,
}

/// Legacy manifest entry for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyManifestOutput {
    pub page_output: LegacyPageOutput,
}

/// The rendered page artifact of a legacy manifest entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyPageOutput {
    /// e.g. "articles/intro.raw.page.json"
    pub output_path_relative_to_site_base_path: String,
}
