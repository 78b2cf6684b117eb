use docmeta_types::Culture;
use serde::{Deserialize, Serialize};

/// Docset-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsetConfig {
    /// Product identifier (e.g., "MSDN").
    pub product: String,
    /// Docset name, unique within the product.
    pub name: String,
    /// Docset locale (e.g., "en-us").
    pub locale: String,
    /// Site origin without a trailing slash (e.g., "https://docs.example.com").
    pub base_url: String,
    /// Path of the docset under the site root (e.g., "dotnet").
    pub site_base_path: String,
    pub contribution: Contribution,
    /// Whether pages carry a PDF URL template.
    pub need_generate_pdf_url_template: bool,
}

impl DocsetConfig {
    /// The `{product}.{name}` identifier used for depots and PDF stores.
    #[must_use]
    pub fn depot_name(&self) -> String {
        format!("{}.{}", self.product, self.name)
    }
}

/// Contribution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contribution {
    /// Whether pages show an edit link to the public.
    pub show_edit: bool,
}

/// A docset: its configuration plus the culture used to format dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Docset {
    pub config: DocsetConfig,
    #[serde(default)]
    pub culture: Culture,
}

impl Docset {
    #[must_use]
    pub fn new(config: DocsetConfig, culture: Culture) -> Self {
        Self { config, culture }
    }
}
