use chrono::{DateTime, Utc};
use docmeta_types::Metadata;
use serde::{Deserialize, Serialize};

/// Unix seconds of `0001-01-01T00:00:00Z`, the default timestamp upstream
/// tools write when a page's update time is unknown.
pub const UNKNOWN_UPDATED_AT: i64 = -62_135_596_800;

/// A git contributor to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    /// Login name.
    pub name: String,
    /// Preferred over `name` when non-empty.
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub profile_url: Option<String>,
}

/// Authored and derived state of one documentation page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageModel {
    pub title: Option<String>,
    pub raw_title: Option<String>,
    pub word_count: u64,
    pub document_id: Option<String>,
    pub document_version_independent_id: Option<String>,
    /// Page locale, which may differ from the docset locale for fallback pages.
    pub locale: String,
    pub redirect_url: Option<String>,
    /// Explicit TOC-relative path; takes precedence over TOC lookup.
    pub toc_rel: Option<String>,
    pub content_git_url: Option<String>,
    pub gitcommit: Option<String>,
    pub original_content_git_url: Option<String>,
    pub author: Option<Contributor>,
    pub contributors: Option<Vec<Contributor>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Authored front-matter.
    pub metadata: Option<Metadata>,
}

impl PageModel {
    /// The update timestamp, or `None` when it is absent or the unknown sentinel.
    #[must_use]
    pub fn known_updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .filter(|at| at.timestamp() != UNKNOWN_UPDATED_AT)
    }

    /// The redirect target when one is set and non-empty.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        non_empty(self.redirect_url.as_deref())
    }

    /// The author's name when an author is set and the name is non-empty.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| non_empty(Some(author.name.as_str())))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
