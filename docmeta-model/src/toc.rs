use std::collections::HashMap;

use docmeta_types::{normalize_file, relative_path};
use serde::{Deserialize, Serialize};

use crate::Document;

/// Resolves the table of contents that owns a document.
///
/// Implemented by the build pipeline's TOC index; the metadata builders only
/// ever read from it.
pub trait TocIndex: Send + Sync {
    /// Path of the owning TOC relative to the document's output directory,
    /// or `None` when no TOC references the document.
    fn find_toc_relative_path(&self, document: &Document) -> Option<String>;
}

/// A resolved document-to-TOC table.
///
/// Keys are document source paths, values are the owning TOC's site path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableOfContentsMap {
    entries: HashMap<String, String>,
}

impl TableOfContentsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `toc_site_path` as the owner of `document_path`.
    pub fn insert(&mut self, document_path: &str, toc_site_path: &str) {
        self.entries
            .insert(normalize_file(document_path), normalize_file(toc_site_path));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TableOfContentsMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (document_path, toc_site_path) in iter {
            map.insert(document_path, toc_site_path);
        }
        map
    }
}

impl TocIndex for TableOfContentsMap {
    fn find_toc_relative_path(&self, document: &Document) -> Option<String> {
        let toc = self.entries.get(&normalize_file(&document.file_path))?;
        let output = normalize_file(&document.output_path);
        let directory = output.rsplit_once('/').map_or("", |(dir, _)| dir);
        Some(relative_path(directory, &normalize_file(toc)))
    }
}
