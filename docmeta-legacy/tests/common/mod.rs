//! Shared fixtures for legacy metadata tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use docmeta_legacy::{Collaborators, LegacyResult, build_raw_metadata};
use docmeta_model::{
    Contribution, ContentType, Contributor, Culture, Docset, DocsetConfig, Document,
    LegacyManifestOutput, LegacyPageOutput, PageModel, TableOfContentsMap,
};
use docmeta_types::Metadata;
use serde_json::{Value, json};

pub const CONTENT: &str = "<p>Hello</p>";

/// Unwraps a `json!` object literal into a metadata document.
pub fn doc(value: Value) -> Metadata {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub fn docset() -> Docset {
    Docset::new(
        DocsetConfig {
            product: "P".into(),
            name: "D".into(),
            locale: "en-us".into(),
            base_url: "https://docs.example.com".into(),
            site_base_path: "dotnet".into(),
            contribution: Contribution { show_edit: true },
            need_generate_pdf_url_template: false,
        },
        Culture::en_us(),
    )
}

/// A page with every optional input populated.
pub fn page() -> PageModel {
    PageModel {
        title: Some("Intro".into()),
        raw_title: Some("<h1>Intro</h1>".into()),
        word_count: 120,
        document_id: Some("doc-1".into()),
        document_version_independent_id: Some("doc-1-vi".into()),
        locale: "en-us".into(),
        redirect_url: None,
        toc_rel: None,
        content_git_url: Some("https://github.com/o/r/blob/main/articles/intro.md".into()),
        gitcommit: Some("abc123".into()),
        original_content_git_url: Some("https://github.com/o/r/blob/live/articles/intro.md".into()),
        author: Some(Contributor {
            name: "octo".into(),
            display_name: Some("Octo Cat".into()),
            id: Some("1".into()),
            profile_url: Some("https://github.com/octo".into()),
        }),
        contributors: Some(vec![Contributor {
            name: "alice".into(),
            display_name: None,
            id: Some("2".into()),
            profile_url: None,
        }]),
        updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 5, 15, 30, 0).unwrap()),
        metadata: Some(doc(json!({"ms.topic": "article", "author": "authored-author"}))),
    }
}

pub fn document(content_type: ContentType) -> Document {
    Document {
        file_path: "articles/intro.md".into(),
        output_path: "dotnet/articles/intro.json".into(),
        content_type,
    }
}

pub fn manifest_output() -> LegacyManifestOutput {
    LegacyManifestOutput {
        page_output: LegacyPageOutput {
            output_path_relative_to_site_base_path: "articles/intro.raw.page.json".into(),
        },
    }
}

pub fn toc() -> TableOfContentsMap {
    [("articles/intro.md", "dotnet/toc.json")].into_iter().collect()
}

/// Builds raw metadata for a conceptual page with pass-through collaborators.
pub fn build(page: &PageModel, docset: &Docset) -> Metadata {
    build_with(page, docset, ContentType::Page, &Collaborators::pass_through())
        .expect("raw metadata should build")
}

pub fn build_with(
    page: &PageModel,
    docset: &Docset,
    content_type: ContentType,
    collaborators: &Collaborators<'_>,
) -> LegacyResult<Metadata> {
    build_raw_metadata(
        page,
        CONTENT,
        docset,
        &document(content_type),
        &manifest_output(),
        &toc(),
        collaborators,
    )
}
