use chrono::{TimeZone, Utc};
use docmeta_model::{
    ContentType, Contributor, Docset, DocsetConfig, Document, PageModel, TableOfContentsMap,
    TocIndex,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Docset config ────────────────────────────────────────────────

#[test]
fn docset_config_from_toml() {
    let docset: Docset = toml::from_str(
        r#"
        [config]
        product = "MSDN"
        name = "dotnet"
        locale = "en-us"
        base_url = "https://docs.example.com"
        site_base_path = "dotnet"
        need_generate_pdf_url_template = true

        [config.contribution]
        show_edit = true

        [culture]
        name = "fr-FR"
        short_date_pattern = "dd/MM/yyyy"
        "#,
    )
    .unwrap();

    assert_eq!(docset.config.depot_name(), "MSDN.dotnet");
    assert!(docset.config.contribution.show_edit);
    assert!(docset.config.need_generate_pdf_url_template);
    assert_eq!(docset.culture.name, "fr-FR");
    assert_eq!(docset.culture.pm_designator, "PM");
}

#[test]
fn docset_config_defaults_when_fields_missing() {
    let docset: Docset = serde_json::from_value(json!({"config": {"product": "P"}})).unwrap();
    assert_eq!(docset.config.name, "");
    assert!(!docset.config.contribution.show_edit);
    assert!(!docset.config.need_generate_pdf_url_template);
    assert_eq!(docset.culture.name, "en-US");
}

#[test]
fn depot_name_joins_product_and_name() {
    let config = DocsetConfig {
        product: "P".into(),
        name: "D".into(),
        ..DocsetConfig::default()
    };
    assert_eq!(config.depot_name(), "P.D");
}

// ── Page model ───────────────────────────────────────────────────

#[test]
fn page_model_from_json() {
    let page: PageModel = serde_json::from_value(json!({
        "title": "Intro",
        "word_count": 42,
        "locale": "en-us",
        "author": {"name": "octo", "display_name": "Octo Cat"},
        "contributors": [{"name": "a"}, {"name": "b", "id": "2"}],
        "updated_at": "2024-03-05T09:07:00Z",
        "metadata": {"layout": "Custom", "ms.topic": "article"},
    }))
    .unwrap();

    assert_eq!(page.title.as_deref(), Some("Intro"));
    assert_eq!(page.word_count, 42);
    assert_eq!(page.author_name(), Some("octo"));
    assert_eq!(page.contributors.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        page.known_updated_at(),
        Some(Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap())
    );
    assert_eq!(page.metadata.unwrap()["layout"], "Custom");
}

#[test]
fn unknown_sentinel_timestamp_is_not_known() {
    let page: PageModel =
        serde_json::from_value(json!({"updated_at": "0001-01-01T00:00:00Z"})).unwrap();
    assert!(page.updated_at.is_some());
    assert_eq!(page.known_updated_at(), None);
}

#[test]
fn missing_timestamp_is_not_known() {
    assert_eq!(PageModel::default().known_updated_at(), None);
}

#[test]
fn empty_redirect_is_no_redirect() {
    let mut page = PageModel {
        redirect_url: Some(String::new()),
        ..PageModel::default()
    };
    assert_eq!(page.redirect_target(), None);
    page.redirect_url = Some("/new".into());
    assert_eq!(page.redirect_target(), Some("/new"));
}

#[test]
fn empty_author_name_is_no_author() {
    let page = PageModel {
        author: Some(Contributor::default()),
        ..PageModel::default()
    };
    assert_eq!(page.author_name(), None);
}

// ── Documents ────────────────────────────────────────────────────

#[test]
fn content_type_serde_names() {
    let document: Document = serde_json::from_value(json!({
        "file_path": "a.md",
        "output_path": "site/a.json",
        "content_type": "redirection",
    }))
    .unwrap();
    assert_eq!(document.content_type, ContentType::Redirection);
    assert_eq!(Document::default().content_type, ContentType::Page);
}

// ── TOC map ──────────────────────────────────────────────────────

fn document(file_path: &str, output_path: &str) -> Document {
    Document {
        file_path: file_path.into(),
        output_path: output_path.into(),
        content_type: ContentType::Page,
    }
}

#[test]
fn toc_map_resolves_relative_to_output_directory() {
    let toc: TableOfContentsMap = [
        ("articles/a/intro.md", "dotnet/articles/toc.json"),
        ("index.md", "dotnet/toc.json"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        toc.find_toc_relative_path(&document("articles/a/intro.md", "dotnet/articles/a/intro.json")),
        Some("../toc.json".to_string())
    );
    assert_eq!(
        toc.find_toc_relative_path(&document("index.md", "dotnet/index.json")),
        Some("toc.json".to_string())
    );
}

#[test]
fn toc_map_normalizes_document_paths() {
    let mut toc = TableOfContentsMap::new();
    toc.insert("articles\\intro.md", "dotnet/toc.json");
    assert_eq!(toc.len(), 1);
    assert_eq!(
        toc.find_toc_relative_path(&document("./articles/intro.md", "dotnet/articles/intro.json")),
        Some("../toc.json".to_string())
    );
}

#[test]
fn toc_map_misses_unknown_documents() {
    let toc = TableOfContentsMap::new();
    assert!(toc.is_empty());
    assert_eq!(toc.find_toc_relative_path(&document("x.md", "x.json")), None);
}

#[test]
fn toc_map_from_json() {
    let toc: TableOfContentsMap =
        serde_json::from_value(json!({"a.md": "site/toc.json"})).unwrap();
    assert_eq!(
        toc.find_toc_relative_path(&document("a.md", "site/sub/a.json")),
        Some("../toc.json".to_string())
    );
}
