//! Library side of the `docmeta` binary: input loading and rendering.
//!
//! Kept separate from `main.rs` so the load/render path is testable without
//! spawning the binary.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use docmeta_legacy::{
    Collaborators, build_raw_metadata, build_redirection_metadata, project_output_metadata,
};
use docmeta_model::{
    ContentType, Docset, Document, LegacyManifestOutput, PageModel, TableOfContentsMap,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

/// Everything needed to build one page's metadata.
#[derive(Debug, Deserialize)]
pub struct PageBundle {
    pub page: PageModel,
    #[serde(default)]
    pub content: String,
    pub document: Document,
    #[serde(default)]
    pub manifest_output: LegacyManifestOutput,
    /// Document source path to owning TOC site path.
    #[serde(default)]
    pub toc: TableOfContentsMap,
}

/// Which documents to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw metadata for legacy static rendering.
    Raw,
    /// Published metadata for dynamic rendering.
    Output,
    /// Both, as `{"raw": ..., "output": ...}`.
    Both,
}

/// Loads a docset from TOML (`.toml`) or JSON (anything else).
pub fn load_docset(path: &Path) -> Result<Docset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read docset {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let docset = if is_toml {
        toml::from_str(&text)
            .with_context(|| format!("invalid docset TOML in {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid docset JSON in {}", path.display()))?
    };
    Ok(docset)
}

/// Loads a page bundle from JSON.
pub fn load_bundle(path: &Path) -> Result<PageBundle> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read page bundle {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid page bundle JSON in {}", path.display()))
}

/// Builds the requested documents for one page.
///
/// Redirection pages publish the redirect-only document in place of the
/// projected output.
pub fn render(docset: &Docset, bundle: &PageBundle, format: OutputFormat) -> Result<Value> {
    let raw = build_raw_metadata(
        &bundle.page,
        &bundle.content,
        docset,
        &bundle.document,
        &bundle.manifest_output,
        &bundle.toc,
        &Collaborators::pass_through(),
    )
    .context("failed to build raw metadata")?;

    let output = if bundle.document.content_type == ContentType::Redirection {
        debug!("Redirection page, emitting redirect-only output");
        build_redirection_metadata(docset, &bundle.page)
    } else {
        project_output_metadata(&raw)
    };

    Ok(match format {
        OutputFormat::Raw => Value::Object(raw),
        OutputFormat::Output => Value::Object(output),
        OutputFormat::Both => json!({ "raw": raw, "output": output }),
    })
}

/// Serializes a rendered document.
pub fn to_json(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
