//! Raw metadata assembly for legacy static rendering.
//!
//! The document is built by folding an ordered list of steps over an initially
//! empty [`Metadata`]. Each step takes the document by value and returns the
//! next one; a later step overrides any key an earlier step wrote. The order of
//! [`STEPS`] is the precedence order and must not be rearranged.
//!
//! After the steps run, the document goes through the external schema
//! transform and legacy post-processor, then a two-phase cleanup: first the
//! transient `updated_at_date_time` is dropped from the provenance block, then
//! nulls are removed at every depth.

use chrono::SecondsFormat;
use docmeta_model::{ContentType, Docset, Document, LegacyManifestOutput, PageModel, TocIndex};
use docmeta_types::{Metadata, normalize_file, relative_path, remove_nulls};
use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::{Collaborators, LegacyResult, build_common_metadata, project_contributor};

/// Template schema applied to every conceptual page.
pub const CONCEPTUAL_SCHEMA: &str = "conceptual";

/// Nested block carrying author, contributors and update time.
pub const PROVENANCE_KEY: &str = "_op_gitContributorInformation";

/// Raw update timestamp inside the provenance block, removed before output.
pub const TRANSIENT_DATETIME_KEY: &str = "updated_at_date_time";

const UPDATED_AT_PATTERN: &str = "yyyy-MM-dd hh:mm tt";
const DEFAULT_LAYOUT: &str = "Conceptual";

/// Read-only inputs shared by every step.
pub(crate) struct RawContext<'a> {
    pub page: &'a PageModel,
    pub content: &'a str,
    pub docset: &'a Docset,
    pub document: &'a Document,
    pub manifest_output: &'a LegacyManifestOutput,
    pub toc: &'a dyn TocIndex,
}

type Step = fn(Metadata, &RawContext<'_>) -> LegacyResult<Metadata>;

/// Assembly steps in precedence order.
pub(crate) const STEPS: [(&str, Step); 16] = [
    ("authored", authored),
    ("common", common),
    ("conceptual", conceptual),
    ("file_relative_path", file_relative_path),
    ("toc_rel", toc_rel),
    ("word_count", word_count),
    ("titles", titles),
    ("canonical_url_prefix", canonical_url_prefix),
    ("pdf_url_prefix_template", pdf_url_prefix_template),
    ("layout", layout),
    ("site_path", site_path),
    ("document_ids", document_ids),
    ("redirect_url", redirect_url),
    ("provenance", provenance),
    ("author_and_update_time", author_and_update_time),
    ("contribution", contribution),
];

/// Builds the full raw metadata document for one page.
///
/// Fails when a date cannot be formatted with the docset culture or when a
/// collaborator fails; collaborator errors are returned unchanged.
pub fn build_raw_metadata(
    page: &PageModel,
    content: &str,
    docset: &Docset,
    document: &Document,
    manifest_output: &LegacyManifestOutput,
    toc: &dyn TocIndex,
    collaborators: &Collaborators<'_>,
) -> LegacyResult<Metadata> {
    let context = RawContext {
        page,
        content,
        docset,
        document,
        manifest_output,
        toc,
    };

    let assembled = assemble(&context)?;

    let transformed = collaborators
        .transform
        .transform_metadata(CONCEPTUAL_SCHEMA, assembled)?;
    let processed = collaborators.post_processor.post_process(transformed, page)?;

    let raw = remove_nulls(remove_transient_datetime(processed));

    debug!(
        document_id = page.document_id.as_deref().unwrap_or_default(),
        content_type = ?document.content_type,
        keys = raw.len(),
        "Built raw metadata"
    );
    Ok(raw)
}

pub(crate) fn assemble(context: &RawContext<'_>) -> LegacyResult<Metadata> {
    STEPS
        .iter()
        .try_fold(Metadata::new(), |metadata, (name, step)| {
            let next = step(metadata, context)?;
            trace!(step = *name, keys = next.len(), "Applied metadata step");
            Ok(next)
        })
}

/// Drops the transient datetime from the provenance block, keeping key order.
#[must_use]
pub fn remove_transient_datetime(mut metadata: Metadata) -> Metadata {
    if let Some(Value::Object(block)) = metadata.get_mut(PROVENANCE_KEY) {
        *block = std::mem::take(block)
            .into_iter()
            .filter(|(key, _)| key != TRANSIENT_DATETIME_KEY)
            .collect();
    }
    metadata
}

fn set(mut metadata: Metadata, key: &str, value: impl Into<Value>) -> Metadata {
    metadata.insert(key.to_string(), value.into());
    metadata
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ── Steps ────────────────────────────────────────────────────────

fn authored(_: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    Ok(cx.page.metadata.clone().unwrap_or_default())
}

fn common(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    Ok(build_common_metadata(metadata, cx.docset))
}

fn conceptual(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    Ok(set(metadata, "conceptual", cx.content))
}

fn file_relative_path(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let path = cx
        .manifest_output
        .page_output
        .output_path_relative_to_site_base_path
        .replace(".raw.page.json", ".html");
    Ok(set(metadata, "fileRelativePath", path))
}

fn toc_rel(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let toc_rel = cx
        .page
        .toc_rel
        .clone()
        .or_else(|| cx.toc.find_toc_relative_path(cx.document));
    Ok(set(metadata, "toc_rel", json!(toc_rel)))
}

fn word_count(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let metadata = set(metadata, "wordCount", cx.page.word_count);
    Ok(set(metadata, "word_count", cx.page.word_count))
}

fn titles(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let metadata = set(metadata, "title", json!(cx.page.title));
    Ok(set(
        metadata,
        "rawTitle",
        cx.page.raw_title.as_deref().unwrap_or_default(),
    ))
}

fn canonical_url_prefix(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let config = &cx.docset.config;
    let prefix = format!(
        "{}/{}/{}/",
        config.base_url, config.locale, config.site_base_path
    );
    Ok(set(metadata, "_op_canonicalUrlPrefix", prefix))
}

fn pdf_url_prefix_template(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let config = &cx.docset.config;
    if !config.need_generate_pdf_url_template {
        return Ok(metadata);
    }
    let template = format!(
        "{}/pdfstore/{}/{}/{{branchName}}",
        config.base_url,
        cx.page.locale,
        config.depot_name()
    );
    Ok(set(metadata, "_op_pdfUrlPrefixTemplate", template))
}

fn layout(metadata: Metadata, _: &RawContext<'_>) -> LegacyResult<Metadata> {
    if metadata.contains_key("layout") {
        return Ok(metadata);
    }
    Ok(set(metadata, "layout", DEFAULT_LAYOUT))
}

fn site_path(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let path = normalize_file(&relative_path(
        &cx.docset.config.site_base_path,
        &cx.document.output_path,
    ));
    Ok(set(metadata, "_path", path))
}

fn document_ids(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let metadata = set(metadata, "document_id", json!(cx.page.document_id));
    Ok(set(
        metadata,
        "document_version_independent_id",
        json!(cx.page.document_version_independent_id),
    ))
}

fn redirect_url(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    match cx.page.redirect_target() {
        Some(target) => Ok(set(metadata, "redirect_url", target)),
        None => Ok(metadata),
    }
}

fn provenance(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let Some(updated_at) = cx.page.known_updated_at() else {
        return Ok(metadata);
    };

    let author = cx.page.author.as_ref().map(project_contributor);
    let contributors = cx
        .page
        .contributors
        .as_ref()
        .map(|all| all.iter().map(project_contributor).collect::<Vec<_>>());

    let block = json!({
        "author": author,
        "contributors": contributors,
        "update_at": cx.docset.culture.format_short_date(&updated_at)?,
        TRANSIENT_DATETIME_KEY: updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    });
    Ok(set(metadata, PROVENANCE_KEY, block))
}

fn author_and_update_time(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let mut metadata = metadata;
    if let Some(name) = cx.page.author_name() {
        metadata = set(metadata, "author", name);
    }
    if let Some(updated_at) = cx.page.known_updated_at() {
        let formatted = cx.docset.culture.format(&updated_at, UPDATED_AT_PATTERN)?;
        metadata = set(metadata, "updated_at", formatted);
    }
    Ok(metadata)
}

fn contribution(metadata: Metadata, cx: &RawContext<'_>) -> LegacyResult<Metadata> {
    let show_edit = cx.docset.config.contribution.show_edit;
    let mut metadata = set(metadata, "_op_openToPublicContributors", show_edit);

    if cx.document.content_type == ContentType::Redirection {
        return Ok(metadata);
    }

    metadata = set(metadata, "open_to_public_contributors", show_edit);

    let page = cx.page;
    for (key, value) in [
        ("content_git_url", page.content_git_url.as_deref()),
        ("gitcommit", page.gitcommit.as_deref()),
        ("original_content_git_url", page.original_content_git_url.as_deref()),
    ] {
        if let Some(value) = non_empty(value) {
            metadata = set(metadata, key, value);
        }
    }
    Ok(metadata)
}
