// ABOUTME: Title extractor resolving OpenGraph, schema headline, meta headline, then <title>.
// ABOUTME: Cleans every hit against the publisher site name, domain, and splitter tokens.

//! Title extraction and cleaning.
//!
//! Resolution order, first hit wins, each hit passed through [`clean_title`]:
//! 1. OpenGraph `title`.
//! 2. Generic structured graph `headline` (first subject with a non-empty
//!    value).
//! 3. `<meta name="headline">` content.
//! 4. `<title>` element text.
//!
//! When nothing matches the extractor returns the empty string, uncleaned.
//!
//! Cleaning reverses the common publisher convention of decorating titles
//! with a site name and a separator (`"My Article | TechCrunch"`): the site
//! name (from OpenGraph `site_name`, else the schema publisher's `name`) is
//! removed, the domain is stripped case-insensitively, and a single leading
//! and trailing splitter token are dropped. Multiple consecutive splitters
//! are left alone; stripping is one pass only.

use regex::RegexBuilder;

use crate::article::Article;
use crate::constants::{
    OG_SITE_NAME, OG_TITLE, PAGE_ROOT, SCHEMA_HEADLINE, SCHEMA_NAME, SCHEMA_PUBLISHER,
    TITLE_SPLITTERS,
};
use crate::document;
use crate::extractors::{resolve, Resolution};

/// Resolves and cleans the canonical title for an article.
///
/// Always returns a string; an exhausted cascade yields `""`.
pub fn extract_title(article: &Article) -> String {
    resolve(&[
        &|| from_opengraph(article),
        &|| from_schema(article),
        &|| from_meta_headline(article),
        &|| from_title_element(article),
    ])
    .map(|raw| clean_title(article, &raw))
    .unwrap_or_default()
}

fn from_opengraph(article: &Article) -> Resolution {
    if !article.opengraph.has_predicate(OG_TITLE) {
        return Resolution::Empty;
    }
    match article.opengraph.value(PAGE_ROOT, OG_TITLE) {
        Some(value) => Resolution::Found(value.to_string()),
        None => Resolution::Empty,
    }
}

fn from_schema(article: &Article) -> Resolution {
    let Some(schema) = &article.schema else {
        return Resolution::Empty;
    };
    for triple in schema.triples_matching(None, Some(SCHEMA_HEADLINE), None) {
        if let Some(value) = schema.value(&triple.subject, SCHEMA_HEADLINE) {
            if !value.is_empty() {
                return Resolution::Found(value.to_string());
            }
        }
    }
    Resolution::Empty
}

fn from_meta_headline(article: &Article) -> Resolution {
    match document::find_first(&article.doc, Some("meta"), Some(("name", "headline"))) {
        Some(el) => Resolution::Found(document::attr_value(&el, "content").unwrap_or_default()),
        None => Resolution::Empty,
    }
}

fn from_title_element(article: &Article) -> Resolution {
    match document::find_first(&article.doc, Some("title"), None) {
        Some(el) => Resolution::Found(document::text_content(&el)),
        None => Resolution::Empty,
    }
}

/// Normalizes a raw title against the publisher's site name and presentation
/// conventions.
pub fn clean_title(article: &Article, raw: &str) -> String {
    let mut title = raw.to_string();

    // Site name: OpenGraph site_name first, else the schema publisher's
    // name. Only the first candidate is applied, first occurrence only.
    if article.opengraph.has_predicate(OG_SITE_NAME) {
        if let Some(site_name) = article.opengraph.value(PAGE_ROOT, OG_SITE_NAME) {
            title = title.replacen(site_name, "", 1).trim().to_string();
        }
    } else if let Some(schema) = &article.schema {
        'publisher: for triple in schema.triples_matching(None, Some(SCHEMA_PUBLISHER), None) {
            for name in schema.objects(&triple.object, SCHEMA_NAME) {
                title = title.replacen(name, "", 1).trim().to_string();
                break 'publisher;
            }
        }
    }

    // Domain: every literal occurrence, case-insensitive.
    if !article.domain.is_empty() {
        if let Ok(re) = RegexBuilder::new(&regex::escape(&article.domain))
            .case_insensitive(true)
            .build()
        {
            title = re.replace_all(&title, "").trim().to_string();
        }
    }

    // One leading and one trailing splitter token.
    let mut words: Vec<&str> = title.split_whitespace().collect();
    if words.first().is_some_and(|w| TITLE_SPLITTERS.contains(w)) {
        words.remove(0);
    }
    if words.is_empty() {
        return String::new();
    }
    if words.last().is_some_and(|w| TITLE_SPLITTERS.contains(w)) {
        words.pop();
    }
    words.join(" ")
}
