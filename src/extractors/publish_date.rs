// ABOUTME: Publication date extractor resolving OpenGraph, schema, then meta-tag rules.
// ABOUTME: Returns the raw date string as published; callers own date parsing.

//! Publication date extraction.
//!
//! Resolution order, first hit wins:
//! 1. OpenGraph `article:published_time`.
//! 2. Generic structured graph `datePublished` (first subject with a
//!    non-empty value).
//! 3. Configured meta-tag rules, in configuration order.
//!
//! The returned string is whatever the page published; no date validation
//! or normalization is applied.

use serde_json::Value;

use crate::article::Article;
use crate::config::Config;
use crate::constants::{OG_PUBLISHED_TIME, PAGE_ROOT, SCHEMA_DATE_PUBLISHED};
use crate::document;
use crate::extractors::{resolve, Resolution};

/// Resolves the canonical publication date for an article, or `None` when no
/// source yields one.
pub fn extract_publish_date(article: &Article, config: &Config) -> Option<String> {
    resolve(&[
        &|| from_opengraph(article),
        &|| from_schema(article),
        &|| from_meta_rules(article, config),
    ])
}

fn from_opengraph(article: &Article) -> Resolution {
    if !article.opengraph.has_predicate(OG_PUBLISHED_TIME) {
        return Resolution::Empty;
    }
    match article.opengraph.value(PAGE_ROOT, OG_PUBLISHED_TIME) {
        Some(value) => Resolution::Found(value.to_string()),
        None => Resolution::Empty,
    }
}

fn from_schema(article: &Article) -> Resolution {
    let Some(schema) = &article.schema else {
        return Resolution::Empty;
    };
    for triple in schema.triples_matching(None, Some(SCHEMA_DATE_PUBLISHED), None) {
        if let Some(value) = schema.value(&triple.subject, SCHEMA_DATE_PUBLISHED) {
            if !value.is_empty() {
                return Resolution::Found(value.to_string());
            }
        }
    }
    Resolution::Empty
}

fn from_meta_rules(article: &Article, config: &Config) -> Resolution {
    for rule in &config.known_publish_date_tags {
        if let Some(domain) = &rule.domain {
            if domain != &article.domain {
                continue;
            }
        }
        let Some(el) = document::find_first(
            &article.doc,
            rule.tag.as_deref(),
            Some((rule.attr.as_str(), rule.value.as_str())),
        ) else {
            continue;
        };
        if rule.tag.is_some() {
            // A tag match is terminal even when its text is empty; later
            // rules are not consulted.
            return Resolution::Found(document::text_content(&el));
        }
        let Some(content) = document::attr_value(&el, &rule.content) else {
            continue;
        };
        if let Some(key) = &rule.subcontent {
            return from_subcontent(&content, key);
        }
        return Resolution::Found(content);
    }
    Resolution::Empty
}

/// Extracts a key from a JSON-encoded content value. A parse failure or a
/// missing key terminates the whole cascade.
fn from_subcontent(content: &str, key: &str) -> Resolution {
    let Ok(json) = serde_json::from_str::<Value>(content) else {
        return Resolution::HardStop;
    };
    match json.get(key) {
        Some(Value::String(s)) => Resolution::Found(s.clone()),
        Some(other) => Resolution::Found(other.to_string()),
        None => Resolution::HardStop,
    }
}
