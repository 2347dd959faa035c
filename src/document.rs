// ABOUTME: Document accessor helpers over scraper::Html for element lookup.
// ABOUTME: Finds the first element by tag and/or attribute pair, reads attributes and text.

//! Document accessor helpers.
//!
//! Thin query layer over [`scraper::Html`]. Matches are returned in document
//! order and only the first match is ever consumed by the extractors, so the
//! accessor exposes first-element lookup only.

use scraper::{ElementRef, Html, Selector};

/// Finds the first element matching an optional tag name and an optional
/// attribute name/value pair, in document order.
///
/// With both constraints the query is `tag[attr='value']`; with only one it
/// is `tag` or `[attr='value']`. Returns `None` when nothing matches or when
/// no constraint is given at all.
pub fn find_first<'a>(
    doc: &'a Html,
    tag: Option<&str>,
    attr: Option<(&str, &str)>,
) -> Option<ElementRef<'a>> {
    let selector = match (tag, attr) {
        (Some(tag), Some((name, value))) => format!("{}[{}='{}']", tag, name, value),
        (Some(tag), None) => tag.to_string(),
        (None, Some((name, value))) => format!("[{}='{}']", name, value),
        (None, None) => return None,
    };
    let sel = Selector::parse(&selector).ok()?;
    doc.select(&sel).next()
}

/// Reads a trimmed attribute value off an element.
///
/// Returns `None` when the attribute is absent or blank.
pub fn attr_value(el: &ElementRef<'_>, name: &str) -> Option<String> {
    let value = el.value().attr(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads the trimmed text content of an element.
pub fn text_content(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
