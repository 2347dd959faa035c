// ABOUTME: Insertion-ordered triple store used for OpenGraph and schema.org metadata.
// ABOUTME: Includes builders that populate graphs from meta tags and JSON-LD scripts.

//! Structured metadata graphs.
//!
//! A [`StructuredGraph`] is a small subject-predicate-object triple store.
//! Subjects and predicates are opaque stable identifiers (URIs); no ordering
//! guarantee exists among multiple matches beyond insertion order, and the
//! first match in iteration order is the one extraction uses.
//!
//! Two builders populate graphs from a parsed document:
//! - [`opengraph_from_document`] reads `<meta property="og:*">` and
//!   `<meta property="article:*">` tags into the OpenGraph namespace under
//!   the page-root subject.
//! - [`schema_from_document`] flattens `application/ld+json` scripts into
//!   schema.org-namespaced triples.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::constants::{OG_NS, PAGE_ROOT, SCHEMA_NS};

/// A single subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// An insertion-ordered triple store.
///
/// Triples live in an insertion-ordered list; a (subject, predicate) index
/// backs value lookup and object traversal, and a predicate index backs
/// existence checks and predicate-pattern iteration.
#[derive(Debug, Clone, Default)]
pub struct StructuredGraph {
    triples: Vec<Triple>,
    by_subject_predicate: HashMap<(String, String), Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
}

impl StructuredGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph.
    pub fn insert(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) {
        let triple = Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        };
        let idx = self.triples.len();
        self.by_subject_predicate
            .entry((triple.subject.clone(), triple.predicate.clone()))
            .or_default()
            .push(idx);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(idx);
        self.triples.push(triple);
    }

    /// Returns true if any triple carries the given predicate, regardless of
    /// subject or object.
    pub fn has_predicate(&self, predicate: &str) -> bool {
        self.by_predicate.contains_key(predicate)
    }

    /// Returns the object of the first triple matching (subject, predicate).
    pub fn value(&self, subject: &str, predicate: &str) -> Option<&str> {
        self.by_subject_predicate
            .get(&(subject.to_string(), predicate.to_string()))
            .and_then(|indices| indices.first())
            .map(|&idx| self.triples[idx].object.as_str())
    }

    /// Iterates triples matching a partial pattern in insertion order.
    ///
    /// A `None` component matches anything.
    pub fn triples_matching<'a>(
        &'a self,
        subject: Option<&'a str>,
        predicate: Option<&'a str>,
        object: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| t.subject == s)
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| t.object == o)
        })
    }

    /// Iterates the objects reachable from `subject` via `predicate`.
    pub fn objects<'a>(
        &'a self,
        subject: &str,
        predicate: &str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let indices = self
            .by_subject_predicate
            .get(&(subject.to_string(), predicate.to_string()))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        indices
            .iter()
            .map(move |&idx| self.triples[idx].object.as_str())
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

static META_PROPERTY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property][content]").expect("static selector"));

static LD_JSON: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("static selector")
});

/// Builds the OpenGraph metadata graph from a parsed document.
///
/// `og:`-prefixed properties map into the OpenGraph namespace with the prefix
/// stripped (`og:title` -> `http://ogp.me/ns#title`); `article:`-prefixed
/// properties keep their full name (`article:published_time` ->
/// `http://ogp.me/ns#article:published_time`). All triples are attached to
/// the page-root subject. Other properties are ignored.
pub fn opengraph_from_document(doc: &Html) -> StructuredGraph {
    let mut graph = StructuredGraph::new();
    for el in doc.select(&META_PROPERTY) {
        let Some(property) = el.value().attr("property") else {
            continue;
        };
        let Some(content) = el.value().attr("content") else {
            continue;
        };
        let predicate = if let Some(rest) = property.strip_prefix("og:") {
            format!("{}{}", OG_NS, rest)
        } else if property.starts_with("article:") {
            format!("{}{}", OG_NS, property)
        } else {
            continue;
        };
        graph.insert(PAGE_ROOT, predicate, content.trim());
    }
    graph
}

/// Builds the generic structured-data graph from `application/ld+json`
/// scripts, or `None` when the document carries no usable JSON-LD.
///
/// Nodes keep their `@id` as subject when present, otherwise a generated
/// blank-node id. Keys map into the schema.org namespace; nested objects
/// become linked subjects, arrays fan out into one triple per element.
/// Scripts with malformed JSON are skipped silently.
pub fn schema_from_document(doc: &Html) -> Option<StructuredGraph> {
    let mut graph = StructuredGraph::new();
    let mut blank_counter = 0usize;
    for script in doc.select(&LD_JSON) {
        let raw: String = script.text().collect();
        let raw = raw
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };
        insert_node(&mut graph, &value, &mut blank_counter);
    }
    if graph.is_empty() {
        None
    } else {
        Some(graph)
    }
}

/// Inserts a JSON-LD node into the graph, returning its subject id.
fn insert_node(graph: &mut StructuredGraph, value: &Value, blank_counter: &mut usize) -> Option<String> {
    match value {
        Value::Array(items) => {
            for item in items {
                insert_node(graph, item, blank_counter);
            }
            None
        }
        Value::Object(map) => {
            if let Some(nodes) = map.get("@graph").and_then(Value::as_array) {
                for node in nodes {
                    insert_node(graph, node, blank_counter);
                }
            }
            let subject = match map.get("@id").and_then(Value::as_str) {
                Some(id) => id.to_string(),
                None => {
                    *blank_counter += 1;
                    format!("_:b{}", blank_counter)
                }
            };
            for (key, val) in map {
                if key.starts_with('@') {
                    continue;
                }
                let predicate = format!("{}{}", SCHEMA_NS, key);
                insert_object(graph, &subject, &predicate, val, blank_counter);
            }
            Some(subject)
        }
        _ => None,
    }
}

/// Inserts the object side of a statement, recursing into nested structures.
fn insert_object(
    graph: &mut StructuredGraph,
    subject: &str,
    predicate: &str,
    value: &Value,
    blank_counter: &mut usize,
) {
    match value {
        Value::String(s) => graph.insert(subject, predicate, s.as_str()),
        Value::Number(n) => graph.insert(subject, predicate, n.to_string()),
        Value::Bool(b) => graph.insert(subject, predicate, b.to_string()),
        Value::Array(items) => {
            for item in items {
                insert_object(graph, subject, predicate, item, blank_counter);
            }
        }
        Value::Object(_) => {
            if let Some(child) = insert_node(graph, value, blank_counter) {
                graph.insert(subject, predicate, child);
            }
        }
        Value::Null => {}
    }
}
