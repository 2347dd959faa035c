// ABOUTME: Article context holding the parsed document, metadata graphs, and source domain.
// ABOUTME: Constructors build the graphs from raw HTML or accept pre-built collaborators.

use scraper::Html;
use url::Url;

use crate::error::ExtractError;
use crate::graph::{self, StructuredGraph};

/// The extraction context for one page: a parsed document, its OpenGraph
/// graph, an optional generic structured-data graph, and the resolved domain
/// of the source URL.
///
/// Extraction reads this snapshot and never mutates it, so one `Article` can
/// serve any number of extraction calls.
#[derive(Debug)]
pub struct Article {
    pub doc: Html,
    pub opengraph: StructuredGraph,
    pub schema: Option<StructuredGraph>,
    pub domain: String,
}

impl Article {
    /// Parses raw HTML, builds both metadata graphs, and derives the domain
    /// from the page URL.
    pub fn from_html(html: &str, url: &str) -> Result<Self, ExtractError> {
        let parsed = Url::parse(url).map_err(|source| ExtractError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let domain = parsed.host_str().unwrap_or_default().to_string();
        let doc = Html::parse_document(html);
        let opengraph = graph::opengraph_from_document(&doc);
        let schema = graph::schema_from_document(&doc);
        Ok(Self {
            doc,
            opengraph,
            schema,
            domain,
        })
    }

    /// Assembles an article from pre-built collaborators, for callers that
    /// own document parsing and graph construction.
    pub fn from_parts(
        doc: Html,
        opengraph: StructuredGraph,
        schema: Option<StructuredGraph>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            doc,
            opengraph,
            schema,
            domain: domain.into(),
        }
    }
}
