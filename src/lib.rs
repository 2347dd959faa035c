// ABOUTME: Main library entry point for the Gannet article metadata extractor.
// ABOUTME: Re-exports the public API: Article, Config, MetaTagRule, StructuredGraph, extractors.

//! Gannet - canonical title and publish-date extraction for parsed web articles.
//!
//! This crate resolves two pieces of canonical metadata from an already-parsed
//! web document using a layered fallback cascade: structured markup (OpenGraph,
//! schema.org triples) is trusted first, heuristic meta-tag and `<title>`
//! inspection last. The first source yielding a value wins; sources are never
//! merged.
//!
//! # Example
//!
//! ```
//! use gannet::{extract_title, Article};
//!
//! # fn main() -> Result<(), gannet::ExtractError> {
//! let html = r#"
//!     <html><head>
//!         <meta property="og:site_name" content="Example News">
//!         <meta property="og:title" content="Hello | Example News">
//!     </head></html>
//! "#;
//! let article = Article::from_html(html, "https://news.example.org/a")?;
//! assert_eq!(extract_title(&article), "Hello");
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod extractors;
pub mod graph;

pub use crate::article::Article;
pub use crate::config::{load_builtin_rules, Config, MetaTagRule};
pub use crate::error::ExtractError;
pub use crate::extractors::publish_date::extract_publish_date;
pub use crate::extractors::title::{clean_title, extract_title};
pub use crate::graph::{StructuredGraph, Triple};
