// ABOUTME: Predicate URIs and namespace prefixes for the metadata graphs.
// ABOUTME: Also defines the page-root subject and publisher title splitter tokens.

/// Subject identifier for page-level metadata (the document itself).
pub const PAGE_ROOT: &str = "";

/// OpenGraph namespace prefix.
pub const OG_NS: &str = "http://ogp.me/ns#";
/// Generic structured-data (schema.org) namespace prefix.
pub const SCHEMA_NS: &str = "http://schema.org/";

pub const OG_TITLE: &str = "http://ogp.me/ns#title";
pub const OG_SITE_NAME: &str = "http://ogp.me/ns#site_name";
pub const OG_PUBLISHED_TIME: &str = "http://ogp.me/ns#article:published_time";

pub const SCHEMA_DATE_PUBLISHED: &str = "http://schema.org/datePublished";
pub const SCHEMA_HEADLINE: &str = "http://schema.org/headline";
pub const SCHEMA_PUBLISHER: &str = "http://schema.org/publisher";
pub const SCHEMA_NAME: &str = "http://schema.org/name";

/// Punctuation tokens publishers conventionally use to separate an article
/// title from a site name, e.g. `"My Article | TechCrunch"`.
pub const TITLE_SPLITTERS: [&str; 4] = ["|", "-", "»", ":"];
