// ABOUTME: Meta-tag matching rules and the extraction configuration that orders them.
// ABOUTME: Ships a built-in publish-date rule corpus embedded as JSON.

//! Extraction configuration.
//!
//! A [`Config`] holds an ordered list of [`MetaTagRule`] records consulted by
//! the publish-date cascade after structured markup has come up empty. Rule
//! order is part of the contract: earlier rules take priority. Rules are
//! loaded once and never mutated during extraction.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Embedded JSON containing the built-in publish-date meta-tag rules.
const BUILTIN_RULES_JSON: &str = include_str!("../data/publish_date_tags.json");

fn default_content_attr() -> String {
    "content".to_string()
}

/// A single domain-aware meta-tag matching rule.
///
/// Rules match elements by `(tag, attr, value)`. Tag-less rules read the
/// result from the `content` attribute of the first match; tag-bearing rules
/// read the element's text instead. `subcontent` names a key to pull out of
/// a JSON-encoded content value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTagRule {
    /// When set, the rule applies only to articles from this domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// HTML tag name to match; when absent any element with the attribute
    /// pair matches and the result is read from an attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Attribute name to match on.
    pub attr: String,
    /// Attribute value to match on.
    pub value: String,
    /// Attribute to read the result from (tag-less rules only).
    #[serde(default = "default_content_attr")]
    pub content: String,
    /// Key to extract from a JSON-encoded content value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcontent: Option<String>,
}

/// Extraction configuration: the ordered publish-date rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub known_publish_date_tags: Vec<MetaTagRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            known_publish_date_tags: load_builtin_rules(),
        }
    }
}

impl Config {
    /// Creates a configuration with an explicit rule set, replacing the
    /// built-in corpus.
    pub fn with_rules(rules: Vec<MetaTagRule>) -> Self {
        Self {
            known_publish_date_tags: rules,
        }
    }

    /// Parses a configuration from a JSON array of rules.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let rules: Vec<MetaTagRule> =
            serde_json::from_str(json).map_err(|source| ExtractError::InvalidRules { source })?;
        Ok(Self::with_rules(rules))
    }
}

/// Loads the built-in publish-date rule corpus from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_rules() -> Vec<MetaTagRule> {
    serde_json::from_str(BUILTIN_RULES_JSON).expect("failed to parse builtin publish-date rules")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_builtin_rules_succeeds() {
        let rules = load_builtin_rules();
        assert!(!rules.is_empty());
    }

    #[test]
    fn builtin_rules_start_with_structured_markup_conventions() {
        let rules = load_builtin_rules();
        assert_eq!(rules[0].attr, "property");
        assert_eq!(rules[0].value, "rnews:datePublished");
        assert_eq!(rules[1].value, "article:published_time");
    }

    #[test]
    fn builtin_rules_include_subcontent_rule() {
        let rules = load_builtin_rules();
        let parsely = rules
            .iter()
            .find(|r| r.value == "parsely-page")
            .expect("parsely-page rule present");
        assert_eq!(parsely.subcontent.as_deref(), Some("pub_date"));
    }

    #[test]
    fn content_attribute_defaults_to_content() {
        let rule: MetaTagRule =
            serde_json::from_str(r#"{"attr": "name", "value": "date"}"#).unwrap();
        assert_eq!(rule.content, "content");
        assert!(rule.domain.is_none());
        assert!(rule.tag.is_none());
        assert!(rule.subcontent.is_none());
    }

    #[test]
    fn from_json_preserves_rule_order() {
        let config = Config::from_json(
            r#"[
                {"attr": "name", "value": "first"},
                {"attr": "name", "value": "second"}
            ]"#,
        )
        .unwrap();
        assert_eq!(config.known_publish_date_tags[0].value, "first");
        assert_eq!(config.known_publish_date_tags[1].value, "second");
    }

    #[test]
    fn from_json_rejects_malformed_rules() {
        let err = Config::from_json("{not an array").unwrap_err();
        assert!(err.is_invalid_rules());
    }
}
