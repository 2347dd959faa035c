// ABOUTME: Error types for article construction and rule-set loading.
// ABOUTME: Absence of metadata is never an error; only malformed inputs at the boundary are.

/// Errors raised at the crate boundary.
///
/// Extraction itself never fails: a source that yields nothing means "try the
/// next source" and an exhausted cascade returns absent/empty. Only building
/// an [`Article`](crate::Article) from a bad URL or loading a malformed rule
/// set produce an error.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid article URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid publish-date rule set")]
    InvalidRules {
        #[source]
        source: serde_json::Error,
    },
}

impl ExtractError {
    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, ExtractError::InvalidUrl { .. })
    }

    /// Returns true if this is an InvalidRules error.
    pub fn is_invalid_rules(&self) -> bool {
        matches!(self, ExtractError::InvalidRules { .. })
    }
}
