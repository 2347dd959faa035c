// ABOUTME: Cascade driver shared by the publish-date and title extractors.
// ABOUTME: Evaluates ordered resolver steps with found/empty/hard-stop semantics.

//! Metadata extractors.
//!
//! Each extractor is an ordered cascade of resolver steps. Steps are tried
//! in priority order and the first one yielding a value wins; sources are
//! never merged. A step may also terminate the whole cascade without a
//! value, which is how malformed JSON in a subcontent rule behaves.

pub mod publish_date;
pub mod title;

/// Outcome of a single resolver step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// The step produced a value; the cascade returns it.
    Found(String),
    /// The step had nothing; the cascade moves on.
    Empty,
    /// The step failed terminally; the cascade returns absent without
    /// consulting later steps.
    HardStop,
}

/// Runs resolver steps in order, returning the first value found.
pub(crate) fn resolve(steps: &[&dyn Fn() -> Resolution]) -> Option<String> {
    for step in steps {
        match step() {
            Resolution::Found(value) => return Some(value),
            Resolution::Empty => continue,
            Resolution::HardStop => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_first_found_wins() {
        let result = resolve(&[
            &|| Resolution::Empty,
            &|| Resolution::Found("second".to_string()),
            &|| Resolution::Found("third".to_string()),
        ]);
        assert_eq!(result, Some("second".to_string()));
    }

    #[test]
    fn test_resolve_hard_stop_skips_later_steps() {
        let result = resolve(&[
            &|| Resolution::Empty,
            &|| Resolution::HardStop,
            &|| Resolution::Found("unreachable".to_string()),
        ]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolve_all_empty_is_absent() {
        let result = resolve(&[&|| Resolution::Empty, &|| Resolution::Empty]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolve_found_may_be_empty_string() {
        let result = resolve(&[&|| Resolution::Found(String::new())]);
        assert_eq!(result, Some(String::new()));
    }
}
