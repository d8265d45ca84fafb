//! Free-text search helpers shared by searchable screens.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Normalized, case-insensitive substring query.
///
/// An empty query matches every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Builds a query: trimmed, lower-cased, inner whitespace collapsed.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: normalize(raw),
        }
    }

    /// Normalized query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true when any candidate contains the query.
    pub fn matches_any(&self, candidates: &[&str]) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        candidates
            .iter()
            .any(|candidate| normalize(candidate).contains(self.needle.as_str()))
    }
}

fn normalize(value: &str) -> String {
    WHITESPACE_RE
        .replace_all(value.trim(), " ")
        .to_lowercase()
}
