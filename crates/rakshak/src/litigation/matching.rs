//! Name matching between a queried subject and the free-text party names on
//! case records.
//!
//! Party names carry no stable identity, so two distinct entities whose names
//! overlap (one a substring of the other) resolve to the same subject under the
//! default policy. That ambiguity is kept deliberately visible here instead of
//! being guessed away.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatchPolicy {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive equality after trimming.
    Exact,
    /// Every whitespace-separated query token is contained in the candidate, in any order.
    Token,
}

impl NameMatchPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "exact" => Some(Self::Exact),
            "token" | "fuzzy" => Some(Self::Token),
            _ => None,
        }
    }

    /// Matching is literal: the query is never interpreted as a pattern.
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        let candidate = candidate.to_lowercase();
        let query = query.trim().to_lowercase();
        match self {
            Self::Substring => candidate.contains(&query),
            Self::Exact => candidate.trim() == query,
            Self::Token => {
                let mut tokens = query.split_whitespace().peekable();
                if tokens.peek().is_none() {
                    return candidate.contains(&query);
                }
                tokens.all(|token| candidate.contains(token))
            }
        }
    }
}

/// Identity rule for stored petitioner analyses: case-insensitive equality.
pub fn same_name(left: &str, right: &str) -> bool {
    NameMatchPolicy::Exact.matches(left, right)
}
