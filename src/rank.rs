//! Author-position ranking.

use std::fmt;

/// The position of a target author within an entry's author list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorRank {
    /// The author appears at the given 1-based position.
    Ranked { position: usize, total: usize },
    /// The author is not listed.
    Absent { total: usize },
}

impl AuthorRank {
    /// True when the target author is first-listed.
    pub fn is_first(&self) -> bool {
        matches!(self, AuthorRank::Ranked { position: 1, .. })
    }
}

impl fmt::Display for AuthorRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorRank::Ranked { position, total } => write!(f, "{}/{}", position, total),
            AuthorRank::Absent { total } => write!(f, "N/A/{}", total),
        }
    }
}

/// Ranks a target author within an ordered family-name list.
///
/// Lookup is exact-match on family name only: no fuzzy matching, no
/// initials handling. A duplicated name resolves to its first occurrence.
pub fn rank_author(authors: &[String], target: &str) -> AuthorRank {
    let total = authors.len();
    match authors.iter().position(|name| name == target) {
        Some(idx) => AuthorRank::Ranked {
            position: idx + 1,
            total,
        },
        None => AuthorRank::Absent { total },
    }
}
