//! Presentation ordering for sibling rows.
//!
//! The tree itself keeps the authority's order; sorting is applied only
//! when rows are rendered.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// How sibling rows are ordered when a tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// Keep the order the authority returned.
    #[default]
    Input,
    /// Case-insensitive by name, A to Z.
    NameAsc,
    /// Case-insensitive by name, Z to A.
    NameDesc,
}

impl NameOrder {
    /// The direction to sort by name, or `None` to keep input order.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Input => None,
            Self::NameAsc => Some(SortDirection::Asc),
            Self::NameDesc => Some(SortDirection::Desc),
        }
    }

    /// Compare two names under this order. Ties keep input order when used
    /// with a stable sort.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.direction() {
            None => Ordering::Equal,
            Some(direction) => direction.apply(a.to_lowercase().cmp(&b.to_lowercase())),
        }
    }
}
