//! Category enum representing the three inner movements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The three mutually exclusive movements an answer option maps to.
///
/// Declaration order is also the fixed priority order used when the
/// secondary movement of a result has to be chosen between two equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Being,
    Flowing,
    Trusting,
}

impl Category {
    /// Returns all categories in priority order.
    pub fn all() -> &'static [Category; 3] {
        &[Category::Being, Category::Flowing, Category::Trusting]
    }

    /// Returns the 0-based position of this category in priority order.
    pub fn priority(&self) -> usize {
        match self {
            Category::Being => 0,
            Category::Flowing => 1,
            Category::Trusting => 2,
        }
    }

    /// Returns the display name used in result codes and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Being => "Being",
            Category::Flowing => "Flowing",
            Category::Trusting => "Trusting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}
