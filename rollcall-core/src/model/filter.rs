//! Filters that narrow the roster to the displayed list

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Person;

/// Predicate defining which persons are currently displayed
///
/// Serializable so the active view can be restored between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PersonFilter {
    #[default]
    All,
    /// Any keyword equals a whole word of the name, ignoring case
    NameKeywords { keywords: Vec<String> },
}

impl PersonFilter {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NameKeywords {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameKeywords { keywords } => keywords.iter().any(|keyword| {
                person
                    .name()
                    .words()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonFilter::All => f.write_str("all persons"),
            PersonFilter::NameKeywords { keywords } => {
                write!(f, "name matches any of: {}", keywords.join(", "))
            }
        }
    }
}
