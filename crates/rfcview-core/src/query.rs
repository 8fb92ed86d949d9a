//! Filter options for selecting records from a directory

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Search filter
///
/// `includes` and `excludes` are raw comma separated word lists exactly as a
/// user typed them. An empty `includes` selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Lowest RFC number considered (inclusive)
    #[serde(default)]
    pub from: Option<u32>,

    /// Highest RFC number considered (inclusive)
    #[serde(default)]
    pub to: Option<u32>,

    /// Numbers or title words to select, comma separated
    #[serde(default)]
    pub includes: String,

    /// Numbers or title words to reject, comma separated
    #[serde(default)]
    pub excludes: String,

    /// Follow `updates` / `obsoletes` towards older records
    #[serde(default)]
    pub search_ancestors: bool,

    /// Follow `updated_by` / `obsoleted_by` towards newer records
    #[serde(default)]
    pub search_descendants: bool,
}

impl FilterOptions {
    /// Create a filter selecting `includes`
    pub fn new(includes: impl Into<String>) -> Self {
        Self {
            includes: includes.into(),
            ..Default::default()
        }
    }

    /// Set the words to reject
    pub fn excluding(mut self, excludes: impl Into<String>) -> Self {
        self.excludes = excludes.into();
        self
    }

    /// Set the lower number bound
    pub fn from(mut self, from: u32) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the upper number bound
    pub fn to(mut self, to: u32) -> Self {
        self.to = Some(to);
        self
    }

    /// Expand matches to the records they update or obsolete
    pub fn with_ancestors(mut self) -> Self {
        self.search_ancestors = true;
        self
    }

    /// Expand matches to the records updating or obsoleting them
    pub fn with_descendants(mut self) -> Self {
        self.search_descendants = true;
        self
    }

    pub fn in_range(&self, number: u32) -> bool {
        self.from.map_or(true, |from| number >= from) && self.to.map_or(true, |to| number <= to)
    }

    /// Compile the word lists once for matching against many records
    pub fn matcher(&self) -> Matcher {
        Matcher {
            includes: split_terms(&self.includes),
            excludes: split_terms(&self.excludes),
        }
    }
}

/// Lowercased include/exclude terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl Matcher {
    /// A record is selected when its number is included and not excluded, or
    /// when its title contains an included word and no excluded word.
    pub fn matches(&self, record: &Record) -> bool {
        let number = record.number.to_string();
        if self.includes.contains(&number) && !self.excludes.contains(&number) {
            return true;
        }

        let title = record.title.to_lowercase();
        self.includes.iter().any(|term| title.contains(term.as_str()))
            && !self.excludes.iter().any(|term| title.contains(term.as_str()))
    }
}

/// Split on commas followed by any amount of whitespace
fn split_terms(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .enumerate()
        .map(|(idx, term)| if idx == 0 { term } else { term.trim_start() })
        .map(str::to_lowercase)
        .collect()
}
