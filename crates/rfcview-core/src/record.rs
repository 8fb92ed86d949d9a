//! Record (node) types

use serde::{Deserialize, Serialize};

/// Base URL for rendered documents on the RFC Editor site
pub const RFC_EDITOR_URL: &str = "https://www.rfc-editor.org/rfc/rfc";

/// English month names in calendar order
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a full English month name to its 1-based ordinal (case-exact)
pub fn month_ordinal(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

/// The four annotation kinds linking one record to others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    Updates,
    UpdatedBy,
    Obsoletes,
    ObsoletedBy,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Obsoletes,
        RelationKind::ObsoletedBy,
        RelationKind::Updates,
        RelationKind::UpdatedBy,
    ];

    /// Literal clause prefix as written in the index, including the trailing space
    pub fn clause_prefix(&self) -> &'static str {
        match self {
            RelationKind::Updates => "Updates ",
            RelationKind::UpdatedBy => "Updated by ",
            RelationKind::Obsoletes => "Obsoletes ",
            RelationKind::ObsoletedBy => "Obsoleted by ",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.clause_prefix().trim_end())
    }
}

/// Metadata for one issued RFC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// RFC number (unique key)
    pub number: u32,

    /// Title as printed in the index
    pub title: String,

    /// Publication date encoded as `year * 100 + month`, 0 when unknown
    pub published: u32,

    /// Earlier records this one updates
    #[serde(default)]
    pub updates: Vec<u32>,

    /// Later records updating this one
    #[serde(default)]
    pub updated_by: Vec<u32>,

    /// Earlier records this one obsoletes
    #[serde(default)]
    pub obsoletes: Vec<u32>,

    /// Later records obsoleting this one
    #[serde(default)]
    pub obsoleted_by: Vec<u32>,
}

impl Record {
    /// Create a record with no relations
    pub fn new(number: u32, title: impl Into<String>, published: u32) -> Self {
        Self {
            number,
            title: title.into(),
            published,
            updates: Vec::new(),
            updated_by: Vec::new(),
            obsoletes: Vec::new(),
            obsoleted_by: Vec::new(),
        }
    }

    /// Replace one relation list
    pub fn with_relation(mut self, kind: RelationKind, numbers: Vec<u32>) -> Self {
        *self.relation_mut(kind) = numbers;
        self
    }

    pub fn relation(&self, kind: RelationKind) -> &[u32] {
        match kind {
            RelationKind::Updates => &self.updates,
            RelationKind::UpdatedBy => &self.updated_by,
            RelationKind::Obsoletes => &self.obsoletes,
            RelationKind::ObsoletedBy => &self.obsoleted_by,
        }
    }

    pub fn relation_mut(&mut self, kind: RelationKind) -> &mut Vec<u32> {
        match kind {
            RelationKind::Updates => &mut self.updates,
            RelationKind::UpdatedBy => &mut self.updated_by,
            RelationKind::Obsoletes => &mut self.obsoletes,
            RelationKind::ObsoletedBy => &mut self.obsoleted_by,
        }
    }

    /// Publication year, if the date was recognised
    pub fn year(&self) -> Option<u32> {
        (self.published > 0).then_some(self.published / 100)
    }

    /// Publication month (1-12), if the date was recognised
    pub fn month(&self) -> Option<u32> {
        (self.published > 0).then_some(self.published % 100)
    }

    /// Link to the document on the RFC Editor site
    pub fn url(&self) -> String {
        format!("{}{}", RFC_EDITOR_URL, self.number)
    }
}
