//! Ordered identifier/label vocabularies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One identifier and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelEntry {
    /// Identifier used by the screen reader.
    pub id: i64,
    /// Human-readable label shown to users.
    pub label: String,
}

/// Vocabulary mapping identifiers to labels, used in both directions.
///
/// Entries keep their insertion order, which decides reverse lookups when a
/// label appears more than once. Inserting an identifier that is already
/// present replaces its label in place.
///
/// With the `serde` feature the table (de)serializes as a sequence of
/// `{"id": ..., "label": ...}` objects.
///
/// # Examples
/// ```
/// use webaccess_expr::LabelTable;
///
/// let mut roles = LabelTable::new();
/// roles.insert(9, "button");
/// roles.insert(19, "link");
/// assert_eq!(roles.label(9), Some("button"));
/// assert_eq!(roles.id_of("link"), Some(19));
/// assert_eq!(roles.id_of("Link"), Some(19));
/// assert_eq!(roles.id_of("heading"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<LabelEntry>", into = "Vec<LabelEntry>")
)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `id` with `label`, replacing the label of an existing `id`.
    pub fn insert(&mut self, id: i64, label: impl Into<String>) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.label = label;
            return;
        }
        self.entries.push(LabelEntry { id, label });
    }

    /// Label registered for `id`.
    #[must_use]
    pub fn label(&self, id: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    /// Identifier registered for `label`.
    ///
    /// An exact match wins; failing that, the first label equal to `label`
    /// ignoring case is used. Ties go to the earliest inserted entry.
    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .or_else(|| {
                let folded = label.to_lowercase();
                self.entries
                    .iter()
                    .find(|entry| entry.label.to_lowercase() == folded)
            })
            .map(|entry| entry.id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.id, entry.label.as_str()))
    }
}

impl<L: Into<String>> FromIterator<(i64, L)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (i64, L)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<L: Into<String>> Extend<(i64, L)> for LabelTable {
    fn extend<I: IntoIterator<Item = (i64, L)>>(&mut self, iter: I) {
        for (id, label) in iter {
            self.insert(id, label);
        }
    }
}

impl From<Vec<LabelEntry>> for LabelTable {
    fn from(entries: Vec<LabelEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.id, entry.label))
            .collect()
    }
}

impl From<LabelTable> for Vec<LabelEntry> {
    fn from(table: LabelTable) -> Self {
        table.entries
    }
}
