//! Criteria sets: the alternative ways a rule can match.

use std::collections::BTreeMap;

use derive_more::{Deref, From};

use crate::error::RuleError;
use crate::field::{Field, FieldKind};
use crate::localization;
use crate::validation::{Vocabularies, display_expression_field};

/// One set of criteria, optionally restricted to a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaSet {
    name: Option<String>,
    notes: Option<String>,
    values: BTreeMap<Field, String>,
}

/// Store `value` under `key` unless it is blank, in which case remove `key`.
pub(crate) fn set_if_not_empty<K: Ord>(map: &mut BTreeMap<K, String>, key: K, value: &str) {
    if value.trim().is_empty() {
        map.remove(&key);
    } else {
        map.insert(key, value.to_owned());
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_owned())
}

impl CriteriaSet {
    /// Optional name of the set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name, clearing it when `name` is blank.
    pub fn set_name(&mut self, name: &str) {
        self.name = non_blank(name);
    }

    /// Optional free-form notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Set the notes, clearing them when `notes` is blank.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = non_blank(notes);
    }

    /// Stored value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Store `value` for `field`, or remove the field when `value` is blank.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NotACriterion`] for rule property fields.
    pub fn set_if_not_empty(&mut self, field: Field, value: &str) -> Result<(), RuleError> {
        if field.kind() == FieldKind::Property {
            return Err(RuleError::NotACriterion { field });
        }
        set_if_not_empty(&mut self.values, field, value);
        Ok(())
    }

    /// Stored fields and values in display order.
    pub fn values(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Name shown in criteria set lists.
    ///
    /// Falls back to the context values joined with ` / ` for unnamed sets.
    ///
    /// # Examples
    /// ```
    /// use webaccess_rules::{CriteriaSet, Field};
    ///
    /// let mut set = CriteriaSet::default();
    /// set.set_if_not_empty(Field::ContextPageTitle, "Inbox")?;
    /// set.set_if_not_empty(Field::ContextParent, "main")?;
    /// assert_eq!(set.display_name(), "Inbox / main");
    /// set.set_name("Mail list");
    /// assert_eq!(set.display_name(), "Mail list");
    /// # Ok::<(), webaccess_rules::RuleError>(())
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.values_of(FieldKind::Context)
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Localized multi-line summary with general, context and criteria
    /// sections. Expression values are shown in label form.
    #[must_use]
    pub fn summary(&self, vocabularies: &Vocabularies) -> String {
        let none = localization::message("summary-none");
        let name = self.name.clone().unwrap_or_else(|| none.clone());
        let mut lines = vec![
            localization::message("summary-general"),
            localization::message_with_args("summary-name", |args| {
                args.set("name", name);
            }),
        ];
        for (heading, kind) in [
            ("summary-context", FieldKind::Context),
            ("summary-criteria", FieldKind::Criterion),
        ] {
            lines.push(localization::message(heading));
            let start = lines.len();
            lines.extend(self.values_of(kind).map(|(field, value)| {
                let shown = display_expression_field(field, value, vocabularies);
                localization::message_with_args("summary-entry", |args| {
                    args.set("field", field.label());
                    args.set("value", shown);
                })
            }));
            if lines.len() == start {
                lines.push(none.clone());
            }
        }
        lines.into_iter().map(|line| line + "\n").collect()
    }

    fn values_of(&self, kind: FieldKind) -> impl Iterator<Item = (Field, &str)> {
        self.values().filter(move |(field, _)| field.kind() == kind)
    }
}

/// Ordered criteria sets of a rule; earlier sets are tried first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From)]
pub struct CriteriaSets(Vec<CriteriaSet>);

impl CriteriaSets {
    /// Insert `set` at `sequence_order`, clamped to the end of the list.
    ///
    /// Returns the index the set landed at.
    pub fn insert(&mut self, sequence_order: usize, set: CriteriaSet) -> usize {
        let index = sequence_order.min(self.0.len());
        self.0.insert(index, set);
        index
    }

    /// Replace the set at `index` with `set`, moving it to `sequence_order`.
    ///
    /// Returns the new index, or `None` when `index` is out of range.
    pub fn replace(
        &mut self,
        index: usize,
        sequence_order: usize,
        set: CriteriaSet,
    ) -> Option<usize> {
        if index >= self.0.len() {
            return None;
        }
        self.0.remove(index);
        Some(self.insert(sequence_order, set))
    }

    /// Remove and return the set at `index`.
    pub fn remove(&mut self, index: usize) -> Option<CriteriaSet> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Display names of the sets in sequence order.
    #[must_use]
    pub fn display_names(&self) -> Vec<String> {
        self.0.iter().map(CriteriaSet::display_name).collect()
    }
}
