//! Validation of expression fields before they are stored.
//!
//! A raw value goes through four stages: a blank value clears the field; a
//! non-blank value must be well-formed; its labels must all resolve to
//! identifiers; the resolved identifier form is what gets stored.

use log::debug;
use webaccess_expr::{
    LabelTable, capture_values, is_resolved_form, is_structurally_valid,
    strip_accelerator_markers, translate_id_to_label, translate_label_to_id,
};

use crate::criteria::CriteriaSet;
use crate::error::{FieldError, RuleError};
use crate::field::{Field, Vocabulary};

/// Label tables for the expression vocabularies of the host.
#[derive(Debug, Clone, Default)]
pub struct Vocabularies {
    /// Element roles.
    pub roles: LabelTable,
    /// Element states.
    pub states: LabelTable,
}

impl Vocabularies {
    /// Table used by `field`, `None` for fields that are not expressions.
    #[must_use]
    pub const fn for_field(&self, field: Field) -> Option<&LabelTable> {
        match field.vocabulary() {
            Some(Vocabulary::Roles) => Some(&self.roles),
            Some(Vocabulary::States) => Some(&self.states),
            None => None,
        }
    }
}

/// Accepted result of validating a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The value was blank; the field is removed.
    Cleared,
    /// The value to store.
    Accepted(String),
}

/// Validate a raw expression entered for `field` against `table`.
///
/// Accelerator markers are stripped first. On success the returned value is
/// in identifier form.
///
/// # Errors
///
/// Returns [`FieldError::Syntax`] when the value is malformed and
/// [`FieldError::UnknownIdentifier`] when some label does not resolve.
///
/// # Examples
/// ```
/// use webaccess_expr::LabelTable;
/// use webaccess_rules::{Field, FieldError, FieldOutcome, validate_expression_field};
///
/// let roles: LabelTable = [(1, "button"), (2, "link")].into_iter().collect();
/// assert_eq!(
///     validate_expression_field(Field::Role, "&Button | &Link", &roles),
///     Ok(FieldOutcome::Accepted("1 | 2".into()))
/// );
/// assert_eq!(
///     validate_expression_field(Field::Role, "  ", &roles),
///     Ok(FieldOutcome::Cleared)
/// );
/// assert!(matches!(
///     validate_expression_field(Field::Role, "!!link", &roles),
///     Err(FieldError::Syntax { .. })
/// ));
/// ```
pub fn validate_expression_field(
    field: Field,
    raw: &str,
    table: &LabelTable,
) -> Result<FieldOutcome, FieldError> {
    if raw.trim().is_empty() {
        return Ok(FieldOutcome::Cleared);
    }
    let expression = strip_accelerator_markers(raw);
    if !is_structurally_valid(&expression) {
        debug!("rejected {field} expression {raw:?}: syntax");
        return Err(FieldError::Syntax {
            field,
            expression: raw.to_owned(),
        });
    }
    let resolved = translate_label_to_id(&expression, table);
    if !is_resolved_form(&resolved) {
        let unresolved: Vec<String> = capture_values(&resolved)
            .map(|span| span.text.trim_end())
            .filter(|value| !value.bytes().all(|b| b.is_ascii_digit()))
            .map(str::to_owned)
            .collect();
        debug!("rejected {field} expression {raw:?}: unresolved {unresolved:?}");
        return Err(FieldError::UnknownIdentifier {
            field,
            expression: raw.to_owned(),
            unresolved,
        });
    }
    Ok(FieldOutcome::Accepted(resolved))
}

/// Validate `raw` for `field` and store the outcome in `criteria`.
///
/// Expression fields are validated against the matching table of
/// `vocabularies`; other criterion and context fields are stored as entered,
/// or cleared when blank. The criteria set is left untouched on error.
///
/// # Errors
///
/// Returns [`CommitError::Field`] when an expression is rejected and
/// [`CommitError::Rule`] when `field` is a rule property.
pub fn commit_expression_field(
    criteria: &mut CriteriaSet,
    field: Field,
    raw: &str,
    vocabularies: &Vocabularies,
) -> Result<FieldOutcome, CommitError> {
    let outcome = match vocabularies.for_field(field) {
        Some(table) => validate_expression_field(field, raw, table)?,
        None if raw.trim().is_empty() => FieldOutcome::Cleared,
        None => FieldOutcome::Accepted(raw.to_owned()),
    };
    match &outcome {
        FieldOutcome::Cleared => criteria.set_if_not_empty(field, "")?,
        FieldOutcome::Accepted(value) => criteria.set_if_not_empty(field, value)?,
    }
    Ok(outcome)
}

/// Render a stored expression in label form for editing.
///
/// Values of non-expression fields are returned unchanged.
#[must_use]
pub fn display_expression_field(field: Field, stored: &str, vocabularies: &Vocabularies) -> String {
    vocabularies.for_field(field).map_or_else(
        || stored.to_owned(),
        |table| translate_id_to_label(stored, table),
    )
}

/// Failure to commit a field into a criteria set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    /// The value was rejected.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// The field cannot be stored in a criteria set.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vocabularies() -> Vocabularies {
        Vocabularies {
            roles: [(9, "button"), (19, "link")].into_iter().collect(),
            states: [(4, "selected"), (16, "checked")].into_iter().collect(),
        }
    }

    #[rstest]
    #[case("")]
    #[case(" \t ")]
    fn blank_values_clear_the_field(vocabularies: Vocabularies, #[case] raw: &str) {
        let outcome = validate_expression_field(Field::Role, raw, &vocabularies.roles);
        assert_eq!(outcome, Ok(FieldOutcome::Cleared));
    }

    #[rstest]
    #[case("a && b")]
    #[case("!!a")]
    #[case("link |")]
    fn malformed_values_are_syntax_errors(vocabularies: Vocabularies, #[case] raw: &str) {
        let outcome = validate_expression_field(Field::Role, raw, &vocabularies.roles);
        assert_eq!(
            outcome,
            Err(FieldError::Syntax {
                field: Field::Role,
                expression: raw.into(),
            })
        );
    }

    #[rstest]
    fn unresolved_labels_are_reported(vocabularies: Vocabularies) {
        let outcome =
            validate_expression_field(Field::States, "checked & !busy", &vocabularies.states);
        assert_eq!(
            outcome,
            Err(FieldError::UnknownIdentifier {
                field: Field::States,
                expression: "checked & !busy".into(),
                unresolved: vec!["busy".into()],
            })
        );
    }

    #[rstest]
    fn identifiers_are_accepted_as_is(vocabularies: Vocabularies) {
        let outcome = validate_expression_field(Field::Role, "9 | 19", &vocabularies.roles);
        assert_eq!(outcome, Ok(FieldOutcome::Accepted("9 | 19".into())));
    }

    #[rstest]
    fn commit_stores_identifier_form(vocabularies: Vocabularies) {
        let mut criteria = CriteriaSet::default();
        let outcome =
            commit_expression_field(&mut criteria, Field::Role, "button | link", &vocabularies);
        assert_eq!(outcome, Ok(FieldOutcome::Accepted("9 | 19".into())));
        assert_eq!(criteria.get(Field::Role), Some("9 | 19"));
        assert_eq!(
            display_expression_field(Field::Role, "9 | 19", &vocabularies),
            "button | link"
        );
    }

    #[rstest]
    fn commit_clears_blank_values(vocabularies: Vocabularies) {
        let mut criteria = CriteriaSet::default();
        criteria
            .set_if_not_empty(Field::States, "4")
            .unwrap_or_else(|error| panic!("states is a criterion: {error}"));
        let outcome = commit_expression_field(&mut criteria, Field::States, "", &vocabularies);
        assert_eq!(outcome, Ok(FieldOutcome::Cleared));
        assert_eq!(criteria.get(Field::States), None);
    }

    #[rstest]
    fn rejected_commit_keeps_previous_value(vocabularies: Vocabularies) {
        let mut criteria = CriteriaSet::default();
        criteria
            .set_if_not_empty(Field::Role, "9")
            .unwrap_or_else(|error| panic!("role is a criterion: {error}"));
        let outcome = commit_expression_field(&mut criteria, Field::Role, "widget", &vocabularies);
        assert!(matches!(
            outcome,
            Err(CommitError::Field(FieldError::UnknownIdentifier { .. }))
        ));
        assert_eq!(criteria.get(Field::Role), Some("9"));
    }

    #[rstest]
    fn plain_fields_are_stored_verbatim(vocabularies: Vocabularies) {
        let mut criteria = CriteriaSet::default();
        let outcome = commit_expression_field(&mut criteria, Field::Tag, "h1 & h2", &vocabularies);
        assert_eq!(outcome, Ok(FieldOutcome::Accepted("h1 & h2".into())));
        assert_eq!(criteria.get(Field::Tag), Some("h1 & h2"));
    }

    #[rstest]
    fn properties_cannot_be_committed_to_criteria(vocabularies: Vocabularies) {
        let mut criteria = CriteriaSet::default();
        let outcome =
            commit_expression_field(&mut criteria, Field::CustomName, "x", &vocabularies);
        assert_eq!(
            outcome,
            Err(CommitError::Rule(RuleError::NotACriterion {
                field: Field::CustomName,
            }))
        );
    }
}
