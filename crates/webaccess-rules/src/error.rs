//! Errors reported to the user while editing rules.
//!
//! Both enums render localized messages through [`Display`](fmt::Display) so
//! callers can show them as they are and move focus back to the offending
//! field.

use std::fmt;

use crate::field::Field;
use crate::localization;
use crate::rule_type::RuleType;

/// Rejection of an expression field value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// The value does not follow the expression grammar.
    Syntax {
        /// Field being edited.
        field: Field,
        /// Value as entered.
        expression: String,
    },
    /// The value is well-formed but some values match no known label.
    UnknownIdentifier {
        /// Field being edited.
        field: Field,
        /// Value as entered.
        expression: String,
        /// Values that did not resolve, in order of appearance.
        unresolved: Vec<String>,
    },
}

impl FieldError {
    /// Field the error applies to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Syntax { field, .. } | Self::UnknownIdentifier { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Syntax { field, expression } => {
                localization::message_with_args("field-error-syntax", |args| {
                    args.set("field", field.label());
                    args.set("expression", expression.clone());
                })
            }
            Self::UnknownIdentifier {
                field, unresolved, ..
            } => localization::message_with_args("field-error-unknown-identifier", |args| {
                args.set("field", field.label());
                args.set("values", unresolved.join(", "));
            }),
        };
        f.write_str(&message)
    }
}

impl std::error::Error for FieldError {}

/// Rejection of a rule as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleError {
    /// No rule type was chosen.
    MissingType,
    /// The rule name is blank.
    MissingName,
    /// Another rule already uses the name.
    DuplicateName {
        /// Name that clashes.
        name: String,
    },
    /// The property does not apply to the rule type.
    FieldNotApplicable {
        /// Property being set.
        field: Field,
        /// Current type of the rule.
        rule_type: RuleType,
    },
    /// A criterion or context field was used as a property.
    NotAProperty {
        /// Field being set.
        field: Field,
    },
    /// A property field was used as a criterion.
    NotACriterion {
        /// Field being set.
        field: Field,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingType => localization::message("rule-error-missing-type"),
            Self::MissingName => localization::message("rule-error-missing-name"),
            Self::DuplicateName { name } => {
                localization::message_with_args("rule-error-duplicate-name", |args| {
                    args.set("name", name.clone());
                })
            }
            Self::FieldNotApplicable { field, rule_type } => {
                localization::message_with_args("rule-error-field-not-applicable", |args| {
                    args.set("field", field.label());
                    args.set("rule_type", rule_type.label());
                })
            }
            Self::NotAProperty { field } => {
                localization::message_with_args("rule-error-not-a-property", |args| {
                    args.set("field", field.label());
                })
            }
            Self::NotACriterion { field } => {
                localization::message_with_args("rule-error-not-a-criterion", |args| {
                    args.set("field", field.label());
                })
            }
        };
        f.write_str(&message)
    }
}

impl std::error::Error for RuleError {}
