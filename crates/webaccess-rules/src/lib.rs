//! Rule editing model for Web Access.
//!
//! Rules match elements of a web page through one or more criteria sets and
//! attach properties such as gestures or a custom name to them. This crate
//! holds what the rule editor needs besides its widgets: the fields each rule
//! type accepts, the draft a rule is edited in, the validation of the `role`
//! and `states` expression fields, and the localized messages shown when a
//! value is rejected.
//!
//! ```
//! use webaccess_expr::LabelTable;
//! use webaccess_rules::{
//!     CriteriaSet, Field, RuleDraft, RuleType, Vocabularies, commit_expression_field,
//! };
//!
//! let vocabularies = Vocabularies {
//!     roles: [(9, "button"), (19, "link")].into_iter().collect(),
//!     states: LabelTable::new(),
//! };
//!
//! let mut criteria = CriteriaSet::default();
//! commit_expression_field(&mut criteria, Field::Role, "button | link", &vocabularies)?;
//! assert_eq!(criteria.get(Field::Role), Some("9 | 19"));
//!
//! let mut draft = RuleDraft::new();
//! draft.set_rule_type(RuleType::Marker);
//! draft.set_name("Toolbar");
//! draft.criteria_sets_mut().insert(0, criteria);
//! let rule = draft.finish(["Search"])?;
//! assert_eq!(rule.criteria().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod criteria;
mod draft;
mod error;
mod field;
pub mod localization;
mod rule_type;
mod validation;

pub use criteria::{CriteriaSet, CriteriaSets};
pub use draft::{PropertyValue, Rule, RuleDraft};
pub use error::{FieldError, RuleError};
pub use field::{Field, FieldKind, UnknownFieldError, Vocabulary};
pub use localization::Localizations;
pub use rule_type::{RuleType, UnknownRuleTypeError};
pub use validation::{
    CommitError, FieldOutcome, Vocabularies, commit_expression_field, display_expression_field,
    validate_expression_field,
};
