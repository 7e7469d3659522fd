//! Criteria expression utilities for Web Access rules.
//!
//! The `role` and `states` criteria of a rule hold boolean expressions such as
//! `button | !link` or `9 & 12`. Values are separated by the `&` (and), `|`
//! (or) and `!` (not) operators and may be written either as human-readable
//! labels or as the numeric identifiers understood by the screen reader. This
//! crate captures the value spans of such expressions, checks their structure,
//! and translates values between the two forms against a [`LabelTable`].
//!
//! Every function here is pure: malformed input never panics or errors, the
//! predicates report `false` and the translators leave unresolved values
//! verbatim.
//!
//! ```
//! use webaccess_expr::{LabelTable, is_resolved_form, translate_label_to_id};
//!
//! let roles: LabelTable = [(9, "button"), (19, "link")].into_iter().collect();
//! let ids = translate_label_to_id("button | !link", &roles);
//! assert_eq!(ids, "9 | !19");
//! assert!(is_resolved_form(&ids));
//! ```

mod accelerator;
mod capture;
mod expression;
mod table;

pub use accelerator::strip_accelerator_markers;
pub use capture::{ValueSpan, ValueSpans, capture_values};
pub use expression::{
    is_resolved_form, is_structurally_valid, translate_id_to_label, translate_label_to_id,
    translate_values,
};
pub use table::{LabelEntry, LabelTable};

/// Operators recognised between and in front of expression values.
pub const OPERATORS: [char; 3] = ['!', '&', '|'];

/// Returns `true` when `c` may appear inside a value token.
pub(crate) fn is_value_char(c: char) -> bool {
    !c.is_whitespace() && !OPERATORS.contains(&c)
}
