//! Value translation for criteria expressions.

mod grammar;

use crate::capture::capture_values;
use crate::table::LabelTable;

pub use grammar::{is_resolved_form, is_structurally_valid};

/// Replace every value of `expr` with the result of `translate`.
///
/// Operators, negations and the whitespace between values are copied
/// verbatim; only the captured value spans change. Replacements may differ in
/// length from the values they replace, each later value still lands at its
/// original position shifted by the length changes made before it.
///
/// # Examples
/// ```
/// use webaccess_expr::translate_values;
///
/// let upper = translate_values("!a &  bc", |value| value.to_uppercase());
/// assert_eq!(upper, "!A &  BC");
/// assert_eq!(translate_values(" x|y ", |value| value), " x|y ");
/// ```
#[must_use]
pub fn translate_values<'a, F, S>(expr: &'a str, mut translate: F) -> String
where
    F: FnMut(&'a str) -> S,
    S: AsRef<str>,
{
    let mut translated = String::with_capacity(expr.len());
    let mut cursor = 0;
    for span in capture_values(expr) {
        translated.push_str(expr.get(cursor..span.start).unwrap_or_default());
        translated.push_str(translate(span.text).as_ref());
        cursor = span.end;
    }
    translated.push_str(expr.get(cursor..).unwrap_or_default());
    translated
}

/// Split the spaces a value keeps before the next operator off its end.
fn split_trailing_spaces(value: &str) -> (&str, &str) {
    let core = value.trim_end_matches(' ');
    (core, value.get(core.len()..).unwrap_or_default())
}

/// Replace every label of `expr` with its identifier from `table`.
///
/// Spaces captured at the end of a value are not part of the label and are
/// kept after the identifier. Values that match no label are left unchanged;
/// use
/// [`is_resolved_form`] on the result to detect them.
///
/// # Examples
/// ```
/// use webaccess_expr::{LabelTable, translate_label_to_id};
///
/// let states: LabelTable = [(1, "selected"), (2, "focused")].into_iter().collect();
/// assert_eq!(translate_label_to_id("selected & !focused", &states), "1 & !2");
/// assert_eq!(translate_label_to_id("busy", &states), "busy");
/// ```
#[must_use]
pub fn translate_label_to_id(expr: &str, table: &LabelTable) -> String {
    translate_values(expr, |value| {
        let (label, spacing) = split_trailing_spaces(value);
        table
            .id_of(label)
            .map_or_else(|| value.to_owned(), |id| format!("{id}{spacing}"))
    })
}

/// Replace every identifier of `expr` with its label from `table`.
///
/// Values that are not base-10 integers, or whose identifier is missing from
/// the table, are left unchanged.
///
/// # Examples
/// ```
/// use webaccess_expr::{LabelTable, translate_id_to_label};
///
/// let roles: LabelTable = [(9, "button"), (19, "link")].into_iter().collect();
/// assert_eq!(translate_id_to_label("9 | !19", &roles), "button | !link");
/// assert_eq!(translate_id_to_label("9 & 404 & x", &roles), "button & 404 & x");
/// ```
#[must_use]
pub fn translate_id_to_label(expr: &str, table: &LabelTable) -> String {
    translate_values(expr, |value| {
        let (id, spacing) = split_trailing_spaces(value);
        id.parse::<i64>()
            .ok()
            .and_then(|id| table.label(id))
            .map_or_else(|| value.to_owned(), |label| format!("{label}{spacing}"))
    })
}
