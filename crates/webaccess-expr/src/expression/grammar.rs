//! Structural predicates over criteria expressions.

use std::sync::LazyLock;

use regex::Regex;

/// A value: runs of value characters joined by spaces.
const LABEL_VALUE: &str = r"[^!&|\s]+(?: +[^!&|\s]+)*";
/// A value once translated to identifier form.
const ID_VALUE: &str = r"[0-9]+";

fn expression_source(value: &str) -> String {
    format!(r"^\s*!?\s*(?:{value})(?:\s*[&|]\s*!?\s*(?:{value}))*\s*$")
}

fn compile(value: &str) -> Regex {
    let source = expression_source(value);
    Regex::new(&source)
        .unwrap_or_else(|error| panic!("expression grammar `{source}` must compile: {error}"))
}

static STRUCTURE: LazyLock<Regex> = LazyLock::new(|| compile(LABEL_VALUE));
static RESOLVED: LazyLock<Regex> = LazyLock::new(|| compile(ID_VALUE));

/// Check that `expr` is a well-formed criteria expression.
///
/// A well-formed expression holds one or more values, each optionally
/// negated with a single `!`, separated by `&` or `|`. Whitespace around
/// operators is ignored. Whether the values resolve against a label table is
/// not considered. Blank input is not well-formed.
///
/// # Examples
/// ```
/// use webaccess_expr::is_structurally_valid;
///
/// assert!(is_structurally_valid("a & b"));
/// assert!(is_structurally_valid("!a | !b"));
/// assert!(!is_structurally_valid("a && b"));
/// assert!(!is_structurally_valid("!!a"));
/// assert!(!is_structurally_valid(""));
/// ```
#[must_use]
pub fn is_structurally_valid(expr: &str) -> bool {
    STRUCTURE.is_match(expr)
}

/// Check that `expr` is well-formed and every value is a decimal identifier.
///
/// This is the check applied after translating labels to identifiers: a
/// label that did not resolve is left in place and fails it.
///
/// # Examples
/// ```
/// use webaccess_expr::is_resolved_form;
///
/// assert!(is_resolved_form("3 & 4"));
/// assert!(is_resolved_form("!12|7"));
/// assert!(!is_resolved_form("3 & role"));
/// ```
#[must_use]
pub fn is_resolved_form(expr: &str) -> bool {
    RESOLVED.is_match(expr)
}
