//! Removal of keyboard accelerator markers from pasted labels.

use std::borrow::Cow;

use crate::is_value_char;

/// Strip `&` accelerator markers that prefix a value.
///
/// Labels copied from menus carry an `&` before their accelerator key, as in
/// `&Button`. An `&` is treated as such a marker only where a value is
/// expected: at the start of the expression, after `!`, or after `&` or `|`
/// once whitespace separates them. A value character must follow it directly.
/// Every other `&` is an operator and is kept, so `a&&b` stays malformed.
///
/// # Examples
/// ```
/// use webaccess_expr::strip_accelerator_markers;
///
/// assert_eq!(strip_accelerator_markers("&Button | &Link"), "Button | Link");
/// assert_eq!(strip_accelerator_markers("!&Heading"), "!Heading");
/// assert_eq!(strip_accelerator_markers("a &b"), "a &b");
/// assert_eq!(strip_accelerator_markers("a&&b"), "a&&b");
/// ```
#[must_use]
pub fn strip_accelerator_markers(expr: &str) -> Cow<'_, str> {
    let mut stripped: Option<String> = None;
    let mut position = Position::Start;
    let mut chars = expr.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        let is_marker = c == '&'
            && position.expects_marker()
            && chars.peek().is_some_and(|&(_, next)| is_value_char(next));
        if is_marker {
            stripped.get_or_insert_with(|| expr.get(..idx).unwrap_or_default().to_owned());
            continue;
        }
        position = position.after(c);
        if let Some(buffer) = stripped.as_mut() {
            buffer.push(c);
        }
    }
    stripped.map_or(Cow::Borrowed(expr), Cow::Owned)
}

/// What the scan last went past, whitespace aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    Negation,
    Operator,
    SpacedOperator,
    Value,
}

impl Position {
    const fn expects_marker(self) -> bool {
        matches!(self, Self::Start | Self::Negation | Self::SpacedOperator)
    }

    fn after(self, c: char) -> Self {
        match c {
            '!' => Self::Negation,
            '&' | '|' => Self::Operator,
            c if c.is_whitespace() && self == Self::Operator => Self::SpacedOperator,
            c if c.is_whitespace() => self,
            _ => Self::Value,
        }
    }
}
