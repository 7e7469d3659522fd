//! Value span scanning for criteria expressions.

use crate::{OPERATORS, is_value_char};

/// A single value token located in an expression.
///
/// Offsets are byte positions into the scanned expression, so
/// `&expr[span.start..span.end] == span.text` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpan<'a> {
    /// Text of the value exactly as written.
    pub text: &'a str,
    /// Byte offset of the first character of the value.
    pub start: usize,
    /// Byte offset one past the last character of the value.
    pub end: usize,
}

/// Lazy iterator over the value tokens of an expression.
///
/// A value starts with a character other than whitespace and the `!`, `&` and
/// `|` operators. It continues through spaces as long as the character after
/// a space is not an operator, so multi-word labels such as `check box` are
/// captured whole and spaces left before further spaces stay in the value.
/// Operators, other whitespace and the end of input end the value.
///
/// The iterator is cheap to clone; a clone restarts from the position of the
/// original, and calling [`capture_values`] again restarts from the beginning.
#[derive(Debug, Clone)]
pub struct ValueSpans<'a> {
    source: &'a str,
    pos: usize,
}

/// Capture the value spans of `expr` from left to right.
///
/// # Examples
/// ```
/// use webaccess_expr::capture_values;
///
/// let values: Vec<_> = capture_values("!check box & link")
///     .map(|span| (span.text, span.start, span.end))
///     .collect();
/// assert_eq!(values, vec![("check box", 1, 10), ("link", 13, 17)]);
/// assert_eq!(capture_values("").count(), 0);
/// ```
#[must_use]
pub fn capture_values(expr: &str) -> ValueSpans<'_> {
    ValueSpans {
        source: expr,
        pos: 0,
    }
}

impl<'a> Iterator for ValueSpans<'a> {
    type Item = ValueSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.source.get(self.pos..)?;
        let Some((offset, _)) = rest.char_indices().find(|&(_, c)| is_value_char(c)) else {
            self.pos = self.source.len();
            return None;
        };
        let start = self.pos + offset;
        let tail = self.source.get(start..)?;

        let mut len = 0;
        let mut chars = tail.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            if is_value_char(c) {
                len = idx + c.len_utf8();
                continue;
            }
            if c == ' ' && chars.peek().is_some_and(|&(_, next)| !OPERATORS.contains(&next)) {
                len = idx + 1;
                continue;
            }
            break;
        }

        let end = start + len;
        self.pos = end;
        let text = self.source.get(start..end)?;
        Some(ValueSpan { text, start, end })
    }
}
