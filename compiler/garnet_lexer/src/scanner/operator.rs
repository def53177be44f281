//! Operators and punctuators.

use garnet_ir::Element;

use super::Scanner;
use crate::LexError;

impl Scanner<'_> {
    /// Longest match keyed on the first byte. The matched text is then
    /// looked up in the operator set, falling back to the punctuator set.
    pub(super) fn operator(&mut self) -> Result<bool, LexError> {
        let start = self.cursor.pos();
        let next = self.cursor.peek();
        let after = self.cursor.peek2();

        let len = match self.cursor.current() {
            b'!' => 1 + u32::from(matches!(next, b'=' | b'~')),
            b'&' => doubled_or_assign(b'&', next, after),
            b'|' => doubled_or_assign(b'|', next, after),
            b'>' => doubled_or_assign(b'>', next, after),
            b'*' => doubled_or_assign(b'*', next, after),
            b'<' => match (next, after) {
                (b'=', b'>') | (b'<', b'=') => 3,
                (b'=' | b'<', _) => 2,
                _ => 1,
            },
            b'=' => match (next, after) {
                (b'=', b'=') => 3,
                (b'=' | b'~' | b'>', _) => 2,
                _ => 1,
            },
            b'^' | b'/' | b'%' => 1 + u32::from(next == b'='),
            b'+' | b'-' => 1 + u32::from(matches!(next, b'=' | b'@')),
            b':' => 1 + u32::from(next == b':'),
            b'.' => match (next, after) {
                (b'.', b'.') => 3,
                (b'.', _) => 2,
                _ => 1,
            },
            b'[' => match (next, after) {
                (b']', b'=') => 3,
                (b']', _) => 2,
                _ => 1,
            },
            b']' | b'(' | b')' | b'{' | b'}' | b'~' | b',' | b';' | b'?' | b'\'' => 1,
            _ => return Ok(false),
        };

        self.cursor.advance_n(len);
        self.push_lexeme(start, Element::operator_or_punctuator)?;
        Ok(true)
    }
}

/// `x`, `x=`, `xx`, or `xx=`.
fn doubled_or_assign(first: u8, next: u8, after: u8) -> u32 {
    match (next, after) {
        (n, b'=') if n == first => 3,
        (n, _) if n == first => 2,
        (b'=', _) => 2,
        _ => 1,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
