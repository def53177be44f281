//! Integer and float literals.
//!
//! Grammar:
//!
//! ```text
//! digits   = digit ( "_"? digit )*
//! decimal  = "0" | [1-9] ( "_"? [0-9] )*
//! float    = decimal ( "." digits )? ( [eE] [+-]? digits )?     -- at least one of the two
//! integer  = "0" [bB] [01]+ | "0" [oO_] [0-7]+ | "0" [0-7]+
//!          | "0" [xX] [0-9a-fA-F]+ | "0" [dD] [0-9]+ | [1-9] [0-9]* | "0"
//! ```
//!
//! Integer digit runs have no separators: the literal ends at the first `_`.
//!
//! A leading `+` or `-` belongs to the literal unless it directly follows a
//! local variable, constant, or method name (`value-24` is a subtraction).

use garnet_ir::{BigInt, Element, IdentKind, TokenKind};

use super::Scanner;
use crate::{LexError, LexErrorKind};

fn is_digit_in(radix: u32) -> impl Fn(u8) -> bool {
    move |b| char::from(b).is_digit(radix)
}

impl Scanner<'_> {
    pub(super) fn numeric(&mut self) -> Result<bool, LexError> {
        let saved = self.cursor;
        let start = self.cursor.pos();

        let negative = match self.cursor.current() {
            sign @ (b'+' | b'-') if self.cursor.peek().is_ascii_digit() && self.sign_allowed() => {
                self.cursor.advance();
                sign == b'-'
            }
            _ => false,
        };

        if !self.cursor.current().is_ascii_digit() {
            self.cursor = saved;
            return Ok(false);
        }

        if self.float(start)? {
            return Ok(true);
        }
        self.integer(start, negative)?;
        Ok(true)
    }

    /// A sign may start a literal unless the nearest earlier token is a
    /// bare name with nothing between it and the sign.
    fn sign_allowed(&self) -> bool {
        let mut separated = false;
        for element in self.arena.elements().rev() {
            match element.token_kind() {
                None => separated = true,
                Some(TokenKind::Ident(
                    IdentKind::LocalVariable | IdentKind::Constant | IdentKind::MethodOnly,
                )) => return separated,
                Some(_) => return true,
            }
        }
        true
    }

    /// Advance over `digit ( "_"? digit )*`. The cursor must be on a digit.
    fn eat_digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                b if is_digit(b) => self.cursor.advance(),
                b'_' if is_digit(self.cursor.peek()) => self.cursor.advance_n(2),
                _ => break,
            }
        }
    }

    /// Try the float grammar from the first digit. `start` includes the sign.
    fn float(&mut self, start: u32) -> Result<bool, LexError> {
        let saved = self.cursor;
        let decimal = is_digit_in(10);

        if self.cursor.current() == b'0' {
            self.cursor.advance();
        } else {
            self.eat_digits(&decimal);
        }

        let mut is_float = false;
        if self.cursor.current() == b'.' && decimal(self.cursor.peek()) {
            self.cursor.advance();
            self.eat_digits(&decimal);
            is_float = true;
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let mut probe = self.cursor;
            probe.advance();
            if matches!(probe.current(), b'+' | b'-') {
                probe.advance();
            }
            if decimal(probe.current()) {
                self.cursor = probe;
                self.eat_digits(&decimal);
                is_float = true;
            }
        }

        if !is_float {
            self.cursor = saved;
            return Ok(false);
        }

        let span = self.span_from(start);
        let text: String = self.cursor.slice_from(start).chars().filter(|&c| c != '_').collect();
        let value: f64 = text
            .parse()
            .map_err(|_| LexError::new(span, LexErrorKind::MalformedFloat))?;
        self.push(Element::float(value, span));
        Ok(true)
    }

    /// Scan an integer from the first digit. `start` includes the sign.
    fn integer(&mut self, start: u32, negative: bool) -> Result<(), LexError> {
        let (radix, prefix_len) = if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'b' | b'B' => (2, 2),
                b'o' | b'O' | b'_' => (8, 2),
                b'0'..=b'7' => (8, 1),
                b'x' | b'X' => (16, 2),
                b'd' | b'D' => (10, 2),
                _ => {
                    self.cursor.advance();
                    self.push(Element::integer(BigInt::ZERO, self.span_from(start)));
                    return Ok(());
                }
            }
        } else {
            (10, 0)
        };
        self.cursor.advance_n(prefix_len);

        if !is_digit_in(radix)(self.cursor.current()) {
            return Err(LexError::new(
                self.span_from(start),
                LexErrorKind::MissingDigits { radix },
            ));
        }

        let mut value = BigInt::ZERO;
        while let Some(digit) = char::from(self.cursor.current()).to_digit(radix) {
            value = value * radix + digit;
            self.cursor.advance();
        }
        if negative {
            value = -value;
        }

        self.push(Element::integer(value, self.span_from(start)));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
