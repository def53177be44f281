//! Identifiers, sigil variables, and reserved words.

use garnet_ir::{Element, IdentKind, Keyword};

use super::Scanner;
use crate::LexError;

/// A name starts with `_` or a cased letter; the case picks constant or local.
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_lowercase() || c.is_uppercase()
}

fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Scanner<'_> {
    /// `$name`, `@@name`, `@name`, or a bare name with an optional `=`, `?`,
    /// or `!` suffix.
    ///
    /// Classification order: sigil variable, reserved word, assignment
    /// target, method-only name, then constant or local by first letter.
    pub(super) fn identifier(&mut self) -> Result<bool, LexError> {
        let saved = self.cursor;
        let start = self.cursor.pos();

        let sigil = match (self.cursor.current(), self.cursor.peek()) {
            (b'$', _) => {
                self.cursor.advance();
                Some(IdentKind::GlobalVariable)
            }
            (b'@', b'@') => {
                self.cursor.advance_n(2);
                Some(IdentKind::ClassVariable)
            }
            (b'@', _) => {
                self.cursor.advance();
                Some(IdentKind::InstanceVariable)
            }
            _ => None,
        };

        if !self.cursor.current_char().is_some_and(is_name_start) {
            self.cursor = saved;
            return Ok(false);
        }
        self.cursor.eat_chars_while(is_name_continue);

        if let Some(kind) = sigil {
            self.push_lexeme(start, |text, span| Element::identifier(kind, text, span))?;
            return Ok(true);
        }

        let name = self.cursor.slice_from(start);
        if Keyword::lookup(name).is_some() {
            self.push_lexeme(start, Element::keyword)?;
            return Ok(true);
        }

        let kind = match (self.cursor.current(), self.cursor.peek()) {
            // `a==b`, `a=~b` and `a=>b` keep the `=` for the operator.
            (b'=', b'=' | b'~' | b'>') => self.bare_kind(start),
            (b'=', _) => {
                self.cursor.advance();
                IdentKind::AssignmentTarget
            }
            // `defined?`
            (b'?', _) if self.keyword_with_suffix(start) => {
                self.cursor.advance();
                self.push_lexeme(start, Element::keyword)?;
                return Ok(true);
            }
            (b'?' | b'!', _) => {
                self.cursor.advance();
                IdentKind::MethodOnly
            }
            _ => self.bare_kind(start),
        };

        self.push_lexeme(start, |text, span| Element::identifier(kind, text, span))?;
        Ok(true)
    }

    fn keyword_with_suffix(&self, start: u32) -> bool {
        let with_suffix = self.cursor.slice(start, self.cursor.pos() + 1);
        Keyword::lookup(with_suffix).is_some()
    }

    fn bare_kind(&self, start: u32) -> IdentKind {
        let first = self.cursor.slice_from(start).chars().next();
        if first.is_some_and(char::is_uppercase) {
            IdentKind::Constant
        } else {
            IdentKind::LocalVariable
        }
    }
}
