//! Single-line and `=begin`/`=end` comments.

use garnet_ir::{Span, TriviaKind};
use tracing::trace;

use super::Scanner;
use crate::{LexError, LexErrorKind};

/// Blanks that may separate a delimiter from trailing text on its line.
fn is_line_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c | b'\r')
}

impl Scanner<'_> {
    pub(super) fn comment(&mut self) -> Result<bool, LexError> {
        match self.cursor.current() {
            b'#' => {
                let start = self.cursor.pos();
                self.cursor.eat_until_newline_or_eof();
                self.push_trivia(TriviaKind::SingleLineComment, start);
                Ok(true)
            }
            b'=' if self.cursor.rest_starts_with("=begin") && self.at_beginning_of_line() => {
                self.multi_line_comment()
            }
            _ => Ok(false),
        }
    }

    /// `=begin` ... `=end`.
    ///
    /// The `=begin` line needs its terminator; without one this is not a
    /// comment and the `=` is left for the operator scanner. An `=end`
    /// glued to more text (`=endless`) is body, not a terminator. The
    /// element ends at the end of the `=end` line, before its terminator.
    fn multi_line_comment(&mut self) -> Result<bool, LexError> {
        let saved = self.cursor;
        let start = saved.pos();
        self.cursor.advance_n(6);

        if !self.rest_of_delimiter_line() || self.cursor.is_eof() {
            self.cursor = saved;
            return Ok(false);
        }
        self.skip_line_terminator();

        loop {
            if self.cursor.is_eof() {
                return Err(LexError::new(
                    Span::new(start, self.cursor.source_len()),
                    LexErrorKind::UnterminatedMultiLineComment,
                ));
            }

            if self.cursor.rest_starts_with("=end") {
                let line_start = self.cursor;
                self.cursor.advance_n(4);
                if self.rest_of_delimiter_line() {
                    self.push_trivia(TriviaKind::MultiLineComment, start);
                    return Ok(true);
                }
                trace!(pos = line_start.pos(), "=end glued to text, kept as body");
                self.cursor = line_start;
            }

            self.cursor.eat_until_newline_or_eof();
            self.skip_line_terminator();
        }
    }

    /// After a delimiter: accept end of line, or blanks and any text up to
    /// the end of the line. Anything else means the delimiter is glued to
    /// an identifier-like tail.
    fn rest_of_delimiter_line(&mut self) -> bool {
        if self.cursor.is_eof() || self.cursor.at_line_terminator() {
            return true;
        }
        if is_line_blank(self.cursor.current()) {
            self.cursor.eat_until_newline_or_eof();
            return true;
        }
        false
    }

    fn skip_line_terminator(&mut self) {
        match self.cursor.current() {
            b'\n' => self.cursor.advance(),
            b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
            _ => {}
        }
    }
}
