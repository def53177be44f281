//! The scanning engine.
//!
//! One forward pass over the source. At each position the productions are
//! tried in a fixed order: line terminator, whitespace, comment, `__END__`,
//! then a token (identifier or keyword, literal, operator or punctuator).
//! A production that does not match leaves the cursor where it found it.

mod comment;
mod ident;
mod literal;
mod number;
mod operator;

use garnet_ir::{Element, ElementArena, Span, Spanned, TriviaKind};
use garnet_lexer_core::{Cursor, SourceBuffer};
use tracing::trace;

use crate::{LexError, LexErrorKind};

/// Per-call scanning state. Nothing here outlives one `tokenize` call.
pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
    arena: ElementArena,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(buf: &'src SourceBuffer<'_>) -> Self {
        Scanner {
            cursor: buf.cursor(),
            arena: ElementArena::new(buf.as_str()),
        }
    }

    /// Scan to end of input (or `__END__`) and close with the sentinel.
    pub(crate) fn run(mut self) -> Result<ElementArena, LexError> {
        while !self.cursor.is_eof() {
            if self.line_terminator() || self.whitespace() || self.comment()? {
                continue;
            }
            if self.program_end() {
                break;
            }
            if !self.token()? {
                return Err(self.unrecognized());
            }
        }

        let end = self.cursor.pos();
        self.arena.push(Element::end_of_program(end));
        trace!(pos = end, "end of program");
        Ok(self.arena)
    }

    fn token(&mut self) -> Result<bool, LexError> {
        Ok(self.identifier()? || self.literal()? || self.operator()?)
    }

    fn unrecognized(&self) -> LexError {
        let start = self.cursor.pos();
        let ch = self.cursor.current_char().unwrap_or('\0');
        let len = u32::try_from(ch.len_utf8()).unwrap_or(1);
        LexError::new(
            Span::new(start, start + len),
            LexErrorKind::UnrecognizedCharacter { ch },
        )
    }

    // ─── Trivia ───

    /// `\n` or `\r\n`.
    fn line_terminator(&mut self) -> bool {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b'\n' => self.cursor.advance(),
            b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
            _ => return false,
        }
        self.push_trivia(TriviaKind::LineTerminator, start);
        true
    }

    /// A maximal run of blanks and backslash-newline continuations.
    ///
    /// A `\r` that starts a `\r\n` ends the run so the pair becomes a line
    /// terminator.
    fn whitespace(&mut self) -> bool {
        let start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                b'\t' | 0x0b | 0x0c | b' ' => self.cursor.advance(),
                b'\r' if self.cursor.peek() != b'\n' => self.cursor.advance(),
                b'\\' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
                b'\\' if self.cursor.peek() == b'\r' && self.cursor.peek2() == b'\n' => {
                    self.cursor.advance_n(3);
                }
                _ => break,
            }
        }
        if self.cursor.pos() == start {
            return false;
        }
        self.push_trivia(TriviaKind::Whitespace, start);
        true
    }

    /// Whether the cursor sits at the start of a line, judged by what has
    /// been scanned so far.
    fn at_beginning_of_line(&self) -> bool {
        let Some(last) = self.arena.last() else {
            return true;
        };
        match last.as_trivia() {
            Some(TriviaKind::LineTerminator) => true,
            Some(TriviaKind::Whitespace) => self.arena.text(last).ends_with('\n'),
            _ => false,
        }
    }

    /// `__END__` alone at the start of a line stops the scan. The sentinel
    /// goes where `__END__` starts and everything after it is dropped.
    fn program_end(&mut self) -> bool {
        if !self.cursor.rest_starts_with("__END__") || !self.at_beginning_of_line() {
            return false;
        }
        let mut probe = self.cursor;
        probe.advance_n(7);
        if !(probe.is_eof() || probe.at_line_terminator()) {
            return false;
        }
        trace!(pos = self.cursor.pos(), "__END__");
        true
    }

    // ─── Element output ───

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    fn push_trivia(&mut self, kind: TriviaKind, start: u32) {
        let span = self.span_from(start);
        self.push(Element::trivia(kind, span));
    }

    fn push(&mut self, element: Element) {
        trace!(
            start = element.start(),
            end = element.end(),
            kind = %element.kind(),
            "element"
        );
        self.arena.push(element);
    }

    /// Push an element built from the lexeme `start..pos`, turning a
    /// construction failure into a lex error at that span.
    fn push_lexeme(
        &mut self,
        start: u32,
        build: impl FnOnce(&str, Span) -> Result<Element, garnet_ir::ElementError>,
    ) -> Result<(), LexError> {
        let span = self.span_from(start);
        let element = build(self.cursor.slice_from(start), span)
            .map_err(|err| LexError::new(span, err.into()))?;
        debug_assert_eq!(element.span(), span);
        self.push(element);
        Ok(())
    }
}
