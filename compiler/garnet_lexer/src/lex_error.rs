//! Lexer error types.
//!
//! A [`LexError`] carries WHERE (`span`) and WHAT (`kind`). Every lexer
//! error aborts the `tokenize` call that raised it.

use ariadne::{Config, Label, Report, ReportKind, Source};
use garnet_ir::{ElementError, Span};
use thiserror::Error;

/// A lexer error located in the source.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No production matches at this position.
    #[error("unrecognized character {ch:?}")]
    UnrecognizedCharacter { ch: char },

    /// `=begin` with no `=end` line before end of input.
    #[error("unterminated `=begin` comment")]
    UnterminatedMultiLineComment,

    /// A base prefix (`0x`, `0b`, `0o`, `0d`, `0_`) with no digit after it.
    #[error("expected base-{radix} digits")]
    MissingDigits { radix: u32 },

    #[error("malformed float literal")]
    MalformedFloat,

    /// Offsets are `u32`.
    #[error("source of {len} bytes is too large to tokenize")]
    SourceTooLarge { len: usize },

    /// The scanner classified a lexeme as a kind that rejects it.
    #[error(transparent)]
    InvalidElement(#[from] ElementError),
}

impl LexErrorKind {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnrecognizedCharacter { .. } => "L001",
            LexErrorKind::UnterminatedMultiLineComment => "L002",
            LexErrorKind::MissingDigits { .. } => "L003",
            LexErrorKind::MalformedFloat => "L004",
            LexErrorKind::SourceTooLarge { .. } => "L005",
            LexErrorKind::InvalidElement(_) => "L900",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexErrorKind::UnrecognizedCharacter { .. } => "not valid here",
            LexErrorKind::UnterminatedMultiLineComment => "comment starts here",
            LexErrorKind::MissingDigits { .. } => "prefix needs at least one digit",
            LexErrorKind::MalformedFloat => "cannot be read as a float",
            LexErrorKind::SourceTooLarge { .. } => "source too large",
            LexErrorKind::InvalidElement(_) => "lexeme does not fit its token kind",
        }
    }
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// Render a source snippet for this error, without colour.
    ///
    /// Falls back to the plain message if the report cannot be written.
    pub fn render(&self, filename: &str, source: &str) -> String {
        // ariadne counts characters, spans count bytes.
        let to_char = |byte: usize| source.get(..byte).map_or(byte, |s| s.chars().count());
        let range = to_char(self.span.to_range().start)..to_char(self.span.to_range().end);
        let mut out = Vec::new();

        let written = Report::build(ReportKind::Error, filename, range.start)
            .with_config(Config::default().with_color(false))
            .with_code(self.kind.code())
            .with_message(self.kind.to_string())
            .with_label(Label::new((filename, range)).with_message(self.kind.label()))
            .finish()
            .write((filename, Source::from(source)), &mut out);

        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
