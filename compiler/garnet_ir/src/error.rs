//! Construction-time errors for lexical elements.
//!
//! An [`ElementError`] means the scanner picked a kind whose lexeme rules the
//! text then failed. The lexer surfaces these as fatal errors at the span of
//! the offending lexeme.

use thiserror::Error;

use crate::IdentKind;

/// A lexeme that does not fit the element kind it was built as.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum ElementError {
    #[error("empty lexeme for {kind}")]
    EmptyLexeme { kind: &'static str },

    #[error("`{lexeme}` is not a reserved word")]
    NotAKeyword { lexeme: String },

    #[error("`{lexeme}` is neither an operator nor a punctuator")]
    NotAnOperatorOrPunctuator { lexeme: String },

    #[error("`{lexeme}` is not a valid {kind} name")]
    InvalidIdentifier { kind: IdentKind, lexeme: String },
}
