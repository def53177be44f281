//! Lexical elements: trivia and tokens.

use std::fmt;

use num_bigint::BigInt;

use crate::{ElementError, IdentKind, Keyword, Operator, Punctuator, Span, Spanned};

/// Index of an element inside an [`ElementArena`](crate::ElementArena).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u32);

impl ElementId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ElementId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

const _: () = assert!(size_of::<ElementId>() == 4);

/// Non-significant spans attached to tokens rather than yielded as tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriviaKind {
    /// A run of spaces, tabs, vertical tabs, form feeds, carriage returns not
    /// starting a `\r\n`, and backslash-newline continuations.
    Whitespace,
    /// A single `\n` or `\r\n`.
    LineTerminator,
    /// `#` up to the end of the line.
    SingleLineComment,
    /// A `=begin` ... `=end` block.
    MultiLineComment,
}

/// The token taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Zero-length sentinel closing every scan.
    EndOfProgram,
    Keyword(Keyword),
    Operator(Operator),
    Punctuator(Punctuator),
    /// Arbitrary-precision value, independent of the base it was written in.
    Integer(BigInt),
    /// `f64` stored as bits.
    Float(u64),
    Ident(IdentKind),
}

impl TokenKind {
    /// Short human-readable name, for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::EndOfProgram => "end of program",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Punctuator(_) => "punctuator",
            TokenKind::Integer(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::Ident(kind) => kind.name(),
        }
    }

    pub fn is_end_of_program(&self) -> bool {
        matches!(self, TokenKind::EndOfProgram)
    }

    pub fn ident_kind(&self) -> Option<IdentKind> {
        match self {
            TokenKind::Ident(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Trivia or token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Trivia(TriviaKind),
    Token(TokenKind),
}

/// A span of source text and what it was scanned as.
///
/// Elements are immutable once built. The constructors that take a lexeme
/// reject text that does not fit the kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    kind: ElementKind,
    span: Span,
}

impl Element {
    pub fn trivia(kind: TriviaKind, span: Span) -> Self {
        Element {
            kind: ElementKind::Trivia(kind),
            span,
        }
    }

    pub fn end_of_program(offset: u32) -> Self {
        Element {
            kind: ElementKind::Token(TokenKind::EndOfProgram),
            span: Span::point(offset),
        }
    }

    /// Build a keyword element; `lexeme` must be a reserved word.
    pub fn keyword(lexeme: &str, span: Span) -> Result<Self, ElementError> {
        let keyword = Keyword::lookup(lexeme).ok_or_else(|| ElementError::NotAKeyword {
            lexeme: lexeme.to_owned(),
        })?;
        Ok(Self::token(TokenKind::Keyword(keyword), span))
    }

    /// Build an operator or punctuator element, whichever set `lexeme` is in.
    pub fn operator_or_punctuator(lexeme: &str, span: Span) -> Result<Self, ElementError> {
        let kind = if let Some(op) = Operator::lookup(lexeme) {
            TokenKind::Operator(op)
        } else if let Some(punct) = Punctuator::lookup(lexeme) {
            TokenKind::Punctuator(punct)
        } else {
            return Err(ElementError::NotAnOperatorOrPunctuator {
                lexeme: lexeme.to_owned(),
            });
        };
        Ok(Self::token(kind, span))
    }

    pub fn identifier(kind: IdentKind, lexeme: &str, span: Span) -> Result<Self, ElementError> {
        kind.validate(lexeme)?;
        Ok(Self::token(TokenKind::Ident(kind), span))
    }

    pub fn integer(value: BigInt, span: Span) -> Self {
        Self::token(TokenKind::Integer(value), span)
    }

    pub fn float(value: f64, span: Span) -> Self {
        Self::token(TokenKind::Float(value.to_bits()), span)
    }

    fn token(kind: TokenKind, span: Span) -> Self {
        Element {
            kind: ElementKind::Token(kind),
            span,
        }
    }

    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Start offset.
    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// End offset (`start + len`).
    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    pub fn as_token(&self) -> Option<&TokenKind> {
        match &self.kind {
            ElementKind::Token(kind) => Some(kind),
            ElementKind::Trivia(_) => None,
        }
    }

    pub fn as_trivia(&self) -> Option<TriviaKind> {
        match self.kind {
            ElementKind::Trivia(kind) => Some(kind),
            ElementKind::Token(_) => None,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self.kind, ElementKind::Token(_))
    }

    pub fn is_trivia(&self, kind: TriviaKind) -> bool {
        self.as_trivia() == Some(kind)
    }

    pub fn is_end_of_program(&self) -> bool {
        matches!(self.kind, ElementKind::Token(TokenKind::EndOfProgram))
    }
}

impl Spanned for Element {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Trivia(TriviaKind::Whitespace) => f.write_str("whitespace"),
            ElementKind::Trivia(TriviaKind::LineTerminator) => f.write_str("line terminator"),
            ElementKind::Trivia(TriviaKind::SingleLineComment) => f.write_str("comment"),
            ElementKind::Trivia(TriviaKind::MultiLineComment) => {
                f.write_str("multi-line comment")
            }
            ElementKind::Token(kind) => f.write_str(kind.display_name()),
        }
    }
}
