//! Garnet IR - lexical element types.
//!
//! This crate contains the data model produced by `garnet_lexer`:
//! - [`Span`] for source locations
//! - [`Element`] and [`ElementArena`], the flat scan result (trivia interleaved
//!   with tokens, terminated by the end-of-program sentinel)
//! - the token taxonomy ([`TokenKind`], [`Keyword`], [`Operator`],
//!   [`Punctuator`], [`IdentKind`])
//! - [`Tokens`], the pass that attaches trivia to tokens and yields [`Token`]
//!   views with line-position queries
//!
//! # Design
//!
//! - **Flatten Everything**: tokens refer to their neighbours and trivia by
//!   [`ElementId`] into the arena, never by pointer.
//! - **Validate on construction**: an [`Element`] carrying a keyword,
//!   operator, punctuator, or identifier can only be built from a lexeme that
//!   fits it, so every consumer can trust the kind it matches on.
//!
//! Float payloads are stored as `u64` bits so every type can derive `Eq` and
//! `Hash`.

mod arena;
mod element;
mod error;
mod ident;
mod keyword;
mod operator;
mod punctuator;
mod span;
mod tokens;
mod traits;

pub use arena::ElementArena;
pub use element::{Element, ElementId, ElementKind, TokenKind, TriviaKind};
pub use error::ElementError;
pub use ident::IdentKind;
pub use keyword::Keyword;
pub use num_bigint::BigInt;
pub use operator::Operator;
pub use punctuator::Punctuator;
pub use span::{Span, SpanError};
pub use tokens::{ElementRef, Token, Tokens};
pub use traits::Spanned;
