//! Lexer for Garnet, a Ruby-like language.
//!
//! [`tokenize`] scans a whole source string into an [`ElementArena`]: trivia
//! (whitespace, line terminators, comments) interleaved with tokens and
//! closed by the end-of-program sentinel. Call
//! [`ElementArena::tokens`] on the result to walk the tokens with their
//! trivia attached.
//!
//! # Architecture
//!
//! - `garnet_lexer_core` supplies the sentinel-terminated buffer and cursor
//! - `garnet_ir` supplies the element types and the trivia attachment pass
//! - this crate decides what each span of source is
//!
//! Every call gets its own scanner, so `tokenize` can run concurrently on
//! different inputs without any locking.

mod lex_error;
mod scanner;

use std::sync::Once;

use garnet_ir::Span;
use garnet_lexer_core::SourceBuffer;

pub use garnet_ir::{
    BigInt, Element, ElementArena, ElementId, ElementKind, ElementRef, IdentKind, Keyword,
    Operator, Punctuator, Spanned, Token, TokenKind, Tokens, TriviaKind,
};
pub use lex_error::{LexError, LexErrorKind};

use scanner::Scanner;

/// Scan `source` into lexical elements.
///
/// Fails on the first position no production matches, or on a literal that
/// starts like a number but is malformed. Nothing is recovered.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<ElementArena, LexError> {
    if Span::try_from_range(0..source.len()).is_err() {
        return Err(LexError::new(
            Span::point(0),
            LexErrorKind::SourceTooLarge { len: source.len() },
        ));
    }

    let buf = SourceBuffer::new(source);
    let arena = Scanner::new(&buf).run().inspect_err(|err| {
        tracing::debug!(span = %err.span, error = %err, "tokenize failed");
    })?;

    tracing::debug!(elements = arena.len(), "tokenize complete");
    Ok(arena)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
///
/// ```text
/// RUST_LOG=garnet_lexer=debug cargo test -p garnet_lexer
/// RUST_LOG=garnet_lexer=trace cargo test -p garnet_lexer
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
