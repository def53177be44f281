//! Low-level source access for the Garnet lexer.
//!
//! This crate has no `garnet_*` dependencies. It owns the sentinel-terminated
//! [`SourceBuffer`] and the [`Cursor`] the scanning engine walks it with.
//! Everything language-specific (what a comment or an operator is) lives in
//! `garnet_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
