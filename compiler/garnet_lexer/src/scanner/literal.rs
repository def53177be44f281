//! Literal dispatch.
//!
//! Productions are tried in order and the first match wins. Only numeric
//! literals are scanned today; the others never match, so their input falls
//! through to the operator scanner or is reported as unrecognized.

use super::Scanner;
use crate::LexError;

impl Scanner<'_> {
    pub(super) fn literal(&mut self) -> Result<bool, LexError> {
        Ok(self.numeric()?
            || self.string_literal()?
            || self.array_literal()?
            || self.regex_literal()?
            || self.symbol_literal()?)
    }

    /// Quoted strings, percent literals, heredocs, and backtick commands.
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn string_literal(&mut self) -> Result<bool, LexError> {
        Ok(false)
    }

    /// `%w` and `%W` word arrays.
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn array_literal(&mut self) -> Result<bool, LexError> {
        Ok(false)
    }

    /// `/re/` and `%r{re}`.
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn regex_literal(&mut self) -> Result<bool, LexError> {
        Ok(false)
    }

    /// `:name` and `:"name"`.
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn symbol_literal(&mut self) -> Result<bool, LexError> {
        Ok(false)
    }
}
