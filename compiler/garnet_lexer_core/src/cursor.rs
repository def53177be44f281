//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. EOF is the sentinel (`0x00`) at or past
//! the source length; a NUL before that is an interior null that the scanner
//! must reject on its own.

/// Byte-level cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`]: saving one in a local and assigning it back is how
/// the scanner backtracks out of a production that turned out not to match.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after it are `0x00` as well.
/// `text` is the same content as `buf[..source_len]`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    text: &'a str,
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            text,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Returns the full character at the current position, or `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// An interior null byte is not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring.
    ///
    /// `start..end` must lie within the source and on character boundaries,
    /// which holds for offsets produced by the scanner.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// The unscanned remainder of the source.
    pub fn rest(&self) -> &'a str {
        let pos = self.pos.min(self.source_len) as usize;
        &self.text[pos..]
    }

    /// Returns `true` if the unscanned remainder starts with `prefix`.
    pub fn rest_starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance while `pred` returns `true` for the current character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a char is at most 4 bytes"
    )]
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.advance_n(c.len_utf8() as u32);
        }
    }

    /// Advance to the next line terminator or EOF.
    ///
    /// Stops on `\n`, or on the `\r` of a `\r\n` pair. A lone `\r` is line
    /// content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) if offset > 0 && remaining[offset - 1] == b'\r' => {
                self.pos += offset as u32 - 1;
            }
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Returns `true` if a line terminator (`\n` or `\r\n`) starts here.
    #[inline]
    pub fn at_line_terminator(&self) -> bool {
        self.current() == b'\n' || (self.current() == b'\r' && self.peek() == b'\n')
    }
}
