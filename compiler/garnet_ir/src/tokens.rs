//! Trivia attachment.
//!
//! [`Tokens`] walks an [`ElementArena`] once, buffering trivia until the next
//! token shows up. At that point the previous token's postfix receives the
//! buffered trivia followed by the new token, and the new token's prefix
//! receives the previous token followed by the same trivia. A token is
//! yielded once its postfix is complete, so the stream runs one token
//! behind the walk. The end-of-program sentinel is yielded last with an
//! empty postfix.

use std::fmt;
use std::iter::FusedIterator;

use num_bigint::BigInt;
use smallvec::SmallVec;

use crate::{
    Element, ElementArena, ElementId, IdentKind, Keyword, Operator, Punctuator, Span, Spanned,
    TokenKind, TriviaKind,
};

/// Attached references. Most tokens have a neighbour plus one or two trivia.
type Attached = SmallVec<[ElementId; 4]>;

/// A borrowed view of one element in an arena.
#[derive(Copy, Clone)]
pub struct ElementRef<'a> {
    arena: &'a ElementArena,
    id: ElementId,
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(arena: &'a ElementArena, id: ElementId) -> Self {
        ElementRef { arena, id }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn element(&self) -> &'a Element {
        &self.arena[self.id]
    }

    pub fn text(&self) -> &'a str {
        self.arena.text(self.element())
    }

    pub fn is_token(&self) -> bool {
        self.element().is_token()
    }

    pub fn trivia_kind(&self) -> Option<TriviaKind> {
        self.element().as_trivia()
    }

    pub fn token_kind(&self) -> Option<&'a TokenKind> {
        self.element().as_token()
    }

    pub fn is_line_terminator(&self) -> bool {
        self.element().is_trivia(TriviaKind::LineTerminator)
    }

    pub fn is_end_of_program(&self) -> bool {
        self.element().is_end_of_program()
    }

    /// The text of a comment without its delimiters.
    ///
    /// For `# text` this is everything after the `#`. For a `=begin` block
    /// it is the lines between the `=begin` and `=end` lines, terminators
    /// included.
    pub fn comment_body(&self) -> Option<&'a str> {
        let text = self.text();
        match self.trivia_kind()? {
            TriviaKind::SingleLineComment => text.strip_prefix('#'),
            TriviaKind::MultiLineComment => {
                let first = text.find('\n')? + 1;
                let last = text.rfind('\n')? + 1;
                text.get(first..last)
            }
            TriviaKind::Whitespace | TriviaKind::LineTerminator => None,
        }
    }
}

impl Spanned for ElementRef<'_> {
    fn span(&self) -> Span {
        self.element().span()
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("kind", self.element().kind())
            .field("span", &self.span())
            .finish()
    }
}

/// `[start,end) text`, with trivia text escaped so it stays on one line.
impl fmt::Display for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        if self.is_end_of_program() {
            write!(f, "{span} <end of program>")
        } else if self.is_token() {
            write!(f, "{span} {}", self.text())
        } else {
            write!(f, "{span} {}", self.text().escape_debug())
        }
    }
}

/// A token together with the trivia and neighbours attached to it.
#[derive(Clone)]
pub struct Token<'a> {
    arena: &'a ElementArena,
    id: ElementId,
    kind: &'a TokenKind,
    prefix: Attached,
    postfix: Attached,
}

impl<'a> Token<'a> {
    fn new(arena: &'a ElementArena, id: ElementId, kind: &'a TokenKind) -> Self {
        Token {
            arena,
            id,
            kind,
            prefix: Attached::new(),
            postfix: Attached::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn as_element(&self) -> ElementRef<'a> {
        ElementRef::new(self.arena, self.id)
    }

    pub fn kind(&self) -> &'a TokenKind {
        self.kind
    }

    /// The literal source text the token was scanned from.
    pub fn text(&self) -> &'a str {
        self.as_element().text()
    }

    pub fn start(&self) -> u32 {
        self.span().start
    }

    pub fn len(&self) -> u32 {
        self.span().len()
    }

    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    pub fn end(&self) -> u32 {
        self.span().end
    }

    /// Previous token (if any), then the trivia between it and this token.
    pub fn prefix(&self) -> impl ExactSizeIterator<Item = ElementRef<'a>> + '_ {
        self.prefix.iter().map(|&id| ElementRef::new(self.arena, id))
    }

    /// The trivia between this token and the next, then the next token.
    pub fn postfix(&self) -> impl ExactSizeIterator<Item = ElementRef<'a>> + '_ {
        self.postfix.iter().map(|&id| ElementRef::new(self.arena, id))
    }

    pub fn previous_token(&self) -> Option<ElementRef<'a>> {
        self.prefix().next().filter(ElementRef::is_token)
    }

    pub fn next_token(&self) -> Option<ElementRef<'a>> {
        self.postfix().last().filter(ElementRef::is_token)
    }

    /// Whether any trivia of `kind` sits between the previous token and this one.
    pub fn preceded_by(&self, kind: TriviaKind) -> bool {
        self.prefix().any(|el| el.trivia_kind() == Some(kind))
    }

    /// Whether any trivia of `kind` sits between this token and the next one.
    pub fn followed_by(&self, kind: TriviaKind) -> bool {
        self.postfix().any(|el| el.trivia_kind() == Some(kind))
    }

    /// True if nothing precedes this token, or the closest thing before it is
    /// a line terminator.
    pub fn is_at_beginning_of_line(&self) -> bool {
        self.prefix().last().map_or(true, |el| el.is_line_terminator())
    }

    /// True if nothing follows this token, or a line terminator or the
    /// end-of-program sentinel appears anywhere after it before the next
    /// token's text.
    pub fn is_at_end_of_line(&self) -> bool {
        self.postfix.is_empty()
            || self
                .postfix()
                .any(|el| el.is_line_terminator() || el.is_end_of_program())
    }

    pub fn is_end_of_program(&self) -> bool {
        self.kind().is_end_of_program()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind() {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind() {
            TokenKind::Operator(op) => Some(*op),
            _ => None,
        }
    }

    pub fn punctuator(&self) -> Option<Punctuator> {
        match self.kind() {
            TokenKind::Punctuator(p) => Some(*p),
            _ => None,
        }
    }

    pub fn ident_kind(&self) -> Option<IdentKind> {
        self.kind().ident_kind()
    }

    pub fn integer_value(&self) -> Option<&'a BigInt> {
        match self.kind() {
            TokenKind::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self.kind() {
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl Spanned for Token<'_> {
    fn span(&self) -> Span {
        self.as_element().span()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("id", &self.id)
            .field("kind", self.kind())
            .field("span", &self.span())
            .field("text", &self.text())
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_element(), f)
    }
}

/// Lazy trivia-attaching pass over an arena. See the module docs.
pub struct Tokens<'a> {
    arena: &'a ElementArena,
    next: usize,
    pending: Attached,
    held: Option<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(arena: &'a ElementArena) -> Self {
        Tokens {
            arena,
            next: 0,
            pending: Attached::new(),
            held: None,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "element count is bounded by source length, which fits in u32"
    )]
    fn next(&mut self) -> Option<Token<'a>> {
        while let Some(element) = self.arena.raw().get(self.next) {
            let id = ElementId::from_raw(self.next as u32);
            self.next += 1;

            let Some(kind) = element.as_token() else {
                self.pending.push(id);
                continue;
            };

            let mut current = Token::new(self.arena, id, kind);
            let ready = self.held.take().map(|mut previous| {
                current.prefix.push(previous.id);
                previous.postfix.extend(self.pending.iter().copied());
                previous.postfix.push(id);
                previous
            });
            current.prefix.extend(self.pending.drain(..));
            self.held = Some(current);

            if ready.is_some() {
                return ready;
            }
        }
        self.held.take()
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
