//! Reserved words.
//!
//! The lookup uses the word's length as a first-pass filter (reserved words
//! range from 2 to 12 bytes), then matches against the words of that length.

use std::fmt;

/// A reserved word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    /// `__LINE__`
    Line,
    /// `__ENCODING__`
    Encoding,
    /// `__FILE__`
    File,
    /// `BEGIN`
    BeginBlock,
    /// `END`
    EndBlock,
    Alias,
    And,
    Begin,
    Break,
    Case,
    Class,
    Def,
    /// `defined?`
    Defined,
    Do,
    Else,
    Elsif,
    End,
    Ensure,
    For,
    False,
    If,
    In,
    Module,
    Next,
    Nil,
    Not,
    Or,
    Redo,
    Rescue,
    Retry,
    Return,
    /// `self`
    SelfValue,
    Super,
    Then,
    True,
    Undef,
    Unless,
    Until,
    When,
    While,
    Yield,
}

impl Keyword {
    /// Every reserved word, in lexeme order.
    pub const ALL: [Keyword; 41] = [
        Keyword::Line,
        Keyword::Encoding,
        Keyword::File,
        Keyword::BeginBlock,
        Keyword::EndBlock,
        Keyword::Alias,
        Keyword::And,
        Keyword::Begin,
        Keyword::Break,
        Keyword::Case,
        Keyword::Class,
        Keyword::Def,
        Keyword::Defined,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elsif,
        Keyword::End,
        Keyword::Ensure,
        Keyword::For,
        Keyword::False,
        Keyword::If,
        Keyword::In,
        Keyword::Module,
        Keyword::Next,
        Keyword::Nil,
        Keyword::Not,
        Keyword::Or,
        Keyword::Redo,
        Keyword::Rescue,
        Keyword::Retry,
        Keyword::Return,
        Keyword::SelfValue,
        Keyword::Super,
        Keyword::Then,
        Keyword::True,
        Keyword::Undef,
        Keyword::Unless,
        Keyword::Until,
        Keyword::When,
        Keyword::While,
        Keyword::Yield,
    ];

    /// Look up a reserved word by its exact text.
    #[inline]
    pub fn lookup(text: &str) -> Option<Keyword> {
        let len = text.len();
        if !(2..=12).contains(&len) {
            return None;
        }

        match len {
            2 => match text {
                "do" => Some(Keyword::Do),
                "if" => Some(Keyword::If),
                "in" => Some(Keyword::In),
                "or" => Some(Keyword::Or),
                _ => None,
            },
            3 => match text {
                "END" => Some(Keyword::EndBlock),
                "and" => Some(Keyword::And),
                "def" => Some(Keyword::Def),
                "end" => Some(Keyword::End),
                "for" => Some(Keyword::For),
                "nil" => Some(Keyword::Nil),
                "not" => Some(Keyword::Not),
                _ => None,
            },
            4 => match text {
                "case" => Some(Keyword::Case),
                "else" => Some(Keyword::Else),
                "next" => Some(Keyword::Next),
                "redo" => Some(Keyword::Redo),
                "self" => Some(Keyword::SelfValue),
                "then" => Some(Keyword::Then),
                "true" => Some(Keyword::True),
                "when" => Some(Keyword::When),
                _ => None,
            },
            5 => match text {
                "BEGIN" => Some(Keyword::BeginBlock),
                "alias" => Some(Keyword::Alias),
                "begin" => Some(Keyword::Begin),
                "break" => Some(Keyword::Break),
                "class" => Some(Keyword::Class),
                "elsif" => Some(Keyword::Elsif),
                "false" => Some(Keyword::False),
                "retry" => Some(Keyword::Retry),
                "super" => Some(Keyword::Super),
                "undef" => Some(Keyword::Undef),
                "until" => Some(Keyword::Until),
                "while" => Some(Keyword::While),
                "yield" => Some(Keyword::Yield),
                _ => None,
            },
            6 => match text {
                "ensure" => Some(Keyword::Ensure),
                "module" => Some(Keyword::Module),
                "rescue" => Some(Keyword::Rescue),
                "return" => Some(Keyword::Return),
                "unless" => Some(Keyword::Unless),
                _ => None,
            },
            8 => match text {
                "__LINE__" => Some(Keyword::Line),
                "__FILE__" => Some(Keyword::File),
                "defined?" => Some(Keyword::Defined),
                _ => None,
            },
            12 => match text {
                "__ENCODING__" => Some(Keyword::Encoding),
                _ => None,
            },
            _ => None,
        }
    }

    /// The source text of this reserved word.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Line => "__LINE__",
            Keyword::Encoding => "__ENCODING__",
            Keyword::File => "__FILE__",
            Keyword::BeginBlock => "BEGIN",
            Keyword::EndBlock => "END",
            Keyword::Alias => "alias",
            Keyword::And => "and",
            Keyword::Begin => "begin",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Class => "class",
            Keyword::Def => "def",
            Keyword::Defined => "defined?",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elsif => "elsif",
            Keyword::End => "end",
            Keyword::Ensure => "ensure",
            Keyword::For => "for",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Module => "module",
            Keyword::Next => "next",
            Keyword::Nil => "nil",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::Redo => "redo",
            Keyword::Rescue => "rescue",
            Keyword::Retry => "retry",
            Keyword::Return => "return",
            Keyword::SelfValue => "self",
            Keyword::Super => "super",
            Keyword::Then => "then",
            Keyword::True => "true",
            Keyword::Undef => "undef",
            Keyword::Unless => "unless",
            Keyword::Until => "until",
            Keyword::When => "when",
            Keyword::While => "while",
            Keyword::Yield => "yield",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
