//! Punctuators.

use std::fmt;

/// A punctuator lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Punctuator {
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    ColonColon,
    Comma,
    Semicolon,
    DotDot,
    DotDotDot,
    Question,
    FatArrow,
    Dot,
}

impl Punctuator {
    pub const ALL: [Punctuator; 15] = [
        Punctuator::LBracket,
        Punctuator::RBracket,
        Punctuator::LParen,
        Punctuator::RParen,
        Punctuator::LBrace,
        Punctuator::RBrace,
        Punctuator::Colon,
        Punctuator::ColonColon,
        Punctuator::Comma,
        Punctuator::Semicolon,
        Punctuator::DotDot,
        Punctuator::DotDotDot,
        Punctuator::Question,
        Punctuator::FatArrow,
        Punctuator::Dot,
    ];

    pub fn lookup(text: &str) -> Option<Punctuator> {
        let punct = match text {
            "[" => Punctuator::LBracket,
            "]" => Punctuator::RBracket,
            "(" => Punctuator::LParen,
            ")" => Punctuator::RParen,
            "{" => Punctuator::LBrace,
            "}" => Punctuator::RBrace,
            ":" => Punctuator::Colon,
            "::" => Punctuator::ColonColon,
            "," => Punctuator::Comma,
            ";" => Punctuator::Semicolon,
            ".." => Punctuator::DotDot,
            "..." => Punctuator::DotDotDot,
            "?" => Punctuator::Question,
            "=>" => Punctuator::FatArrow,
            "." => Punctuator::Dot,
            _ => return None,
        };
        Some(punct)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Punctuator::LBracket => "[",
            Punctuator::RBracket => "]",
            Punctuator::LParen => "(",
            Punctuator::RParen => ")",
            Punctuator::LBrace => "{",
            Punctuator::RBrace => "}",
            Punctuator::Colon => ":",
            Punctuator::ColonColon => "::",
            Punctuator::Comma => ",",
            Punctuator::Semicolon => ";",
            Punctuator::DotDot => "..",
            Punctuator::DotDotDot => "...",
            Punctuator::Question => "?",
            Punctuator::FatArrow => "=>",
            Punctuator::Dot => ".",
        }
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
