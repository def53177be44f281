//! Operators.
//!
//! Operators and punctuators are disjoint closed sets. Operators that may be
//! defined as methods are reported by [`Operator::is_method_name`]; compound
//! assignments know their base operator.

use std::fmt;

/// An operator lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `!`
    Not,
    /// `!=`
    NotEq,
    /// `!~`
    NotMatch,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `^`
    Caret,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `<=>`
    Compare,
    /// `==`
    EqEq,
    /// `===`
    CaseEq,
    /// `=~`
    Match,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `**`
    StarStar,
    /// `~`
    Tilde,
    /// `+@`
    UnaryPlus,
    /// `-@`
    UnaryMinus,
    /// `[]`
    Index,
    /// `[]=`
    IndexAssign,
    /// `'`
    Quote,
    /// `=`
    Assign,
    /// `&&=`
    AndAndAssign,
    /// `||=`
    OrOrAssign,
    /// `^=`
    CaretAssign,
    /// `&=`
    AmpAssign,
    /// `|=`
    PipeAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    PercentAssign,
    /// `**=`
    StarStarAssign,
}

impl Operator {
    /// Every operator.
    pub const ALL: [Operator; 44] = [
        Operator::Not,
        Operator::NotEq,
        Operator::NotMatch,
        Operator::AndAnd,
        Operator::OrOr,
        Operator::Caret,
        Operator::Amp,
        Operator::Pipe,
        Operator::Compare,
        Operator::EqEq,
        Operator::CaseEq,
        Operator::Match,
        Operator::Gt,
        Operator::GtEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Shl,
        Operator::Shr,
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
        Operator::StarStar,
        Operator::Tilde,
        Operator::UnaryPlus,
        Operator::UnaryMinus,
        Operator::Index,
        Operator::IndexAssign,
        Operator::Quote,
        Operator::Assign,
        Operator::AndAndAssign,
        Operator::OrOrAssign,
        Operator::CaretAssign,
        Operator::AmpAssign,
        Operator::PipeAssign,
        Operator::ShlAssign,
        Operator::ShrAssign,
        Operator::PlusAssign,
        Operator::MinusAssign,
        Operator::StarAssign,
        Operator::SlashAssign,
        Operator::PercentAssign,
        Operator::StarStarAssign,
    ];

    /// Look up an operator by its exact text.
    pub fn lookup(text: &str) -> Option<Operator> {
        let op = match text {
            "!" => Operator::Not,
            "!=" => Operator::NotEq,
            "!~" => Operator::NotMatch,
            "&&" => Operator::AndAnd,
            "||" => Operator::OrOr,
            "^" => Operator::Caret,
            "&" => Operator::Amp,
            "|" => Operator::Pipe,
            "<=>" => Operator::Compare,
            "==" => Operator::EqEq,
            "===" => Operator::CaseEq,
            "=~" => Operator::Match,
            ">" => Operator::Gt,
            ">=" => Operator::GtEq,
            "<" => Operator::Lt,
            "<=" => Operator::LtEq,
            "<<" => Operator::Shl,
            ">>" => Operator::Shr,
            "+" => Operator::Plus,
            "-" => Operator::Minus,
            "*" => Operator::Star,
            "/" => Operator::Slash,
            "%" => Operator::Percent,
            "**" => Operator::StarStar,
            "~" => Operator::Tilde,
            "+@" => Operator::UnaryPlus,
            "-@" => Operator::UnaryMinus,
            "[]" => Operator::Index,
            "[]=" => Operator::IndexAssign,
            "'" => Operator::Quote,
            "=" => Operator::Assign,
            "&&=" => Operator::AndAndAssign,
            "||=" => Operator::OrOrAssign,
            "^=" => Operator::CaretAssign,
            "&=" => Operator::AmpAssign,
            "|=" => Operator::PipeAssign,
            "<<=" => Operator::ShlAssign,
            ">>=" => Operator::ShrAssign,
            "+=" => Operator::PlusAssign,
            "-=" => Operator::MinusAssign,
            "*=" => Operator::StarAssign,
            "/=" => Operator::SlashAssign,
            "%=" => Operator::PercentAssign,
            "**=" => Operator::StarStarAssign,
            _ => return None,
        };
        Some(op)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::NotEq => "!=",
            Operator::NotMatch => "!~",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Caret => "^",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Compare => "<=>",
            Operator::EqEq => "==",
            Operator::CaseEq => "===",
            Operator::Match => "=~",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::StarStar => "**",
            Operator::Tilde => "~",
            Operator::UnaryPlus => "+@",
            Operator::UnaryMinus => "-@",
            Operator::Index => "[]",
            Operator::IndexAssign => "[]=",
            Operator::Quote => "'",
            Operator::Assign => "=",
            Operator::AndAndAssign => "&&=",
            Operator::OrOrAssign => "||=",
            Operator::CaretAssign => "^=",
            Operator::AmpAssign => "&=",
            Operator::PipeAssign => "|=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::PlusAssign => "+=",
            Operator::MinusAssign => "-=",
            Operator::StarAssign => "*=",
            Operator::SlashAssign => "/=",
            Operator::PercentAssign => "%=",
            Operator::StarStarAssign => "**=",
        }
    }

    /// Whether this operator can be defined as a method (`def <=>(other)`).
    ///
    /// Plain assignment, the logical operators, and every compound
    /// assignment are excluded.
    pub const fn is_method_name(self) -> bool {
        !matches!(
            self,
            Operator::Not
                | Operator::NotEq
                | Operator::NotMatch
                | Operator::AndAnd
                | Operator::OrOr
                | Operator::Assign
        ) && !self.is_compound_assignment()
    }

    pub const fn is_compound_assignment(self) -> bool {
        self.assignment_base().is_some()
    }

    /// For a compound assignment, the operator it applies (`+=` gives `+`).
    pub const fn assignment_base(self) -> Option<Operator> {
        match self {
            Operator::AndAndAssign => Some(Operator::AndAnd),
            Operator::OrOrAssign => Some(Operator::OrOr),
            Operator::CaretAssign => Some(Operator::Caret),
            Operator::AmpAssign => Some(Operator::Amp),
            Operator::PipeAssign => Some(Operator::Pipe),
            Operator::ShlAssign => Some(Operator::Shl),
            Operator::ShrAssign => Some(Operator::Shr),
            Operator::PlusAssign => Some(Operator::Plus),
            Operator::MinusAssign => Some(Operator::Minus),
            Operator::StarAssign => Some(Operator::Star),
            Operator::SlashAssign => Some(Operator::Slash),
            Operator::PercentAssign => Some(Operator::Percent),
            Operator::StarStarAssign => Some(Operator::StarStar),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
