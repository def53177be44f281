//! Identifier variants and their lexeme rules.

use std::fmt;

use crate::ElementError;

/// The identifier family.
///
/// Each variant constrains the shape of its lexeme; [`IdentKind::validate`]
/// enforces that when an identifier element is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentKind {
    /// `name`, starting with a lowercase letter or `_`.
    LocalVariable,
    /// `Name`, starting with an uppercase letter.
    Constant,
    /// `$name`
    GlobalVariable,
    /// `@name`
    InstanceVariable,
    /// `@@name`
    ClassVariable,
    /// `name=`
    AssignmentTarget,
    /// `name?` or `name!`
    MethodOnly,
}

impl IdentKind {
    /// Check that `lexeme` has the shape this variant requires.
    pub fn validate(self, lexeme: &str) -> Result<(), ElementError> {
        let Some(first) = lexeme.chars().next() else {
            return Err(ElementError::EmptyLexeme { kind: self.name() });
        };

        let ok = match self {
            IdentKind::LocalVariable => first == '_' || first.is_lowercase(),
            IdentKind::Constant => first.is_uppercase(),
            IdentKind::GlobalVariable => lexeme.len() > 1 && first == '$',
            IdentKind::ClassVariable => lexeme.len() > 2 && lexeme.starts_with("@@"),
            IdentKind::InstanceVariable => {
                lexeme.len() > 1 && first == '@' && !lexeme.starts_with("@@")
            }
            IdentKind::AssignmentTarget => lexeme.len() > 1 && lexeme.ends_with('='),
            IdentKind::MethodOnly => {
                lexeme.len() > 1 && (lexeme.ends_with('?') || lexeme.ends_with('!'))
            }
        };

        if ok {
            Ok(())
        } else {
            Err(ElementError::InvalidIdentifier {
                kind: self,
                lexeme: lexeme.to_owned(),
            })
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IdentKind::LocalVariable => "local variable",
            IdentKind::Constant => "constant",
            IdentKind::GlobalVariable => "global variable",
            IdentKind::InstanceVariable => "instance variable",
            IdentKind::ClassVariable => "class variable",
            IdentKind::AssignmentTarget => "assignment target",
            IdentKind::MethodOnly => "method",
        }
    }
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
