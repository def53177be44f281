use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;

#[test]
fn display_includes_span() {
    let err = LexError::new(Span::new(4, 5), LexErrorKind::UnrecognizedCharacter { ch: '`' });
    assert_eq!(err.to_string(), "unrecognized character '`' at [4,5)");
}

#[test]
fn element_errors_convert() {
    let kind: LexErrorKind = ElementError::NotAKeyword {
        lexeme: "nope".into(),
    }
    .into();
    assert_eq!(kind.code(), "L900");
    assert_eq!(kind.to_string(), "`nope` is not a reserved word");
}

#[test]
fn codes_are_distinct() {
    let kinds = [
        LexErrorKind::UnrecognizedCharacter { ch: 'x' },
        LexErrorKind::UnterminatedMultiLineComment,
        LexErrorKind::MissingDigits { radix: 16 },
        LexErrorKind::MalformedFloat,
        LexErrorKind::SourceTooLarge { len: 0 },
    ];
    let mut codes: Vec<_> = kinds.iter().map(LexErrorKind::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn render_names_file_and_message() {
    let source = "x = 1\ny = `oops`\n";
    let err = tokenize(source).unwrap_err();
    let rendered = err.render("main.rb", source);
    assert!(rendered.contains("main.rb"), "{rendered}");
    assert!(rendered.contains("unrecognized character '`'"), "{rendered}");
    assert!(rendered.contains("L001"), "{rendered}");
    assert!(rendered.contains("not valid here"), "{rendered}");
}
