use garnet_ir::{BigInt, IdentKind, Keyword, Operator, Punctuator, Span, TokenKind};
use pretty_assertions::assert_eq;

use crate::scanner::tests::{eop, error_of, ident, int, kw, local, op, tokens_of};
use crate::{tokenize, LexErrorKind};

fn float(value: f64, text: &str) -> (TokenKind, String) {
    (TokenKind::Float(value.to_bits()), text.to_owned())
}

fn punct(p: Punctuator) -> (TokenKind, String) {
    (TokenKind::Punctuator(p), p.as_str().to_owned())
}

/// Value of the single integer literal in `source`.
fn int_value(source: &str) -> BigInt {
    let arena = tokenize(source).unwrap();
    let token = arena.tokens().next().unwrap();
    token.integer_value().cloned().unwrap()
}

// === Sign ===

#[test]
fn sign_glued_to_name_is_subtraction() {
    assert_eq!(
        tokens_of("value-24"),
        vec![local("value"), op(Operator::Minus), int(24, "24"), eop()]
    );
}

#[test]
fn sign_after_space_belongs_to_literal() {
    assert_eq!(
        tokens_of("value -24"),
        vec![local("value"), int(-24, "-24"), eop()]
    );
}

#[test]
fn leading_sign_at_start_of_input() {
    assert_eq!(tokens_of("\n+32"), vec![int(32, "+32"), eop()]);
}

#[test]
fn sign_after_other_tokens_belongs_to_literal() {
    assert_eq!(
        tokens_of("return -1"),
        vec![kw(Keyword::Return), int(-1, "-1"), eop()]
    );
    assert_eq!(
        tokens_of("(x)-1"),
        vec![
            punct(Punctuator::LParen),
            local("x"),
            punct(Punctuator::RParen),
            int(-1, "-1"),
            eop(),
        ]
    );
    assert_eq!(
        tokens_of("@a-1"),
        vec![ident(IdentKind::InstanceVariable, "@a"), int(-1, "-1"), eop()]
    );
}

#[test]
fn sign_after_method_name() {
    assert_eq!(
        tokens_of("foo?-1"),
        vec![
            ident(IdentKind::MethodOnly, "foo?"),
            op(Operator::Minus),
            int(1, "1"),
            eop()
        ]
    );
    assert_eq!(
        tokens_of("Foo -1"),
        vec![ident(IdentKind::Constant, "Foo"), int(-1, "-1"), eop()]
    );
}

#[test]
fn comment_separates_sign_from_name() {
    assert_eq!(
        tokens_of("x # c\n-1"),
        vec![local("x"), int(-1, "-1"), eop()]
    );
}

// === Integer bases ===

#[test]
fn integer_bases() {
    assert_eq!(int_value("0d1234"), BigInt::from(1234));
    assert_eq!(int_value("0b110"), BigInt::from(6));
    assert_eq!(int_value("0o011"), BigInt::from(9));
    assert_eq!(int_value("0x256"), BigInt::from(0x256));
    assert_eq!(int_value("0XfF"), BigInt::from(255));
    assert_eq!(int_value("0B1"), BigInt::from(1));
    assert_eq!(int_value("0D9"), BigInt::from(9));
}

#[test]
fn octal_without_letter_keeps_first_digit() {
    assert_eq!(int_value("0755"), BigInt::from(0o755));
    assert_eq!(int_value("0_17"), BigInt::from(0o17));
}

#[test]
fn zero() {
    assert_eq!(tokens_of("\n0"), vec![int(0, "0"), eop()]);
    assert_eq!(tokens_of("-0"), vec![int(0, "-0"), eop()]);
}

#[test]
fn zero_followed_by_non_octal_digit() {
    assert_eq!(tokens_of("08"), vec![int(0, "0"), int(8, "8"), eop()]);
}

#[test]
fn integers_are_arbitrary_precision() {
    assert_eq!(
        int_value("0x10000000000000000"),
        BigInt::from(1u128 << 64)
    );
    assert_eq!(
        int_value("-340282366920938463463374607431768211456"),
        -(BigInt::from(u128::MAX) + BigInt::from(1))
    );
}

#[test]
fn underscore_ends_an_integer() {
    assert_eq!(tokens_of("1_000"), vec![int(1, "1"), local("_000"), eop()]);
    assert_eq!(tokens_of("0b1_0"), vec![int(1, "0b1"), local("_0"), eop()]);
    assert_eq!(
        tokens_of("0x1f_ff"),
        vec![int(0x1f, "0x1f"), local("_ff"), eop()]
    );
}

#[test]
fn underscore_after_zero_is_an_octal_prefix() {
    assert_eq!(tokens_of("0_17_1"), vec![int(0o17, "0_17"), local("_1"), eop()]);
}

#[test]
fn doubled_or_trailing_underscore_ends_the_literal() {
    assert_eq!(tokens_of("1__0"), vec![int(1, "1"), local("__0"), eop()]);
    assert_eq!(tokens_of("10_"), vec![int(10, "10"), local("_"), eop()]);
}

#[test]
fn prefix_without_digits_fails() {
    let err = error_of("0x");
    assert_eq!(err.kind, LexErrorKind::MissingDigits { radix: 16 });
    assert_eq!(err.span, Span::new(0, 2));

    let err = error_of("x = 0b2");
    assert_eq!(err.kind, LexErrorKind::MissingDigits { radix: 2 });
    assert_eq!(err.span, Span::new(4, 6));
}

// === Floats ===

#[test]
fn floats() {
    assert_eq!(tokens_of("\n0.0"), vec![float(0.0, "0.0"), eop()]);
    assert_eq!(tokens_of("\n6.12e2"), vec![float(612.0, "6.12e2"), eop()]);
    assert_eq!(tokens_of("\n0e-4"), vec![float(0.0, "0e-4"), eop()]);
    assert_eq!(tokens_of("\n3.2"), vec![float(3.2, "3.2"), eop()]);
    assert_eq!(tokens_of("1E+3"), vec![float(1000.0, "1E+3"), eop()]);
}

#[test]
fn signed_float_and_separators() {
    assert_eq!(tokens_of("-2.5"), vec![float(-2.5, "-2.5"), eop()]);
    assert_eq!(tokens_of("1_000.5"), vec![float(1000.5, "1_000.5"), eop()]);
    assert_eq!(
        tokens_of("1.5e1_0"),
        vec![float(1.5e10, "1.5e1_0"), eop()]
    );
}

#[test]
fn float_value_accessor() {
    let arena = tokenize("6.12e2").unwrap();
    let token = arena.tokens().next().unwrap();
    assert_eq!(token.float_value(), Some(612.0));
    assert_eq!(token.integer_value(), None);
}

#[test]
fn leading_dot_is_not_a_float() {
    assert_eq!(
        tokens_of("\n.65"),
        vec![punct(Punctuator::Dot), int(65, "65"), eop()]
    );
}

#[test]
fn dot_without_fraction_digit_is_not_a_float() {
    assert_eq!(
        tokens_of("1.e5"),
        vec![int(1, "1"), punct(Punctuator::Dot), local("e5"), eop()]
    );
    assert_eq!(
        tokens_of("3.times"),
        vec![int(3, "3"), punct(Punctuator::Dot), local("times"), eop()]
    );
    assert_eq!(
        tokens_of("1..5"),
        vec![int(1, "1"), punct(Punctuator::DotDot), int(5, "5"), eop()]
    );
}

#[test]
fn exponent_without_digits_is_not_a_float() {
    assert_eq!(tokens_of("2e"), vec![int(2, "2"), local("e"), eop()]);
    assert_eq!(
        tokens_of("2e+x"),
        vec![int(2, "2"), local("e"), op(Operator::Plus), local("x"), eop()]
    );
}

#[test]
fn leading_zero_decimal_part_is_just_zero() {
    assert_eq!(
        tokens_of("01.5"),
        vec![int(1, "01"), punct(Punctuator::Dot), int(5, "5"), eop()]
    );
}
