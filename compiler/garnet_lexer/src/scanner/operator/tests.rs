use garnet_ir::{Operator, Punctuator, TokenKind};
use pretty_assertions::assert_eq;

use crate::scanner::tests::{eop, int, local, op, tokens_of};

fn punct(p: Punctuator) -> (TokenKind, String) {
    (TokenKind::Punctuator(p), p.as_str().to_owned())
}

#[test]
fn binary_operators_between_names() {
    assert_eq!(
        tokens_of("\none * two / three"),
        vec![
            local("one"),
            op(Operator::Star),
            local("two"),
            op(Operator::Slash),
            local("three"),
            eop(),
        ]
    );
    assert_eq!(
        tokens_of("\nfour << five"),
        vec![local("four"), op(Operator::Shl), local("five"), eop()]
    );
    assert_eq!(
        tokens_of("\nsix ||= seven"),
        vec![local("six"), op(Operator::OrOrAssign), local("seven"), eop()]
    );
}

#[test]
fn longest_match() {
    let source = "<=> === **= <<= >>= &&= ||= != !~ =~ => :: ... .. []= [] +@ -@ ~ '";
    let expected: Vec<_> = source
        .split(' ')
        .map(|text| {
            let kind = Operator::lookup(text)
                .map(TokenKind::Operator)
                .or_else(|| Punctuator::lookup(text).map(TokenKind::Punctuator))
                .unwrap();
            (kind, text.to_owned())
        })
        .chain([eop()])
        .collect();
    assert_eq!(tokens_of(source), expected);
}

#[test]
fn shorter_forms_when_longer_ones_do_not_follow() {
    let source = "< <= << > >= >> * *= ** & &= && | |= || ^ ^= / /= % %= + += - -= ! = ==";
    let texts: Vec<_> = tokens_of(source).into_iter().map(|(_, text)| text).collect();
    let mut expected: Vec<_> = source.split(' ').map(str::to_owned).collect();
    expected.push(String::new());
    assert_eq!(texts, expected);
}

#[test]
fn single_character_punctuators() {
    assert_eq!(
        tokens_of("( ) { } [ ] , ; ? : ."),
        vec![
            punct(Punctuator::LParen),
            punct(Punctuator::RParen),
            punct(Punctuator::LBrace),
            punct(Punctuator::RBrace),
            punct(Punctuator::LBracket),
            punct(Punctuator::RBracket),
            punct(Punctuator::Comma),
            punct(Punctuator::Semicolon),
            punct(Punctuator::Question),
            punct(Punctuator::Colon),
            punct(Punctuator::Dot),
            eop(),
        ]
    );
}

#[test]
fn brackets_glue_into_index_operator() {
    assert_eq!(
        tokens_of("a[]"),
        vec![local("a"), op(Operator::Index), eop()]
    );
    assert_eq!(
        tokens_of("x[1]"),
        vec![
            local("x"),
            punct(Punctuator::LBracket),
            int(1, "1"),
            punct(Punctuator::RBracket),
            eop(),
        ]
    );
}

#[test]
fn sign_without_digit_is_an_operator() {
    assert_eq!(
        tokens_of("a -b"),
        vec![local("a"), op(Operator::Minus), local("b"), eop()]
    );
    assert_eq!(tokens_of("!x"), vec![op(Operator::Not), local("x"), eop()]);
}
