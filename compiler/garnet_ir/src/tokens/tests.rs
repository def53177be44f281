use super::*;
use crate::{Element, IdentKind};
use pretty_assertions::assert_eq;

fn local(arena: &mut ElementArena, start: u32, end: u32) {
    let text = arena.source()[start as usize..end as usize].to_owned();
    arena.push(Element::identifier(IdentKind::LocalVariable, &text, Span::new(start, end)).unwrap());
}

fn trivia(arena: &mut ElementArena, kind: TriviaKind, start: u32, end: u32) {
    arena.push(Element::trivia(kind, Span::new(start, end)));
}

/// `a b\nc`
fn two_lines() -> ElementArena {
    let mut arena = ElementArena::new("a b\nc");
    local(&mut arena, 0, 1);
    trivia(&mut arena, TriviaKind::Whitespace, 1, 2);
    local(&mut arena, 2, 3);
    trivia(&mut arena, TriviaKind::LineTerminator, 3, 4);
    local(&mut arena, 4, 5);
    arena.push(Element::end_of_program(5));
    arena
}

fn ids<'a>(refs: impl Iterator<Item = ElementRef<'a>>) -> Vec<u32> {
    refs.map(|r| r.id().raw()).collect()
}

#[test]
fn tokens_skip_trivia_and_end_with_sentinel() {
    let arena = two_lines();
    let texts: Vec<_> = arena.tokens().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["a", "b", "c", ""]);
    assert!(arena.tokens().last().unwrap().is_end_of_program());
}

#[test]
fn prefix_is_previous_token_then_trivia() {
    let arena = two_lines();
    let tokens: Vec<_> = arena.tokens().collect();
    assert_eq!(ids(tokens[0].prefix()), Vec::<u32>::new());
    assert_eq!(ids(tokens[1].prefix()), vec![0, 1]);
    assert_eq!(ids(tokens[2].prefix()), vec![2, 3]);
    assert_eq!(ids(tokens[3].prefix()), vec![4]);
}

#[test]
fn postfix_is_trivia_then_next_token() {
    let arena = two_lines();
    let tokens: Vec<_> = arena.tokens().collect();
    assert_eq!(ids(tokens[0].postfix()), vec![1, 2]);
    assert_eq!(ids(tokens[1].postfix()), vec![3, 4]);
    assert_eq!(ids(tokens[2].postfix()), vec![5]);
    assert_eq!(ids(tokens[3].postfix()), Vec::<u32>::new());
}

#[test]
fn neighbours() {
    let arena = two_lines();
    let tokens: Vec<_> = arena.tokens().collect();
    assert!(tokens[0].previous_token().is_none());
    assert_eq!(tokens[0].next_token().unwrap().text(), "b");
    assert_eq!(tokens[2].previous_token().unwrap().text(), "b");
    assert!(tokens[3].next_token().is_none());
}

#[test]
fn line_position_queries() {
    let arena = two_lines();
    let bol: Vec<_> = arena.tokens().map(|t| t.is_at_beginning_of_line()).collect();
    let eol: Vec<_> = arena.tokens().map(|t| t.is_at_end_of_line()).collect();
    assert_eq!(bol, vec![true, false, true, false]);
    assert_eq!(eol, vec![false, true, true, true]);
}

#[test]
fn trivia_kind_queries() {
    let arena = two_lines();
    let tokens: Vec<_> = arena.tokens().collect();
    assert!(tokens[0].followed_by(TriviaKind::Whitespace));
    assert!(!tokens[0].followed_by(TriviaKind::LineTerminator));
    assert!(tokens[1].preceded_by(TriviaKind::Whitespace));
    assert!(tokens[2].preceded_by(TriviaKind::LineTerminator));
    assert!(!tokens[2].preceded_by(TriviaKind::SingleLineComment));
}

#[test]
fn leading_trivia_without_newline_is_not_line_start() {
    let mut arena = ElementArena::new("  x");
    trivia(&mut arena, TriviaKind::Whitespace, 0, 2);
    local(&mut arena, 2, 3);
    arena.push(Element::end_of_program(3));

    let first = arena.tokens().next().unwrap();
    assert_eq!(ids(first.prefix()), vec![0]);
    assert!(first.previous_token().is_none());
    assert!(!first.is_at_beginning_of_line());
}

#[test]
fn tokens_restart_from_scratch() {
    let arena = two_lines();
    let mut first = arena.tokens();
    first.next();
    first.next();
    assert_eq!(arena.tokens().count(), 4);
    assert_eq!(first.count(), 2);
}

#[test]
fn tokens_is_fused() {
    let mut arena = ElementArena::new("");
    arena.push(Element::end_of_program(0));
    let mut tokens = arena.tokens();
    assert!(tokens.next().is_some());
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn comment_bodies() {
    let mut arena = ElementArena::new("# hi\n=begin x\nbody\n=end");
    trivia(&mut arena, TriviaKind::SingleLineComment, 0, 4);
    trivia(&mut arena, TriviaKind::LineTerminator, 4, 5);
    trivia(&mut arena, TriviaKind::MultiLineComment, 5, 23);
    arena.push(Element::end_of_program(23));

    let bodies: Vec<_> = arena.elements().map(|el| el.comment_body()).collect();
    assert_eq!(bodies, vec![Some(" hi"), None, Some("body\n"), None]);
}

#[test]
fn display_formats() {
    let arena = two_lines();
    let shown: Vec<_> = arena.elements().map(|el| el.to_string()).collect();
    assert_eq!(
        shown,
        vec![
            "[0,1) a",
            "[1,2)  ",
            "[2,3) b",
            "[3,4) \\n",
            "[4,5) c",
            "[5,5) <end of program>",
        ]
    );
}
