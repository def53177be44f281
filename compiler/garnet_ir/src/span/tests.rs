use super::*;
use pretty_assertions::assert_eq;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn try_from_range_accepts_small_ranges() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
    assert_eq!(Span::new(3, 9).to_range(), 3..9);
}

#[test]
fn try_from_range_rejects_inverted() {
    assert_eq!(
        Span::try_from_range(9..3),
        Err(SpanError::Inverted { start: 9, end: 3 })
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn try_from_range_rejects_oversized_end() {
    let big = u32::MAX as usize + 1;
    assert_eq!(Span::try_from_range(0..big), Err(SpanError::EndTooLarge(big)));
}

#[test]
fn display_is_half_open() {
    assert_eq!(Span::new(2, 5).to_string(), "[2,5)");
    assert_eq!(format!("{:?}", Span::new(2, 5)), "2..5");
}
