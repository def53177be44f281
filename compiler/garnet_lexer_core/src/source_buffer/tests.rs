use super::*;

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn buffer_is_padded_to_cache_line() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.buf.len(), CACHE_LINE);
    assert!(buf.buf[3..].iter().all(|&b| b == 0));
}

#[test]
fn exact_cache_line_source_gets_extra_line() {
    let source = "x".repeat(CACHE_LINE);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.buf.len(), CACHE_LINE * 2);
    assert_eq!(buf.buf[CACHE_LINE], 0);
}

#[test]
fn text_is_borrowed_from_the_caller() {
    let source = String::from("hello");
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.as_str(), "hello");
    assert!(std::ptr::eq(buf.as_str(), source.as_str()));
    assert_eq!(&buf.buf[..5], b"hello");
}

#[test]
fn multibyte_source_length_is_in_bytes() {
    let buf = SourceBuffer::new("été");
    assert_eq!(buf.len(), 5);
}
