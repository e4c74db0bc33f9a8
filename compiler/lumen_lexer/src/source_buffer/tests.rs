use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn script_source_round_trips() {
    let source = "let$ x := 1\n::print x";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_str(), source);
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert_eq!(buf.as_sentinel_bytes()[source.len()], 0);
}

#[test]
fn unicode_arrow_source_keeps_byte_length() {
    let source = "f \u{27F6} g";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len(), 7);
    assert_eq!(buf.as_str(), source);
    assert!(buf.encoding_issues().is_empty());
}

// === Padding ===

#[test]
fn buffer_rounded_to_cache_line() {
    for len in [0, 1, 63, 64, 65, 200] {
        let source = "a".repeat(len);
        let buf = SourceBuffer::new(&source);
        let total = buf.as_sentinel_bytes().len();
        assert_eq!(total % CACHE_LINE, 0, "source length {len}");
        assert!(total >= len + TAIL, "no room for lookahead at source length {len}");
    }
}

#[test]
fn padding_is_all_zero() {
    let buf = SourceBuffer::new("not");
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

// === Encoding Issues ===

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::new("\u{FEFF}let$ x");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn bom_after_start_is_not_reported() {
    let buf = SourceBuffer::new("x\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn detects_every_interior_null() {
    let buf = SourceBuffer::new("\0a\0\0b");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![0, 2, 3]);
}

#[test]
fn bom_reported_before_nulls() {
    let buf = SourceBuffer::new("\u{FEFF}a\0");
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![EncodingIssueKind::Utf8Bom, EncodingIssueKind::InteriorNull]
    );
}

// === from_bytes ===

#[test]
fn from_bytes_accepts_utf8() {
    let buf = SourceBuffer::from_bytes("if$ a => b".as_bytes());
    assert_eq!(buf.map(|b| b.len()), Ok(10));
}

#[test]
fn from_bytes_rejects_invalid_utf8() {
    let err = SourceBuffer::from_bytes(&[b'a', b'b', 0xC3, b'(']).err();
    assert_eq!(err, Some(SourceError::InvalidUtf8 { valid_up_to: 2 }));
}

#[test]
fn from_bytes_rejects_utf16_boms() {
    assert_eq!(
        SourceBuffer::from_bytes(&[0xFF, 0xFE, b'a', 0]).err(),
        Some(SourceError::Utf16Le)
    );
    assert_eq!(
        SourceBuffer::from_bytes(&[0xFE, 0xFF, 0, b'a']).err(),
        Some(SourceError::Utf16Be)
    );
}

#[test]
fn source_error_messages() {
    assert_eq!(
        SourceError::InvalidUtf8 { valid_up_to: 7 }.to_string(),
        "source is not valid UTF-8 (valid up to byte 7)"
    );
    assert_eq!(
        SourceError::Utf16Le.to_string(),
        "source is UTF-16LE encoded; expected UTF-8"
    );
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("loop$");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'l');
    assert_eq!(cursor.source_len(), 5);
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}
