use super::*;
use crate::SourceBuffer;

fn lookup(source: &str) -> Option<(TokenKind, u32)> {
    let buf = SourceBuffer::new(source);
    match_prefix(&buf.cursor())
}

// === Table Invariants ===

#[test]
fn no_entry_is_shadowed() {
    for (i, (earlier, _)) in PREFIX_TABLE.iter().enumerate() {
        for (later, kind) in &PREFIX_TABLE[i + 1..] {
            assert!(
                !later.starts_with(earlier),
                "{kind:?} can never match: an earlier entry is its prefix"
            );
        }
    }
}

#[test]
fn table_agrees_with_fixed_lexemes() {
    for &(pattern, kind) in PREFIX_TABLE {
        if kind == TokenKind::Arrow {
            continue;
        }
        assert_eq!(kind.lexeme().map(str::as_bytes), Some(pattern), "{kind:?}");
    }
}

#[test]
fn start_table_covers_every_entry() {
    for &(pattern, kind) in PREFIX_TABLE {
        assert!(CAN_START_PREFIX[pattern[0] as usize], "{kind:?}");
    }
    assert!(!CAN_START_PREFIX[0]);
    assert!(!CAN_START_PREFIX[b'x' as usize]);
    assert!(!CAN_START_PREFIX[b'7' as usize]);
}

// === Lookup ===

#[test]
fn every_keyword_matches_itself() {
    for &(pattern, kind) in PREFIX_TABLE {
        let Ok(text) = std::str::from_utf8(pattern) else {
            panic!("table entry for {kind:?} is not UTF-8");
        };
        assert_eq!(lookup(text).map(|(k, _)| k), Some(kind), "{text}");
    }
}

#[test]
fn elseif_beats_else() {
    assert_eq!(lookup("elseif$"), Some((TokenKind::ElseIf, 7)));
    assert_eq!(lookup("elseif"), Some((TokenKind::Else, 4)));
}

#[test]
fn prefix_matches_inside_longer_words() {
    assert_eq!(lookup("order"), Some((TokenKind::Or, 2)));
    assert_eq!(lookup("android"), Some((TokenKind::And, 3)));
    assert_eq!(lookup("selfish"), Some((TokenKind::SelfKw, 4)));
    assert_eq!(lookup("notes"), Some((TokenKind::Not, 3)));
}

#[test]
fn dollar_suffix_is_required() {
    assert_eq!(lookup("let x"), None);
    assert_eq!(lookup("loop {"), None);
    assert_eq!(lookup("func"), None);
    assert_eq!(lookup("if x"), None);
}

#[test]
fn arrows_share_a_kind() {
    assert_eq!(lookup("=>"), Some((TokenKind::Arrow, 2)));
    assert_eq!(lookup("\u{21D2}"), Some((TokenKind::Arrow, 3)));
    assert_eq!(lookup("\u{27F6}"), Some((TokenKind::Arrow, 3)));
    // Other arrows in the same UTF-8 block are not operators.
    assert_eq!(lookup("\u{2192}"), None);
}

#[test]
fn colon_family() {
    assert_eq!(lookup(":="), Some((TokenKind::Assign, 2)));
    assert_eq!(lookup("::print"), Some((TokenKind::Print, 7)));
    assert_eq!(lookup("::pop"), Some((TokenKind::ListPop, 5)));
    assert_eq!(lookup("::prepend"), Some((TokenKind::ListPrepend, 9)));
    assert_eq!(lookup("::pattern_match"), Some((TokenKind::PatternMatch, 15)));
    assert_eq!(lookup("::unknown"), None);
    assert_eq!(lookup(":"), None);
}

#[test]
fn partial_prefix_at_eof_does_not_match() {
    assert_eq!(lookup("::pr"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("=="), None);
}
