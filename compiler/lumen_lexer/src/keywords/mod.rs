//! Fixed-string keyword and operator table.
//!
//! Lumen keywords are recognized by *prefix*, before any identifier rule
//! runs, and in a fixed priority order: the first entry the unread input
//! starts with wins. There is no word-boundary check, so `order` lexes as
//! `or` followed by the identifier `der`. Parsers written against the
//! language rely on this, so it is kept as-is.
//!
//! Entries that share a prefix are ordered longest-first (`elseif$` before
//! `else`); a shorter entry listed first would make the longer one
//! unreachable. `tests::no_entry_is_shadowed` enforces this.

use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Prefix patterns in priority order.
pub(crate) const PREFIX_TABLE: &[(&[u8], TokenKind)] = &[
    (b"let$", TokenKind::Let),
    (b"::print", TokenKind::Print),
    (b"if$", TokenKind::If),
    (b"elseif$", TokenKind::ElseIf),
    (b"else", TokenKind::Else),
    (b"loop$", TokenKind::Loop),
    (b"import$", TokenKind::Import),
    (b"func$", TokenKind::Func),
    (b"class$", TokenKind::Class),
    (b"self", TokenKind::SelfKw),
    (b"and", TokenKind::And),
    (b"or", TokenKind::Or),
    (b"not", TokenKind::Not),
    (b":=", TokenKind::Assign),
    (b"=>", TokenKind::Arrow),
    // U+21D2 RIGHTWARDS DOUBLE ARROW
    (b"\xE2\x87\x92", TokenKind::Arrow),
    // U+27F6 LONG RIGHTWARDS ARROW
    (b"\xE2\x9F\xB6", TokenKind::Arrow),
    (b"::len", TokenKind::ListLen),
    (b"::append", TokenKind::ListAppend),
    (b"::prepend", TokenKind::ListPrepend),
    (b"::pop", TokenKind::ListPop),
    (b"::insert", TokenKind::ListInsert),
    (b"::remove", TokenKind::ListRemove),
    (b"::pattern_match", TokenKind::PatternMatch),
];

/// 256-byte lookup table: `true` for bytes that begin some table entry.
///
/// Lets identifiers like `x` or numbers skip the table scan entirely.
/// Derived from [`PREFIX_TABLE`] at compile time so the two cannot drift.
static CAN_START_PREFIX: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < PREFIX_TABLE.len() {
        table[PREFIX_TABLE[i].0[0] as usize] = true;
        i += 1;
    }
    table
};

/// Match the highest-priority table entry at the cursor.
///
/// Returns the kind and byte length of the match without advancing.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "longest table entry is 15 bytes"
)]
pub(crate) fn match_prefix(cursor: &Cursor<'_>) -> Option<(TokenKind, u32)> {
    if !CAN_START_PREFIX[cursor.current() as usize] {
        return None;
    }
    PREFIX_TABLE
        .iter()
        .find(|(pattern, _)| cursor.starts_with(pattern))
        .map(|&(pattern, kind)| (kind, pattern.len() as u32))
}

#[cfg(test)]
mod tests;
