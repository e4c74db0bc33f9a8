//! Pull-based tokenizer producing one [`Token`] per call.
//!
//! The tokenizer owns a [`Cursor`] over a borrowed [`SourceBuffer`] and
//! nothing else: there is no shared state, so any number of tokenizers can
//! run side by side, on one thread or many.
//!
//! # Scanning Order
//!
//! Each call to [`Tokenizer::next_token`]:
//!
//! 1. skips whitespace and `#` line comments (iteratively, so long comment
//!    blocks cost no stack);
//! 2. returns `Eof` if the source is exhausted;
//! 3. tries the fixed-string table in [`keywords`](crate::keywords);
//! 4. dispatches single- and two-byte operators and punctuation;
//! 5. scans a string literal, number, or identifier;
//! 6. falls back to a one-character `Unknown` token.
//!
//! Malformed input never produces an error: it becomes `Unknown` tokens,
//! and an unterminated string simply ends at EOF.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::token::{Span, Token, TokenKind};
use crate::SourceBuffer;

/// Tokenizer over a sentinel-terminated source buffer.
///
/// After the first `Eof`, every further call to
/// [`next_token`](Self::next_token) returns `Eof` again.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Bind a tokenizer to `source`, positioned at byte 0.
    pub fn new(source: &'a SourceBuffer) -> Self {
        debug!(len = source.len(), "tokenizer initialized");
        Self {
            cursor: source.cursor(),
        }
    }

    /// Rebind to another source, discarding all scan state.
    pub fn reset(&mut self, source: &'a SourceBuffer) {
        *self = Self::new(source);
    }

    /// Current byte offset. Never decreases.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token and advance past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();
        let start = self.cursor.pos();

        let token = if self.cursor.is_eof() {
            Token::new(TokenKind::Eof, String::new(), Span::point(start))
        } else if let Some((kind, len)) = keywords::match_prefix(&self.cursor) {
            self.cursor.advance_n(len);
            self.lexeme(kind, start)
        } else {
            self.scan(start)
        };

        trace!(kind = ?token.kind, span = ?token.span, "token");
        token
    }

    // ─── Trivia ──────────────────────────────────────────────────

    /// Skip whitespace and comments until neither applies.
    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_while(is_space);
            if self.cursor.current() != b'#' {
                return;
            }
            let start = self.cursor.pos();
            self.cursor.eat_until_newline_or_eof();
            trace!(start, end = self.cursor.pos(), "skipped comment");
        }
    }

    // ─── Dispatch ────────────────────────────────────────────────

    /// Everything after the keyword table: operators, literals,
    /// identifiers, and the unknown fallback.
    fn scan(&mut self, start: u32) -> Token {
        match self.cursor.current() {
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.single(start, TokenKind::Star),
            b'/' => self.single(start, TokenKind::Slash),
            b'%' => self.single(start, TokenKind::Percent),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b';' => self.single(start, TokenKind::Semicolon),
            b',' => self.single(start, TokenKind::Comma),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b'[' => self.single(start, TokenKind::LeftBracket),
            b']' => self.single(start, TokenKind::RightBracket),
            b'&' => self.single(start, TokenKind::Ampersand),
            b'|' => self.single(start, TokenKind::Pipe),
            b'^' => self.single(start, TokenKind::Caret),
            b'~' => self.single(start, TokenKind::Tilde),
            // Checked before identifiers, so a leading `@` is never the
            // start of an identifier even though `is_ident_start` allows it.
            b'@' => self.single(start, TokenKind::At),
            b'.' => self.single(start, TokenKind::Dot),
            b'>' => self.or_equal(start, TokenKind::Greater, TokenKind::GreaterEqual),
            b'<' => self.or_equal(start, TokenKind::Less, TokenKind::LessEqual),
            // Lone `=` and `!` have no token of their own and fall through
            // to the unknown fallback below.
            b'=' if self.cursor.peek() == b'=' => self.double(start, TokenKind::EqualEqual),
            b'!' if self.cursor.peek() == b'=' => self.double(start, TokenKind::BangEqual),
            b'"' => self.string(start),
            b'0'..=b'9' => self.number(start),
            b if is_ident_start(b) => self.identifier(start),
            _ => self.unknown(start),
        }
    }

    /// Token whose text is the source from `start` to the cursor.
    fn lexeme(&self, kind: TokenKind, start: u32) -> Token {
        let end = self.cursor.pos();
        Token::new(kind, self.cursor.slice(start, end), Span::new(start, end))
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.lexeme(kind, start)
    }

    fn double(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance_n(2);
        self.lexeme(kind, start)
    }

    /// `>`/`>=` and `<`/`<=`.
    fn or_equal(&mut self, start: u32, bare: TokenKind, with_equal: TokenKind) -> Token {
        if self.cursor.peek() == b'=' {
            self.double(start, with_equal)
        } else {
            self.single(start, bare)
        }
    }

    // ─── Literals ────────────────────────────────────────────────

    /// String literal. The text is the raw content between the quotes;
    /// `\"` does not close the string and is kept verbatim, and no other
    /// escape is special. Running out of input ends the literal quietly.
    fn string(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume opening '"'
        let content_start = self.cursor.pos();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let content_end = self.cursor.pos();
                    self.cursor.advance(); // consume closing '"'
                    return self.string_token(start, content_start, content_end);
                }
                b'\\' => {
                    if self.cursor.peek() == b'"' {
                        self.cursor.advance_n(2);
                    } else {
                        self.cursor.advance();
                    }
                }
                _ => {
                    trace!(start, "unterminated string ends at EOF");
                    let content_end = self.cursor.pos();
                    return self.string_token(start, content_start, content_end);
                }
            }
        }
    }

    fn string_token(&self, start: u32, content_start: u32, content_end: u32) -> Token {
        Token::new(
            TokenKind::String,
            self.cursor.slice(content_start, content_end),
            Span::new(start, self.cursor.pos()),
        )
    }

    /// Digits and dots in any arrangement: `1.2.3` is one token and the
    /// parser decides whether it means anything.
    fn number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        self.lexeme(TokenKind::Number, start)
    }

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance(); // first byte already validated
        self.cursor.eat_while(is_ident_continue);
        self.lexeme(TokenKind::Ident, start)
    }

    // ─── Error tokens ────────────────────────────────────────────

    /// One whole character, so the text stays valid UTF-8 and the cursor
    /// always moves.
    fn unknown(&mut self, start: u32) -> Token {
        self.cursor.advance_char();
        self.lexeme(TokenKind::Unknown, start)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Whitespace as the C locale's `isspace` defines it.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'@' | b'$' | b'_')
}

/// 256-byte lookup table for identifier continuation bytes:
/// a-z, A-Z, 0-9, `_`, `$`, and `@`. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$' | b'@'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Tokenize a whole source string.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a [`SourceBuffer`] and a [`Tokenizer`] directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    Tokenizer::new(&buf).collect()
}
