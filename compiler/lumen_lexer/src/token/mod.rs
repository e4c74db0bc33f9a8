//! Token kinds, tokens, and source spans.
//!
//! [`TokenKind`] is a closed, `#[repr(u8)]` enumeration grouped into
//! semantic ranges so a discriminant alone tells a parser which family a
//! token belongs to:
//!
//! | Range    | Family                                  |
//! |----------|-----------------------------------------|
//! | 0-15     | Identifiers & literals                  |
//! | 16-47    | Keywords                                |
//! | 48-63    | List / pattern operators (`::` family)  |
//! | 64-95    | Operators                               |
//! | 96-111   | Delimiters & punctuation                |
//! | 240      | Unknown character                       |
//! | 255      | End of input                            |

use std::fmt;

/// Half-open byte range `start..end` into the source.
///
/// Byte offsets only; line/column resolution is the caller's business.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range` for slicing the source.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Classification of a token.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Identifiers & Literals (0-15) ===
    /// `foo`, `$tmp`, `_x`, `a@b`
    Ident = 0,
    /// `42`, `3.14`, and lexically accepted `1.2.3`
    Number = 1,
    /// `"..."`; token text is the raw inner content
    String = 2,

    // === Keywords (16-47) ===
    /// `let$`
    Let = 16,
    /// `::print`
    Print = 17,
    /// `if$`
    If = 18,
    /// `elseif$`
    ElseIf = 19,
    /// `else`
    Else = 20,
    /// `loop$`
    Loop = 21,
    /// `import$`
    Import = 22,
    /// `func$`
    Func = 23,
    /// `class$`
    Class = 24,
    /// `self`
    SelfKw = 25,
    /// `and`
    And = 26,
    /// `or`
    Or = 27,
    /// `not`
    Not = 28,

    // === List / Pattern Operators (48-63) ===
    /// `::len`
    ListLen = 48,
    /// `::append`
    ListAppend = 49,
    /// `::prepend`
    ListPrepend = 50,
    /// `::pop`
    ListPop = 51,
    /// `::insert`
    ListInsert = 52,
    /// `::remove`
    ListRemove = 53,
    /// `::pattern_match`
    PatternMatch = 54,

    // === Operators (64-95) ===
    /// `:=`
    Assign = 64,
    /// `=>`, `⇒`, or `⟶`
    Arrow = 65,
    /// `+`
    Plus = 66,
    /// `-`
    Minus = 67,
    /// `*`
    Star = 68,
    /// `/`
    Slash = 69,
    /// `%`
    Percent = 70,
    /// `>`
    Greater = 71,
    /// `>=`
    GreaterEqual = 72,
    /// `<`
    Less = 73,
    /// `<=`
    LessEqual = 74,
    /// `==`
    EqualEqual = 75,
    /// `!=`
    BangEqual = 76,
    /// `&`
    Ampersand = 77,
    /// `|`
    Pipe = 78,
    /// `^`
    Caret = 79,
    /// `~`
    Tilde = 80,
    /// `@` (format-specifier marker)
    At = 81,

    // === Delimiters & Punctuation (96-111) ===
    /// `(`
    LeftParen = 96,
    /// `)`
    RightParen = 97,
    /// `{`
    LeftBrace = 98,
    /// `}`
    RightBrace = 99,
    /// `[`
    LeftBracket = 100,
    /// `]`
    RightBracket = 101,
    /// `,`
    Comma = 102,
    /// `;`
    Semicolon = 103,
    /// `.`
    Dot = 104,

    // === Errors (240) ===
    /// A single character no rule recognizes.
    Unknown = 240,

    // === Control (255) ===
    /// End of input. Returned forever once reached.
    Eof = 255,
}

impl TokenKind {
    /// Returns the fixed source text for kinds with a single spelling.
    ///
    /// `Arrow` has three spellings; the canonical ASCII `=>` is returned.
    /// Kinds whose text varies (identifiers, literals, unknown) return `None`.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Let => Some("let$"),
            Self::Print => Some("::print"),
            Self::If => Some("if$"),
            Self::ElseIf => Some("elseif$"),
            Self::Else => Some("else"),
            Self::Loop => Some("loop$"),
            Self::Import => Some("import$"),
            Self::Func => Some("func$"),
            Self::Class => Some("class$"),
            Self::SelfKw => Some("self"),
            Self::And => Some("and"),
            Self::Or => Some("or"),
            Self::Not => Some("not"),
            Self::ListLen => Some("::len"),
            Self::ListAppend => Some("::append"),
            Self::ListPrepend => Some("::prepend"),
            Self::ListPop => Some("::pop"),
            Self::ListInsert => Some("::insert"),
            Self::ListRemove => Some("::remove"),
            Self::PatternMatch => Some("::pattern_match"),
            Self::Assign => Some(":="),
            Self::Arrow => Some("=>"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Percent => Some("%"),
            Self::Greater => Some(">"),
            Self::GreaterEqual => Some(">="),
            Self::Less => Some("<"),
            Self::LessEqual => Some("<="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Ampersand => Some("&"),
            Self::Pipe => Some("|"),
            Self::Caret => Some("^"),
            Self::Tilde => Some("~"),
            Self::At => Some("@"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::Dot => Some("."),
            Self::Ident | Self::Number | Self::String | Self::Unknown | Self::Eof => None,
        }
    }

    /// Human-readable description for parser diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number literal",
            Self::String => "string literal",
            Self::Unknown => "unknown character",
            Self::Eof => "end of input",
            Self::Let => "`let$`",
            Self::Print => "`::print`",
            Self::If => "`if$`",
            Self::ElseIf => "`elseif$`",
            Self::Else => "`else`",
            Self::Loop => "`loop$`",
            Self::Import => "`import$`",
            Self::Func => "`func$`",
            Self::Class => "`class$`",
            Self::SelfKw => "`self`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Not => "`not`",
            Self::ListLen => "`::len`",
            Self::ListAppend => "`::append`",
            Self::ListPrepend => "`::prepend`",
            Self::ListPop => "`::pop`",
            Self::ListInsert => "`::insert`",
            Self::ListRemove => "`::remove`",
            Self::PatternMatch => "`::pattern_match`",
            Self::Assign => "`:=`",
            Self::Arrow => "arrow",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
            Self::Greater => "`>`",
            Self::GreaterEqual => "`>=`",
            Self::Less => "`<`",
            Self::LessEqual => "`<=`",
            Self::EqualEqual => "`==`",
            Self::BangEqual => "`!=`",
            Self::Ampersand => "`&`",
            Self::Pipe => "`|`",
            Self::Caret => "`^`",
            Self::Tilde => "`~`",
            Self::At => "format specifier `@`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Dot => "`.`",
        }
    }

    /// Returns `true` for the keyword family (`let$` through `not`).
    pub fn is_keyword(self) -> bool {
        (16..48).contains(&(self as u8))
    }

    /// Returns `true` for the `::` list and pattern operators.
    pub fn is_list_op(self) -> bool {
        (48..64).contains(&(self as u8))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` is owned and never truncated. For string literals it is the raw
/// content between the quotes, escapes untouched; `span` still covers the
/// quotes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns `true` if this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("<eof>"),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => f.write_str(&self.text),
        }
    }
}
