//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the tokenizer to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` and `peek2()` near the end of
//! the buffer.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for encoding issues:
//! - UTF-8 BOM (the tokenizer would see it as an unknown character)
//! - Interior null bytes (lexed as unknown tokens, never as EOF)
//!
//! UTF-16 input can only arrive through [`SourceBuffer::from_bytes`], which
//! rejects it outright.
//!
//! Issues are recorded as [`EncodingIssue`] values. They are advisory:
//! tokenization is identical whether or not the caller inspects them.

use thiserror::Error;

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the source: the sentinel plus room for
/// `peek()` and `peek2()` from the last source byte or from EOF.
const TAIL: usize = 3;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The buffer is stored as a `String`: appending ASCII NUL bytes to valid
/// UTF-8 keeps it valid UTF-8, so every slice of the source content can be
/// handed out as `&str` without re-validation.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Error building a [`SourceBuffer`] from untrusted bytes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The bytes start with a UTF-16 little-endian byte order mark.
    #[error("source is UTF-16LE encoded; expected UTF-8")]
    Utf16Le,
    /// The bytes start with a UTF-16 big-endian byte order mark.
    #[error("source is UTF-16BE encoded; expected UTF-8")]
    Utf16Be,
    /// The bytes are not valid UTF-8.
    #[error("source is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
    /// The source does not fit in a `u32` byte offset.
    #[error("source is {len} bytes, exceeding the 4 GiB limit")]
    TooLarge { len: usize },
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are accepted but cut at the last
    /// character boundary that fits in a `u32` offset; bytes beyond it are
    /// never scanned. Use [`from_bytes`](Self::from_bytes) to reject
    /// oversized input.
    pub fn new(source: &str) -> Self {
        let mut source_len = source.len().min(u32::MAX as usize);
        while !source.is_char_boundary(source_len) {
            source_len -= 1;
        }
        let source = &source[..source_len];

        // Round up to next 64-byte boundary (minimum: source + zero tail).
        let padded_len = (source_len + TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Create a buffer from raw bytes, validating UTF-8 and size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        match bytes {
            [0xFF, 0xFE, ..] => return Err(SourceError::Utf16Le),
            [0xFE, 0xFF, ..] => return Err(SourceError::Utf16Be),
            _ => {}
        }
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge { len: bytes.len() });
        }
        let source = std::str::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(Self::new(source))
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect BOM and interior null byte issues in source bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

/// Detect a UTF-8 byte order mark at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}

#[cfg(test)]
mod tests;
