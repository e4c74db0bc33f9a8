//! Tokenizer for the Lumen scripting language.
//!
//! Converts source text into a flat stream of [`Token`]s for the Lumen
//! parser. The lexer is deliberately permissive: it never fails. Anything
//! it cannot classify becomes a [`TokenKind::Unknown`] token carrying the
//! offending character, and the parser decides what to do about it.
//!
//! # Usage
//!
//! ```
//! use lumen_lexer::{SourceBuffer, TokenKind, Tokenizer};
//!
//! let buf = SourceBuffer::new("let$ n := 3 # count\n::print n");
//! let mut tokenizer = Tokenizer::new(&buf);
//! let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
//!     let tok = tokenizer.next_token();
//!     (!tok.is_eof()).then_some(tok.kind)
//! })
//! .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Print,
//!         TokenKind::Ident,
//!     ]
//! );
//! ```
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source
//! - [`Cursor`]: byte-level navigation over the buffer
//! - `keywords`: the ordered fixed-string table (keywords, `:=`, arrows,
//!   the `::` family)
//! - [`Tokenizer`]: the scanning loop
//!
//! # Logging
//!
//! The tokenizer emits `tracing` events: `debug` on initialization and
//! `trace` per token. Call [`init_tracing`] and set
//! `RUST_LOG=lumen_lexer=trace` to see them.

mod cursor;
mod keywords;
mod source_buffer;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer, SourceError};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// does nothing if the host application already installed a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // An existing global subscriber wins; ours is only a fallback.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
