//! Lexer module for declaration lines
//!
//! This module contains the tokenization logic shared by every language,
//! including token definitions and the lexer implementation.
//!
//! The lexer is deliberately language agnostic. It produces one flat, ordered
//! stream of typed tokens for a single candidate line and leaves all meaning to
//! the recognizers. Whitespace and comments are kept in the stream (so that token
//! dumps mirror the source) and are skipped by the parser.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_significant};
pub use tokens::{Token, TokenKind};
