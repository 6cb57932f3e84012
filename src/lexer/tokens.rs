//! Token definitions for declaration lines
//!
//! The tokens are defined using the logos derive macro. The set is shared by every
//! language: recognizers decide what a token means, the lexer only decides what it
//! looks like. Characters that no language needs in a declaration (`@`, `#` outside
//! of a word, non-ASCII text) are deliberately left out so that they surface as lex
//! errors instead of silently becoming noise.

use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds the lexer can produce
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    // Trivia
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // Words and literals
    #[regex(r"[A-Za-z_$\\][A-Za-z0-9_$\\]*(-[A-Za-z0-9_$\\]+)*")]
    Identifier,
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?%?")]
    Number,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    #[regex(r"`([^`\\]|\\.)*`")]
    String,
    #[regex(r"#[A-Za-z0-9_-]*")]
    Hash,

    // Brackets
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,

    // Punctuation
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("=")]
    Assign,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    ThinArrow,
    #[token("*")]
    Star,
    #[token("&")]
    Ampersand,
    #[token("?")]
    Question,
    #[token("|")]
    Pipe,
    #[regex(r"[+\-/%!^~]|==|===|!=|!==|<=|>=|&&|\|\||\?\?|\+\+|--|\+=|-=|\*=|/=")]
    Operator,
}

impl TokenKind {
    /// Human readable label used in token dumps
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Hash => "hash",
            TokenKind::OpenParen => "open parenthesis",
            TokenKind::CloseParen => "close parenthesis",
            TokenKind::OpenBracket => "open square bracket",
            TokenKind::CloseBracket => "close square bracket",
            TokenKind::OpenBrace => "open curly brace",
            TokenKind::CloseBrace => "close curly brace",
            TokenKind::LessThan => "less than",
            TokenKind::GreaterThan => "greater than",
            TokenKind::Colon => "colon",
            TokenKind::DoubleColon => "double colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Ellipsis => "ellipsis",
            TokenKind::Assign => "assignment",
            TokenKind::FatArrow => "fat arrow",
            TokenKind::ThinArrow => "thin arrow",
            TokenKind::Star => "star",
            TokenKind::Ampersand => "ampersand",
            TokenKind::Question => "question mark",
            TokenKind::Pipe => "pipe",
            TokenKind::Operator => "operator",
        }
    }

    /// Check if this token carries no meaning for recognition
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Check if this token is a bare word
    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Identifier)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token together with the slice of source it was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Range<usize>) -> Self {
        Self { kind, text, span }
    }

    /// Byte offset of the token in the prepared line
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Type label, e.g. `"identifier"`
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Check if this is a bare word spelled exactly `text`
    pub fn is_word(&self, text: &str) -> bool {
        self.kind.is_word() && self.text == text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.kind.label(), self.text)
    }
}
