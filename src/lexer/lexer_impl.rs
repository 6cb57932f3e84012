//! Implementation of the declaration lexer
//!
//! The actual tokenization is handled entirely by logos. Unlike a document lexer,
//! an unrecognized character is not skipped: a declaration line containing one is
//! not something any recognizer can reason about, so the whole pass fails with a
//! lex error and the caller falls back to the empty block.

use crate::error::{DocblockError, DocblockResult};
use crate::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize a line, keeping whitespace and comments
pub fn tokenize(source: &str) -> DocblockResult<Vec<Token<'_>>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), lexer.span())),
            Err(()) => {
                return Err(DocblockError::Lex {
                    text: lexer.slice().to_string(),
                    position: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}

/// Tokenize a line and drop trivia
pub fn tokenize_significant(source: &str) -> DocblockResult<Vec<Token<'_>>> {
    let mut tokens = tokenize(source)?;
    tokens.retain(|token| !token.kind.is_trivia());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize_significant(source)
            .expect("tokenizes")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("let foo").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "let");
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].text, "foo");
        assert_eq!(tokens[2].position(), 4);
        assert_eq!(tokens[2].label(), "identifier");
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(
            kinds("function foo(a, b) {"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::OpenParen,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::CloseParen,
                TokenKind::OpenBrace,
            ]
        );
    }

    #[test]
    fn test_php_signature() {
        assert_eq!(
            kinds("function foo(?Foo &$bar): array"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::OpenParen,
                TokenKind::Question,
                TokenKind::Identifier,
                TokenKind::Ampersand,
                TokenKind::Identifier,
                TokenKind::CloseParen,
                TokenKind::Colon,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(
            kinds("int foo; // trailing"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Semicolon
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_lex_error_reports_position() {
        let err = tokenize("int @foo").unwrap_err();
        match err {
            DocblockError::Lex { text, position } => {
                assert_eq!(text, "@");
                assert_eq!(position, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(tokenize("let a = 'oops").is_err());
    }
}
