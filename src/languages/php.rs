//! PHP recognizer
//!
//! Variables and parameters carry the `$` sigil, which makes them easy to tell
//! apart from types: every bare word ahead of a `$name` is part of its type, and
//! the name is kept with its sigil. Functions and classes are named with bare
//! words, optionally namespace qualified.

use crate::grammar::{Grammar, GrammarDefinition, GrammarProperty};
use crate::languages::common::{collect_default, compose_return, compose_type};
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseState, Recognizer};
use crate::symbol::{Param, Symbol, SymbolKind};
use once_cell::sync::Lazy;
use regex::Regex;

const DEFINITION: GrammarDefinition = GrammarDefinition {
    class: &["class", "interface", "trait", "enum"],
    function: &["function", "fn"],
    identifier: r"^\$[A-Za-z_][A-Za-z0-9_]*$",
    modifiers: &[
        "public",
        "private",
        "protected",
        "static",
        "final",
        "abstract",
        "readonly",
    ],
    variables: &["const", "var"],
    types: &[
        "int", "float", "string", "bool", "array", "callable", "iterable", "object", "mixed",
        "void", "null", "never", "false", "true", "self", "parent",
    ],
    reserved: &[
        "if", "else", "elseif", "for", "foreach", "while", "do", "switch", "case", "match",
        "return", "throw", "new", "echo", "print", "namespace", "use", "require", "require_once",
        "include", "include_once", "global", "unset", "isset", "yield", "try", "catch",
    ],
};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(DEFINITION).expect("PHP grammar is valid"));

/// Bare or namespace-qualified class, function and type names
static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\\?[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("class name pattern is valid")
});

/// A bare word that can start or continue a type
fn is_type_word(token: &Token<'_>) -> bool {
    token.kind.is_word() && CLASS_NAME.is_match(token.text) && !GRAMMAR.is_keyword(token.text)
}

pub struct Php;

impl Recognizer for Php {
    fn grammar(&self) -> &Grammar {
        &GRAMMAR
    }

    fn is_declared_name(&self, token: &Token<'_>) -> bool {
        is_type_word(token) && !GRAMMAR.matches(token, GrammarProperty::Types)
    }

    fn recognize_function(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if symbol.is(SymbolKind::Function) && state.parameters_closed {
            if state.expect_return_type {
                if compose_return(token, symbol, state) {
                    return;
                }
                state.expect_return_type = false;
            }

            match token.kind {
                TokenKind::Colon if state.follows(TokenKind::CloseParen) => {
                    state.expect_return_type = true;
                }
                TokenKind::OpenBrace | TokenKind::Semicolon | TokenKind::FatArrow => {
                    state.done = true;
                }
                _ => {}
            }
            return;
        }

        if GRAMMAR.matches(token, GrammarProperty::Function)
            && matches!(symbol.kind, SymbolKind::Unset | SymbolKind::Variable)
        {
            symbol.make_function(true);
            state.expect_name = true;
            state.expect_value = false;
            return;
        }

        if !symbol.is(SymbolKind::Function) {
            return;
        }
        if state.expect_name && self.is_declared_name(token) {
            symbol.set_name(token.text);
            symbol.return_info.present = token.text != "__construct";
            state.expect_name = false;
        } else if token.is(TokenKind::OpenParen) && !state.expect_parameter {
            state.open_parameters();
        }
    }

    fn recognize_parameters(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if !state.in_parameters() {
            return;
        }
        if state.expect_value && collect_default(token, symbol, state) {
            return;
        }

        match token.kind {
            TokenKind::CloseParen => state.close_parameters(),
            TokenKind::Comma => state.next_parameter(),
            TokenKind::Assign => state.expect_value = true,
            // variadics and by-reference markers are not part of the type
            TokenKind::Ellipsis => {}
            TokenKind::Ampersand => {
                if let Some(kind) = state.pending_type.as_mut() {
                    kind.push('&');
                }
            }
            TokenKind::Identifier if GRAMMAR.is_name(token) => {
                let kind = state
                    .pending_type
                    .take()
                    .map(|kind| kind.trim_end_matches('&').to_string())
                    .filter(|kind| !kind.is_empty());
                symbol.push_param(Param::named(token.text).with_type(kind));
            }
            _ => {
                // constructor promotion
                if GRAMMAR.matches(token, GrammarProperty::Modifiers) {
                    return;
                }
                if let Some(kind) = state.pending_type.as_mut() {
                    // intersection type `A&B`
                    if kind.ends_with('&') && token.kind.is_word() {
                        kind.push_str(token.text);
                        return;
                    }
                }
                compose_type(&mut state.pending_type, token, &mut state.generic_depth);
            }
        }
    }

    fn recognize_variable(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        match symbol.kind {
            SymbolKind::Unset => {
                if GRAMMAR.matches(token, GrammarProperty::Modifiers) {
                    return;
                }
                if GRAMMAR.matches(token, GrammarProperty::Reserved) {
                    state.done = true;
                } else if GRAMMAR.matches(token, GrammarProperty::Variables) {
                    symbol.kind = SymbolKind::Variable;
                    state.expect_name = token.text == "const";
                } else if GRAMMAR.is_name(token) {
                    symbol.kind = SymbolKind::Variable;
                    symbol.set_name(token.text);
                } else if token.is(TokenKind::Question) || is_type_word(token) {
                    // typed property: `private ?Foo $bar`
                    symbol.kind = SymbolKind::Variable;
                    compose_type(&mut symbol.var_type, token, &mut state.generic_depth);
                }
            }
            SymbolKind::Variable => {
                if state.expect_name {
                    // `const NAME` and `const int NAME`: the last word before `=` names it
                    match token.kind {
                        TokenKind::Assign | TokenKind::Semicolon => state.done = true,
                        _ if self.is_declared_name(token) => symbol.set_name(token.text),
                        _ => {}
                    }
                    return;
                }

                if symbol.name.is_empty() {
                    if GRAMMAR.is_name(token) {
                        symbol.set_name(token.text);
                    } else if token.is(TokenKind::OpenParen) {
                        // a call such as `foo($x);` declares nothing
                        symbol.kind = SymbolKind::Unset;
                        symbol.var_type = None;
                        state.done = true;
                    } else {
                        compose_type(&mut symbol.var_type, token, &mut state.generic_depth);
                    }
                    return;
                }

                match token.kind {
                    // `$this->handler = ...` is named by the property
                    _ if !state.expect_value
                        && state.follows(TokenKind::ThinArrow)
                        && token.kind.is_word() =>
                    {
                        symbol.set_name(token.text);
                    }
                    TokenKind::Assign if !state.expect_value => state.expect_value = true,
                    TokenKind::Semicolon | TokenKind::Comma => state.done = true,
                    _ if state.expect_value && !GRAMMAR.matches(token, GrammarProperty::Modifiers) => {
                        state.done = true;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
