//! SCSS recognizer
//!
//! Mixins and functions are introduced by at-rules; the `@` is dropped before
//! tokenizing so `@mixin` arrives as a plain keyword. Parameters are untyped
//! `$name` words with optional `: default` values. There are no declared types:
//! a variable's type is inferred from the literal it is assigned.

use crate::grammar::{Grammar, GrammarDefinition, GrammarProperty};
use crate::languages::common::collect_default;
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseState, Recognizer};
use crate::symbol::{Param, Symbol, SymbolKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

const DEFINITION: GrammarDefinition = GrammarDefinition {
    class: &[],
    function: &["function", "mixin"],
    identifier: r"^\$?[A-Za-z_-][A-Za-z0-9_-]*$",
    modifiers: &[],
    variables: &[],
    types: &[],
    reserved: &[
        "if", "else", "each", "for", "while", "return", "include", "extend", "use", "forward",
        "import", "media", "content",
    ],
};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(DEFINITION).expect("SCSS grammar is valid"));

/// SassDoc type of the literal a variable is assigned
fn infer_type(token: &Token<'_>) -> Option<&'static str> {
    match token.kind {
        TokenKind::Number => Some("Number"),
        TokenKind::Hash => Some("Color"),
        TokenKind::String => Some("String"),
        TokenKind::OpenParen => Some("List"),
        TokenKind::Identifier => match token.text {
            "true" | "false" => Some("Bool"),
            "null" => Some("Null"),
            _ => None,
        },
        _ => None,
    }
}

pub struct Scss;

impl Recognizer for Scss {
    fn grammar(&self) -> &Grammar {
        &GRAMMAR
    }

    fn prepare<'a>(&self, code: &'a str) -> Cow<'a, str> {
        if code.contains('@') {
            Cow::Owned(code.replace('@', ""))
        } else {
            Cow::Borrowed(code)
        }
    }

    fn recognize_function(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if symbol.is(SymbolKind::Unset) && GRAMMAR.matches(token, GrammarProperty::Function) {
            // only `@function` produces a value
            symbol.make_function(token.text == "function");
            state.expect_name = true;
            return;
        }
        if !symbol.is(SymbolKind::Function) {
            return;
        }

        match token.kind {
            TokenKind::Identifier if state.expect_name && GRAMMAR.is_name(token) => {
                symbol.set_name(token.text);
                state.expect_name = false;
            }
            TokenKind::OpenParen if !state.expect_parameter && !state.parameters_closed => {
                state.open_parameters();
            }
            TokenKind::OpenBrace | TokenKind::Semicolon if !state.in_parameters() => {
                state.done = true;
            }
            _ => {}
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
            TokenKind::Colon => state.expect_value = true,
            TokenKind::Identifier if token.text.starts_with('$') => {
                symbol.push_param(Param::named(token.text));
            }
            _ => {}
        }
    }

    fn recognize_variable(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        match symbol.kind {
            SymbolKind::Unset => {
                if GRAMMAR.matches(token, GrammarProperty::Reserved) {
                    state.done = true;
                } else if token.is(TokenKind::Identifier) && token.text.starts_with('$') {
                    symbol.kind = SymbolKind::Variable;
                    symbol.set_name(token.text);
                } else {
                    // selectors, properties and anything else declare nothing
                    state.done = true;
                }
            }
            SymbolKind::Variable if state.expect_value => {
                symbol.var_type = infer_type(token).map(str::to_string);
                state.done = true;
            }
            SymbolKind::Variable => {
                if token.is(TokenKind::Colon) {
                    state.expect_value = true;
                } else {
                    state.done = true;
                }
            }
            _ => {}
        }
    }

    fn var_tag(&self) -> &'static str {
        "@type"
    }
}
