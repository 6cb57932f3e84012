//! JavaScript and TypeScript recognizer
//!
//! Names come first and types, when present, follow a colon. Because almost any
//! expression can be assigned a function, the rules keep the most recent
//! identifier as a candidate name: in `Bar.prototype.foo = function () {}` each
//! dotted segment replaces the previous one and `foo` is what remains when the
//! `function` keyword or an arrow parameter list shows up.

use crate::grammar::{Grammar, GrammarDefinition, GrammarProperty};
use crate::languages::common::{collect_default, compose_return, compose_type};
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseState, Recognizer};
use crate::symbol::{Param, Symbol, SymbolKind};
use once_cell::sync::Lazy;

const DEFINITION: GrammarDefinition = GrammarDefinition {
    class: &["class", "interface", "enum"],
    function: &["function"],
    identifier: r"^[A-Za-z_$][A-Za-z0-9_$]*$",
    modifiers: &[
        "async", "static", "export", "default", "public", "private", "protected", "readonly",
        "abstract", "get", "set", "declare", "override",
    ],
    variables: &["const", "let", "var"],
    types: &[
        "string", "number", "boolean", "any", "void", "never", "unknown", "object", "symbol",
        "bigint", "undefined", "null",
    ],
    reserved: &[
        "if", "else", "for", "while", "do", "switch", "case", "return", "throw", "new", "typeof",
        "delete", "import", "await", "yield", "try", "catch", "finally", "break", "continue",
        "instanceof", "in", "of",
    ],
};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(DEFINITION).expect("JavaScript grammar is valid"));

pub struct JavaScript;

impl JavaScript {
    /// Check whether `(` starts a parameter list rather than a call or a group
    fn opens_parameters(symbol: &Symbol, state: &ParseState) -> bool {
        if state.expect_parameter || state.parameters_closed || state.generic_depth > 0 {
            return false;
        }
        match symbol.kind {
            SymbolKind::Function => true,
            // method shorthand: `foo(a, b) {`, `get(key) {`
            SymbolKind::Unset => !symbol.name.is_empty() || state.held_name.is_some(),
            // arrow functions: `foo = (a) =>`, `foo: (a) =>`
            SymbolKind::Variable => {
                state.expect_value || (state.expect_variable_type && symbol.var_type.is_none())
            }
            SymbolKind::Class => false,
        }
    }

    /// The parenthesis after `=` was a group, not a parameter list
    fn abandon_arrow(symbol: &mut Symbol, state: &mut ParseState) {
        state.tentative_arrow = false;
        symbol.make_variable(state.held_type.take());
    }

    fn destructure(token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        match token.kind {
            TokenKind::OpenBrace | TokenKind::OpenBracket => {
                // `{ a: { b } }` binds `b` only; `a` is just the key
                if state.follows(TokenKind::Colon) {
                    symbol.discard_last_param();
                }
                state.destructuring += 1;
            }
            TokenKind::CloseBrace | TokenKind::CloseBracket => {
                state.destructuring -= 1;
                state.expect_value = false;
            }
            TokenKind::Comma => state.expect_value = false,
            TokenKind::Assign => state.expect_value = true,
            TokenKind::Identifier if GRAMMAR.is_name(token) => {
                if state.follows(TokenKind::Colon) {
                    // `{ a: renamed }` binds `renamed`
                    if let Some(param) = symbol.last_param_mut() {
                        param.name = token.text.to_string();
                    }
                } else {
                    symbol.push_param(Param::named(token.text));
                }
            }
            _ => {}
        }
    }

    fn unset_variable(token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if state.generic_depth > 0 {
            match token.kind {
                TokenKind::LessThan => state.generic_depth += 1,
                TokenKind::GreaterThan => state.generic_depth -= 1,
                _ => {}
            }
            return;
        }
        if GRAMMAR.matches(token, GrammarProperty::Reserved) {
            state.done = true;
            return;
        }
        if GRAMMAR.matches(token, GrammarProperty::Variables) {
            symbol.kind = SymbolKind::Variable;
            state.expect_name = true;
            return;
        }

        let named = !symbol.name.is_empty();
        state.held_name = None;
        match token.kind {
            TokenKind::Identifier if GRAMMAR.is_name(token) => symbol.set_name(token.text),
            TokenKind::Identifier if GRAMMAR.matches(token, GrammarProperty::Modifiers) => {
                state.held_name = Some(token.text.to_string());
            }
            TokenKind::LessThan if named => state.generic_depth += 1,
            TokenKind::Assign if named => {
                symbol.kind = SymbolKind::Variable;
                state.expect_value = true;
            }
            // class property: `count: number`
            TokenKind::Colon if named => {
                symbol.kind = SymbolKind::Variable;
                state.expect_variable_type = true;
            }
            _ => {}
        }
    }
}

impl Recognizer for JavaScript {
    fn grammar(&self) -> &Grammar {
        &GRAMMAR
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
                TokenKind::FatArrow => {
                    state.tentative_arrow = false;
                    state.done = true;
                }
                _ if state.tentative_arrow => {
                    Self::abandon_arrow(symbol, state);
                    state.done = true;
                }
                TokenKind::OpenBrace | TokenKind::Semicolon => state.done = true,
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
            state.expect_variable_type = false;
            return;
        }

        if symbol.is(SymbolKind::Function) && state.expect_name && GRAMMAR.is_name(token) {
            symbol.set_name(token.text);
            state.expect_name = false;
            return;
        }

        if token.is(TokenKind::OpenParen) && Self::opens_parameters(symbol, state) {
            match symbol.kind {
                SymbolKind::Function => {}
                SymbolKind::Variable => {
                    // `x = (a + b)` is a group; only `=>` after the list makes an arrow
                    state.tentative_arrow = true;
                    state.held_type = symbol.var_type.take();
                    symbol.make_function(true);
                }
                _ => {
                    if let Some(name) = state.held_name.take() {
                        if symbol.name.is_empty() {
                            symbol.set_name(&name);
                        }
                    }
                    let returns = symbol.name != "constructor";
                    symbol.make_function(returns);
                }
            }
            state.open_parameters();
        }
    }

    fn finish(&self, symbol: &mut Symbol, state: &mut ParseState) {
        // an unclosed list is left as an arrow signature that continues on the next line
        if state.tentative_arrow && state.parameters_closed {
            Self::abandon_arrow(symbol, state);
        }
    }

    fn recognize_parameters(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if !state.in_parameters() {
            return;
        }
        if state.expect_value && collect_default(token, symbol, state) {
            return;
        }

        if state.expect_parameter_type {
            let composed = if state.pending_type.is_some() {
                compose_type(&mut state.pending_type, token, &mut state.generic_depth)
            } else if let Some(param) = symbol.last_param_mut() {
                compose_type(&mut param.kind, token, &mut state.generic_depth)
            } else {
                false
            };
            if composed {
                return;
            }
            state.expect_parameter_type = false;
        }

        if state.destructuring > 0 {
            Self::destructure(token, symbol, state);
            return;
        }

        match token.kind {
            TokenKind::OpenBrace | TokenKind::OpenBracket => state.destructuring = 1,
            TokenKind::CloseParen => state.close_parameters(),
            TokenKind::Comma => state.next_parameter(),
            TokenKind::Colon => {
                if state.follows(TokenKind::CloseBrace) || state.follows(TokenKind::CloseBracket) {
                    // a pattern's annotation has no single binding to attach to
                    state.pending_type = Some(String::new());
                }
                state.expect_parameter_type = true;
            }
            TokenKind::Assign => state.expect_value = true,
            TokenKind::Identifier if GRAMMAR.is_name(token) => {
                symbol.push_param(Param::named(token.text));
            }
            _ => {}
        }
    }

    fn recognize_variable(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        match symbol.kind {
            SymbolKind::Unset => Self::unset_variable(token, symbol, state),
            SymbolKind::Variable => {
                if state.expect_name {
                    if GRAMMAR.is_name(token) {
                        symbol.set_name(token.text);
                        state.expect_name = false;
                    }
                    return;
                }
                if state.expect_variable_type {
                    if compose_type(&mut symbol.var_type, token, &mut state.generic_depth) {
                        return;
                    }
                    state.expect_variable_type = false;
                }

                match token.kind {
                    TokenKind::Colon if symbol.var_type.is_none() => {
                        state.expect_variable_type = true;
                    }
                    TokenKind::Assign => state.expect_value = true,
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

    fn var_tag(&self) -> &'static str {
        "@type"
    }
}
