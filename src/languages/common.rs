//! Building blocks shared by the language recognizers
//!
//! Types are composed incrementally: the first word starts a type and punctuation
//! such as `<`, `[`, `|` or `.` extends it, so `Array<number>` or `int[]` arrive as
//! one string no matter how many tokens they span. A type is "open" while it ends
//! in a character that needs a continuation; an open type accepts the next word,
//! a closed one does not, which is how a typed language tells `String name` apart
//! from `String.Name`.
//!
//! The C-family and Java recognizers share the type-before-name rules defined here.

use crate::grammar::{Grammar, GrammarProperty};
use crate::lexer::{Token, TokenKind};
use crate::parser::ParseState;
use crate::symbol::{Param, Symbol, SymbolKind};

const OPEN_TYPE_ENDINGS: &[char] = &['<', '|', '.', ' ', '?', ':'];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Extend the type in `target` with `token`
///
/// Returns false if the token does not belong to the type, in which case the
/// type is left untouched.
pub fn compose_type(target: &mut Option<String>, token: &Token<'_>, depth: &mut usize) -> bool {
    let current = target.as_deref().unwrap_or("");
    let open =
        current.is_empty() || (current.ends_with(OPEN_TYPE_ENDINGS) && !current.ends_with("..."));

    let piece = match token.kind {
        TokenKind::Identifier if open => token.text,
        TokenKind::Question if current.is_empty() => "?",
        TokenKind::LessThan if !open => {
            *depth += 1;
            "<"
        }
        TokenKind::GreaterThan if *depth > 0 => {
            *depth -= 1;
            ">"
        }
        TokenKind::Comma if *depth > 0 => ", ",
        TokenKind::OpenBracket if !open => "[]",
        TokenKind::CloseBracket if current.ends_with("[]") => "",
        TokenKind::Pipe if !open => "|",
        TokenKind::Dot if !open => ".",
        TokenKind::DoubleColon if !open => "::",
        TokenKind::Ellipsis if !open => "...",
        _ => return false,
    };

    target.get_or_insert_with(String::new).push_str(piece);
    true
}

/// Extend the return type; a function declared `void` returns nothing
pub fn compose_return(token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) -> bool {
    let composed = compose_type(
        &mut symbol.return_info.kind,
        token,
        &mut state.generic_depth,
    );
    if composed {
        symbol.return_info.present = symbol.return_info.kind.as_deref() != Some("void");
    }
    composed
}

/// Append source text to a value, keeping adjacent words apart
pub fn append_value(target: &mut Option<String>, text: &str) {
    let value = target.get_or_insert_with(String::new);
    if value.ends_with(is_word_char) && text.starts_with(is_word_char) {
        value.push(' ');
    }
    value.push_str(text);
}

/// Collect a token into the default value of the last parameter
///
/// Returns false when the token ends the value (a `,` or a closing bracket at the
/// outermost level); the caller then handles it as parameter list punctuation.
pub fn collect_default(token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) -> bool {
    match token.kind {
        TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace => state.nesting += 1,
        TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
            if state.nesting == 0 {
                return false;
            }
            state.nesting -= 1;
        }
        TokenKind::Comma if state.nesting == 0 => return false,
        _ => {}
    }

    if let Some(param) = symbol.last_param_mut() {
        append_value(&mut param.value, token.text);
    }
    true
}

/// Rule differences between the type-before-name languages
#[derive(Debug, Clone, Copy)]
pub struct TypedRules {
    /// `*` and `&` are declarators that belong to the type
    pub declarators: bool,
    /// `name[10]` turns the declared type into an array
    pub postfix_arrays: bool,
}

/// Function detection for languages without a function keyword
///
/// A declaration `type name` becomes a function when an opening parenthesis
/// follows; a single word followed by `(` is a constructor.
pub fn typed_function(token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
    if symbol.is(SymbolKind::Function) && state.parameters_closed {
        if state.expect_return_type {
            if compose_return(token, symbol, state) {
                return;
            }
            state.expect_return_type = false;
        }

        match token.kind {
            TokenKind::ThinArrow => {
                symbol.return_info.present = true;
                symbol.return_info.kind = None;
                state.expect_return_type = true;
            }
            TokenKind::OpenBrace | TokenKind::Semicolon | TokenKind::Assign => state.done = true,
            _ => {}
        }
        return;
    }

    let opens_call = token.is(TokenKind::OpenParen)
        && symbol.is(SymbolKind::Variable)
        && !state.expect_parameter
        && !state.parameters_closed
        && state.generic_depth == 0;
    if !opens_call {
        return;
    }

    if symbol.name.is_empty() {
        let Some(class_name) = symbol.var_type.take() else {
            return;
        };
        let name = class_name.rsplit("::").next().unwrap_or(&class_name).to_string();
        symbol.set_name(&name);
        symbol.make_function(false);
    } else {
        let returns = symbol.var_type.take();
        let present = returns.as_deref().is_some_and(|kind| kind != "void");
        symbol.make_function(present);
        symbol.return_info.kind = returns.filter(|_| present);
    }
    state.open_parameters();
}

/// Parameter scanning for `type name` parameter lists
pub fn typed_parameters(
    grammar: &Grammar,
    rules: TypedRules,
    token: &Token<'_>,
    symbol: &mut Symbol,
    state: &mut ParseState,
) {
    if !state.in_parameters() {
        return;
    }
    if state.expect_value && collect_default(token, symbol, state) {
        return;
    }

    match token.kind {
        // Only the list opener reaches here; nested parens are consumed as values.
        TokenKind::OpenParen => {}
        TokenKind::CloseParen => {
            flush_pending_type(symbol, state);
            state.close_parameters();
        }
        TokenKind::Comma if state.generic_depth == 0 => {
            flush_pending_type(symbol, state);
            state.next_parameter();
        }
        TokenKind::Assign => {
            flush_pending_type(symbol, state);
            state.expect_value = true;
        }
        TokenKind::Star | TokenKind::Ampersand if rules.declarators => {
            if let Some(kind) = state.pending_type.as_mut() {
                kind.push_str(token.text);
            }
        }
        TokenKind::OpenBracket if rules.postfix_arrays && state.pending_type.is_none() => {
            if let Some(param) = symbol.last_param_mut() {
                let kind = param.kind.get_or_insert_with(String::new);
                if !kind.ends_with("[]") {
                    kind.push_str("[]");
                }
            }
        }
        _ => {
            if grammar.matches(token, GrammarProperty::Modifiers)
                || grammar.matches(token, GrammarProperty::Class)
            {
                return;
            }

            if state.pending_type.is_some() {
                if compose_type(&mut state.pending_type, token, &mut state.generic_depth) {
                    return;
                }
                if grammar.matches(token, GrammarProperty::Types) {
                    // `long int`: the last type word wins
                    state.pending_type = Some(token.text.to_string());
                } else if token.kind.is_word() {
                    let kind = state.pending_type.take();
                    symbol.push_param(Param::named(token.text).with_type(kind));
                }
                return;
            }

            if token.kind.is_word() {
                state.pending_type = Some(token.text.to_string());
            }
        }
    }
}

/// A type that never received a name still counts as a parameter, except `void`
fn flush_pending_type(symbol: &mut Symbol, state: &mut ParseState) {
    if let Some(kind) = state.pending_type.take() {
        if kind != "void" {
            symbol.push_param(Param::typed(kind));
        }
    }
}

/// Variable detection for `type name` declarations
///
/// The first type word makes the line a variable declaration; the function rule
/// reclassifies it once a parenthesis follows the name.
pub fn typed_variable(
    grammar: &Grammar,
    rules: TypedRules,
    token: &Token<'_>,
    symbol: &mut Symbol,
    state: &mut ParseState,
) {
    match symbol.kind {
        SymbolKind::Unset => {
            if state.generic_depth > 0 {
                // `<T>` type parameters ahead of a generic method's return type
                match token.kind {
                    TokenKind::LessThan => state.generic_depth += 1,
                    TokenKind::GreaterThan => state.generic_depth -= 1,
                    _ => {}
                }
                return;
            }
            if grammar.matches(token, GrammarProperty::Reserved) {
                state.done = true;
                return;
            }
            if token.is(TokenKind::LessThan) {
                state.generic_depth += 1;
                return;
            }
            if grammar.matches(token, GrammarProperty::Modifiers) {
                return;
            }

            let is_type = grammar.matches(token, GrammarProperty::Types)
                || (grammar.matches(token, GrammarProperty::Identifier)
                    && !grammar.is_keyword(token.text));
            if is_type {
                symbol.kind = SymbolKind::Variable;
                symbol.var_type = Some(token.text.to_string());
            }
        }
        SymbolKind::Variable if symbol.name.is_empty() => {
            if grammar.matches(token, GrammarProperty::Modifiers) {
                return;
            }
            if rules.declarators && matches!(token.kind, TokenKind::Star | TokenKind::Ampersand) {
                if let Some(kind) = symbol.var_type.as_mut() {
                    kind.push_str(token.text);
                }
                return;
            }
            if compose_type(&mut symbol.var_type, token, &mut state.generic_depth) {
                return;
            }
            if grammar.matches(token, GrammarProperty::Types) {
                symbol.var_type = Some(token.text.to_string());
            } else if grammar.is_name(token) {
                symbol.set_name(token.text);
            }
        }
        SymbolKind::Variable => match token.kind {
            // `int Foo::bar(...)`: the qualified member is the name
            TokenKind::DoubleColon => state.expect_name = true,
            TokenKind::Identifier if state.expect_name => {
                if grammar.is_name(token) {
                    symbol.set_name(token.text);
                }
                state.expect_name = false;
            }
            TokenKind::OpenBracket if rules.postfix_arrays => {
                if let Some(kind) = symbol.var_type.as_mut() {
                    if !kind.ends_with("[]") {
                        kind.push_str("[]");
                    }
                }
            }
            TokenKind::Assign | TokenKind::Semicolon | TokenKind::Comma => state.done = true,
            _ => {}
        },
        _ => {}
    }
}
