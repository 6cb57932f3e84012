//! C-family recognizer (C, C++, Objective-C)
//!
//! There is no function keyword: a function is inferred purely from the opening
//! parenthesis after `type name`. The return type is whatever type word preceded
//! the name, and storage or signedness words are skipped wherever they appear.

use crate::grammar::{Grammar, GrammarDefinition};
use crate::languages::common::{typed_function, typed_parameters, typed_variable, TypedRules};
use crate::lexer::Token;
use crate::parser::{ParseState, Recognizer};
use crate::symbol::Symbol;
use once_cell::sync::Lazy;

const DEFINITION: GrammarDefinition = GrammarDefinition {
    class: &["class", "struct", "union", "enum"],
    function: &[],
    identifier: r"^[A-Za-z_][A-Za-z0-9_]*$",
    modifiers: &[
        "static",
        "const",
        "constexpr",
        "unsigned",
        "signed",
        "extern",
        "inline",
        "volatile",
        "register",
        "virtual",
        "explicit",
        "friend",
        "mutable",
        "typedef",
        "restrict",
        "public",
        "private",
        "protected",
    ],
    variables: &[],
    types: &[
        "void", "char", "short", "int", "long", "float", "double", "bool", "_Bool", "size_t",
        "ssize_t", "wchar_t", "auto", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t",
        "uint16_t", "uint32_t", "uint64_t",
    ],
    reserved: &[
        "if", "else", "for", "while", "do", "switch", "case", "return", "goto", "break",
        "continue", "sizeof", "new", "delete", "throw", "using", "namespace", "template",
    ],
};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(DEFINITION).expect("C grammar is valid"));

const RULES: TypedRules = TypedRules {
    declarators: true,
    postfix_arrays: true,
};

pub struct C;

impl Recognizer for C {
    fn grammar(&self) -> &Grammar {
        &GRAMMAR
    }

    fn recognize_function(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        typed_function(token, symbol, state);
    }

    fn recognize_parameters(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        typed_parameters(&GRAMMAR, RULES, token, symbol, state);
    }

    fn recognize_variable(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        typed_variable(&GRAMMAR, RULES, token, symbol, state);
    }
}
