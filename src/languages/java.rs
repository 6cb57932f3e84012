//! Java recognizer
//!
//! Shares the type-before-name rules of the C family. Differences: an explicit
//! primitive type vocabulary, modifiers that always precede the type, generic and
//! array types on both parameters and return values, and annotations, which are
//! removed before tokenizing because `@` is not a token.

use crate::grammar::{Grammar, GrammarDefinition};
use crate::languages::common::{typed_function, typed_parameters, typed_variable, TypedRules};
use crate::lexer::Token;
use crate::parser::{ParseState, Recognizer};
use crate::symbol::Symbol;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

const DEFINITION: GrammarDefinition = GrammarDefinition {
    class: &["class", "interface", "enum", "record"],
    function: &[],
    identifier: r"^[A-Za-z_$][A-Za-z0-9_$]*$",
    modifiers: &[
        "public",
        "private",
        "protected",
        "static",
        "final",
        "abstract",
        "synchronized",
        "native",
        "transient",
        "volatile",
        "strictfp",
        "default",
        "sealed",
        "non-sealed",
    ],
    variables: &[],
    types: &[
        "byte", "short", "int", "long", "float", "double", "boolean", "char", "void", "var",
    ],
    reserved: &[
        "if", "else", "for", "while", "do", "switch", "case", "return", "throw", "new", "try",
        "catch", "finally", "import", "package", "break", "continue", "assert",
    ],
};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(DEFINITION).expect("Java grammar is valid"));

/// `@Override`, `@SuppressWarnings("unchecked")`, `@interface`
static ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z_][A-Za-z0-9_.]*)(\s*\([^)]*\))?\s*").expect("annotation pattern is valid")
});

const RULES: TypedRules = TypedRules {
    declarators: false,
    postfix_arrays: false,
};

pub struct Java;

impl Recognizer for Java {
    fn grammar(&self) -> &Grammar {
        &GRAMMAR
    }

    fn prepare<'a>(&self, code: &'a str) -> Cow<'a, str> {
        ANNOTATION.replace_all(code, |caps: &Captures<'_>| {
            if &caps[1] == "interface" {
                "interface ".to_string()
            } else {
                String::new()
            }
        })
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
