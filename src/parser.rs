//! Symbol recognition engine
//!
//! This is not a grammar parser. A declaration line is classified by a short run of
//! lightweight signals: a class keyword means a name follows, an opening parenthesis
//! means a function, a colon or arrow means a type comes next. Each language supplies
//! four recognition rules (see [`Recognizer`]) and the engine feeds every significant
//! token through them in a fixed order:
//!
//!     1. recognize_class
//!     2. recognize_function
//!     3. recognize_parameters
//!     4. recognize_variable
//!
//! Order is the tie-break. Class recognition can finish the pass as soon as a name is
//! known; function recognition runs before the variable rule so an identifier that is
//! followed by `(` is never left classified as a variable.
//!
//! State shared between the rules lives in [`ParseState`]. It is created fresh for
//! every pass, handed to each rule by exclusive reference and reset when the pass
//! ends, so two passes never observe each other.

use crate::error::DocblockResult;
use crate::grammar::{Grammar, GrammarProperty};
use crate::languages::Language;
use crate::lexer::{tokenize_significant, Token, TokenKind};
use crate::symbol::{Symbol, SymbolKind};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Expectation flags threaded through one recognition pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    /// Nothing after the current token matters
    pub done: bool,
    /// The next valid identifier names the symbol
    pub expect_name: bool,
    /// Tokens belong to the parameter list
    pub expect_parameter: bool,
    /// Tokens compose the type of the current parameter
    pub expect_parameter_type: bool,
    /// Tokens compose the return type
    pub expect_return_type: bool,
    /// Tokens compose the declared variable type
    pub expect_variable_type: bool,
    /// Tokens belong to an assigned or default value
    pub expect_value: bool,
    /// The parameter list has been closed
    pub parameters_closed: bool,
    /// Open `<` inside the type being composed
    pub generic_depth: usize,
    /// Open brackets inside a default value
    pub nesting: usize,
    /// Open braces of a destructuring pattern inside the parameter list
    pub destructuring: usize,
    /// A parameter type seen before its name
    pub pending_type: Option<String>,
    /// A parenthesis after `=` read as arrow parameters until `=>` confirms it
    pub tentative_arrow: bool,
    /// Variable type set aside while the arrow reading is tentative
    pub held_type: Option<String>,
    /// A modifier word that names a method if `(` comes next
    pub held_name: Option<String>,
    /// Kind of the previous significant token
    pub previous: Option<TokenKind>,
}

impl ParseState {
    /// Start scanning the parameter list
    pub fn open_parameters(&mut self) {
        self.expect_parameter = true;
        self.expect_name = false;
        self.expect_value = false;
    }

    /// Stop scanning the parameter list
    pub fn close_parameters(&mut self) {
        self.next_parameter();
        self.expect_parameter = false;
        self.parameters_closed = true;
    }

    /// Forget everything specific to the current parameter
    pub fn next_parameter(&mut self) {
        self.expect_parameter_type = false;
        self.expect_value = false;
        self.generic_depth = 0;
        self.nesting = 0;
        self.pending_type = None;
    }

    /// True while tokens are inside the parameter list
    pub fn in_parameters(&self) -> bool {
        self.expect_parameter && !self.parameters_closed
    }

    /// True if the previous significant token was `kind`
    pub fn follows(&self, kind: TokenKind) -> bool {
        self.previous == Some(kind)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Recognition rules and rendering hooks for one language
pub trait Recognizer: Sync {
    /// The keyword tables this recognizer consults
    fn grammar(&self) -> &Grammar;

    /// Adjust the raw line before it is tokenized
    fn prepare<'a>(&self, code: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(code)
    }

    /// Check whether a token can name a class or function
    fn is_declared_name(&self, token: &Token<'_>) -> bool {
        self.grammar().is_name(token)
    }

    /// Detect a class keyword and the name that follows it
    fn recognize_class(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        if symbol.is(SymbolKind::Unset) && self.grammar().matches(token, GrammarProperty::Class) {
            symbol.kind = SymbolKind::Class;
            state.expect_name = true;
            return;
        }

        if symbol.is(SymbolKind::Class) && state.expect_name && self.is_declared_name(token) {
            symbol.set_name(token.text);
            state.expect_name = false;
            state.done = true;
        }
    }

    /// Detect a function keyword or the structural cue of a function
    fn recognize_function(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState);

    /// Collect parameters while the parameter list is open
    fn recognize_parameters(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState);

    /// Detect variable declarations, their names and types
    fn recognize_variable(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState);

    /// Settle anything still undecided once the tokens run out
    fn finish(&self, _symbol: &mut Symbol, _state: &mut ParseState) {}

    /// Tag keyword for a parameter line
    fn param_tag(&self) -> &'static str {
        "@param"
    }

    /// Tag keyword for the return line
    fn return_tag(&self) -> &'static str {
        "@return"
    }

    /// Tag keyword for a variable type line
    fn var_tag(&self) -> &'static str {
        "@var"
    }
}

/// Drives tokens of one line through a language's recognizer
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    language: Language,
}

impl Parser {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Run one recognition pass over `code`
    ///
    /// Fails only if the line cannot be tokenized. A line that declares nothing
    /// recognizable still succeeds, with an incomplete symbol.
    pub fn parse(&self, code: &str) -> DocblockResult<Symbol> {
        let recognizer = self.language.recognizer();
        let source = recognizer.prepare(code);
        let tokens = tokenize_significant(&source)?;

        let mut state = ParseState::default();
        let symbol = self.run(&tokens, &mut state);

        debug!(
            language = %self.language,
            kind = %symbol.kind,
            name = %symbol.name,
            params = symbol.params.len(),
            "recognition pass finished"
        );
        Ok(symbol)
    }

    /// Feed already significant tokens through the rules
    ///
    /// `state` is reset before returning.
    pub fn run(&self, tokens: &[Token<'_>], state: &mut ParseState) -> Symbol {
        let mut symbol = Symbol::new();

        for token in tokens {
            if state.done {
                break;
            }
            self.step(token, &mut symbol, state);
        }

        self.language.recognizer().finish(&mut symbol, state);
        state.reset();
        symbol
    }

    /// Apply the four rules to a single token
    pub fn step(&self, token: &Token<'_>, symbol: &mut Symbol, state: &mut ParseState) {
        let recognizer = self.language.recognizer();

        recognizer.recognize_class(token, symbol, state);
        recognizer.recognize_function(token, symbol, state);
        recognizer.recognize_parameters(token, symbol, state);
        recognizer.recognize_variable(token, symbol, state);
        state.previous = Some(token.kind);

        trace!(
            token = %token,
            kind = %symbol.kind,
            name = %symbol.name,
            done = state.done,
            "step"
        );
    }
}
