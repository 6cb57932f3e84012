//! Per-language keyword tables
//!
//! A [`Grammar`] is a static lookup table built once per language. It answers one
//! question, "is this token a member of that property?", and nothing else. The
//! recognizers combine these answers with token kinds to decide what a line
//! declares.
//!
//! Membership is exact: tokens are never case folded. Asking for a property that
//! does not exist is a programming error ([`DocblockError::UnknownGrammarProperty`]),
//! not a parse failure.

use crate::error::{DocblockError, DocblockResult};
use crate::lexer::Token;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The fixed set of properties a grammar can be queried for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarProperty {
    /// Words that introduce a class-like declaration
    Class,
    /// Words that introduce a function-like declaration
    Function,
    /// Pattern a bare identifier must satisfy
    Identifier,
    /// Visibility and storage words that can be skipped
    Modifiers,
    /// Words that introduce a variable declaration
    Variables,
    /// Built-in type names
    Types,
    /// Control-flow words that never name a declaration
    Reserved,
}

impl GrammarProperty {
    pub const ALL: [GrammarProperty; 7] = [
        GrammarProperty::Class,
        GrammarProperty::Function,
        GrammarProperty::Identifier,
        GrammarProperty::Modifiers,
        GrammarProperty::Variables,
        GrammarProperty::Types,
        GrammarProperty::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarProperty::Class => "class",
            GrammarProperty::Function => "function",
            GrammarProperty::Identifier => "identifier",
            GrammarProperty::Modifiers => "modifiers",
            GrammarProperty::Variables => "variables",
            GrammarProperty::Types => "types",
            GrammarProperty::Reserved => "reserved",
        }
    }
}

impl FromStr for GrammarProperty {
    type Err = DocblockError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        GrammarProperty::ALL
            .into_iter()
            .find(|property| property.as_str() == name)
            .ok_or_else(|| DocblockError::UnknownGrammarProperty(name.to_string()))
    }
}

impl fmt::Display for GrammarProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source tables for a grammar, usually a `const` in a language module
#[derive(Debug, Clone, Copy)]
pub struct GrammarDefinition {
    pub class: &'static [&'static str],
    pub function: &'static [&'static str],
    pub identifier: &'static str,
    pub modifiers: &'static [&'static str],
    pub variables: &'static [&'static str],
    pub types: &'static [&'static str],
    pub reserved: &'static [&'static str],
}

/// Compiled keyword sets and identifier pattern for one language
#[derive(Debug, Clone)]
pub struct Grammar {
    class: HashSet<&'static str>,
    function: HashSet<&'static str>,
    identifier: Regex,
    modifiers: HashSet<&'static str>,
    variables: HashSet<&'static str>,
    types: HashSet<&'static str>,
    reserved: HashSet<&'static str>,
}

impl Grammar {
    /// Compile a grammar definition
    pub fn new(definition: GrammarDefinition) -> Result<Self, regex::Error> {
        Ok(Self {
            class: definition.class.iter().copied().collect(),
            function: definition.function.iter().copied().collect(),
            identifier: Regex::new(definition.identifier)?,
            modifiers: definition.modifiers.iter().copied().collect(),
            variables: definition.variables.iter().copied().collect(),
            types: definition.types.iter().copied().collect(),
            reserved: definition.reserved.iter().copied().collect(),
        })
    }

    /// Check whether `token` belongs to `property`
    pub fn is(&self, token: &str, property: GrammarProperty) -> bool {
        match property {
            GrammarProperty::Class => self.class.contains(token),
            GrammarProperty::Function => self.function.contains(token),
            GrammarProperty::Identifier => self.identifier.is_match(token),
            GrammarProperty::Modifiers => self.modifiers.contains(token),
            GrammarProperty::Variables => self.variables.contains(token),
            GrammarProperty::Types => self.types.contains(token),
            GrammarProperty::Reserved => self.reserved.contains(token),
        }
    }

    /// Same as [`Grammar::is`], addressing the property by name
    ///
    /// Fails fast on a property name the grammar does not define.
    pub fn is_named(&self, token: &str, property: &str) -> DocblockResult<bool> {
        let property: GrammarProperty = property.parse()?;
        Ok(self.is(token, property))
    }

    /// Check whether a word token belongs to `property`
    ///
    /// Punctuation and literals never match, even if their text would.
    pub fn matches(&self, token: &Token<'_>, property: GrammarProperty) -> bool {
        token.kind.is_word() && self.is(token.text, property)
    }

    /// Check whether `text` is any keyword of this grammar
    pub fn is_keyword(&self, text: &str) -> bool {
        self.class.contains(text)
            || self.function.contains(text)
            || self.modifiers.contains(text)
            || self.variables.contains(text)
            || self.reserved.contains(text)
    }

    /// Check whether a token can name a declaration
    ///
    /// It must be a word matching the identifier pattern that is not itself a
    /// keyword or a built-in type.
    pub fn is_name(&self, token: &Token<'_>) -> bool {
        token.kind.is_word()
            && self.identifier.is_match(token.text)
            && !self.is_keyword(token.text)
            && !self.types.contains(token.text)
    }
}
