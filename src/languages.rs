//! Supported languages
//!
//! The set of languages is closed: every variant of [`Language`] owns exactly one
//! recognizer, picked by a `match` rather than by inspecting types at runtime.
//! Editors address languages by identifier (`typescriptreact`, `cpp`, ...);
//! [`Language::from_id`] maps those onto the recognizer that understands them.

pub mod c;
pub mod common;
pub mod java;
pub mod javascript;
pub mod php;
pub mod scss;

use crate::error::DocblockError;
use crate::parser::Recognizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language with its own recognition rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Java,
    JavaScript,
    Php,
    Scss,
}

/// Editor language identifiers and the language handling each of them
const LANGUAGE_IDS: &[(&str, Language)] = &[
    ("c", Language::C),
    ("cpp", Language::C),
    ("objective-c", Language::C),
    ("objective-cpp", Language::C),
    ("java", Language::Java),
    ("javascript", Language::JavaScript),
    ("javascriptreact", Language::JavaScript),
    ("typescript", Language::JavaScript),
    ("typescriptreact", Language::JavaScript),
    ("vue", Language::JavaScript),
    ("php", Language::Php),
    ("scss", Language::Scss),
];

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Java,
        Language::JavaScript,
        Language::Php,
        Language::Scss,
    ];

    /// Look up the language for an editor language identifier
    pub fn from_id(id: &str) -> Result<Self, DocblockError> {
        LANGUAGE_IDS
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, language)| *language)
            .ok_or_else(|| DocblockError::UnsupportedLanguage(id.to_string()))
    }

    /// All identifiers that resolve to some language
    pub fn ids() -> impl Iterator<Item = &'static str> {
        LANGUAGE_IDS.iter().map(|(id, _)| *id)
    }

    /// Identifiers that resolve to this language
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        LANGUAGE_IDS
            .iter()
            .filter(move |(_, language)| *language == self)
            .map(|(id, _)| *id)
    }

    /// Canonical identifier
    pub fn id(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Php => "php",
            Language::Scss => "scss",
        }
    }

    /// The recognizer implementing this language's rules
    pub fn recognizer(self) -> &'static dyn Recognizer {
        match self {
            Language::C => &c::C,
            Language::Java => &java::Java,
            Language::JavaScript => &javascript::JavaScript,
            Language::Php => &php::Php,
            Language::Scss => &scss::Scss,
        }
    }
}

impl FromStr for Language {
    type Err = DocblockError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Language::from_id(id)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
