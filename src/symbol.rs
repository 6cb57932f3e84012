//! The symbol record produced by a recognition pass
//!
//! A [`Symbol`] starts empty, is filled in token by token by the recognizers and is
//! read once by the renderer. Partially filled symbols are valid results: a
//! symbol without a name or kind simply means nothing was confidently recognized.

use serde::Serialize;
use std::fmt;

/// What kind of declaration a line holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    #[default]
    Unset,
    Class,
    Function,
    Variable,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Unset => "unset",
            SymbolKind::Class => "class",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
        };
        f.write_str(name)
    }
}

/// One function parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Param {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn typed(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Whether a function returns something, and what
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReturnInfo {
    pub present: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Structured description of a single declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub params: Vec<Param>,
    #[serde(rename = "return")]
    pub return_info: ReturnInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_type: Option<String>,
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once both a name and a kind are known
    pub fn is_recognized(&self) -> bool {
        !self.name.is_empty() && self.kind != SymbolKind::Unset
    }

    pub fn is(&self, kind: SymbolKind) -> bool {
        self.kind == kind
    }

    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }

    /// Append a parameter at the end of the list
    pub fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    /// The most recently appended parameter, the only one that may still change
    pub fn last_param_mut(&mut self) -> Option<&mut Param> {
        self.params.last_mut()
    }

    /// Drop the most recently appended parameter
    pub fn discard_last_param(&mut self) -> Option<Param> {
        self.params.pop()
    }

    /// Turn the symbol into a function, dropping any variable-only state
    pub fn make_function(&mut self, returns: bool) {
        self.kind = SymbolKind::Function;
        self.var_type = None;
        self.return_info.present = returns;
    }

    /// Turn a tentative function back into a variable of type `kind`
    pub fn make_variable(&mut self, kind: Option<String>) {
        self.kind = SymbolKind::Variable;
        self.params.clear();
        self.return_info = ReturnInfo::default();
        self.var_type = kind;
    }
}
