//! Tag vocabulary offered as completions inside a comment block
//!
//! Every language shares a small core of tags; each adds the vocabulary of the
//! documentation tool its community uses (JSDoc, phpDocumentor, Javadoc, Doxygen,
//! SassDoc). Snippet bodies use the same placeholder syntax as rendered blocks.

use crate::languages::Language;
use serde::Serialize;

/// One completion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCompletion {
    pub label: &'static str,
    pub detail: &'static str,
    pub snippet: &'static str,
}

const fn tag(label: &'static str, detail: &'static str, snippet: &'static str) -> TagCompletion {
    TagCompletion {
        label,
        detail,
        snippet,
    }
}

const CORE: &[TagCompletion] = &[
    tag("@param", "Documents a parameter", "@param ${1:type} ${2:name} ${3:description}"),
    tag("@return", "Documents the return value", "@return ${1:type} ${2:description}"),
    tag("@throws", "Documents a thrown exception", "@throws ${1:type} ${2:description}"),
    tag("@deprecated", "Marks as deprecated", "@deprecated ${1:description}"),
    tag("@see", "Refers to related documentation", "@see ${1:reference}"),
    tag("@since", "Version the element was added in", "@since ${1:version}"),
    tag("@author", "Names the author", "@author ${1:name} <${2:email}>"),
    tag("@todo", "Work still to be done", "@todo ${1:description}"),
    tag("@example", "Usage example", "@example ${1:code}"),
];

const JSDOC: &[TagCompletion] = &[
    tag("@type", "Type of a variable or property", "@type {${1:type}}"),
    tag("@typedef", "Defines a custom type", "@typedef {${1:type}} ${2:name}"),
    tag("@callback", "Defines a callback type", "@callback ${1:name}"),
    tag("@async", "Function is asynchronous", "@async"),
    tag("@class", "Function is a constructor", "@class"),
    tag("@extends", "Parent class", "@extends ${1:parent}"),
    tag("@template", "Generic type parameter", "@template ${1:T}"),
    tag("@private", "Private member", "@private"),
    tag("@readonly", "Read-only member", "@readonly"),
];

const PHPDOC: &[TagCompletion] = &[
    tag("@var", "Type of a variable or property", "@var ${1:type}"),
    tag("@property", "Magic property", "@property ${1:type} \\$${2:name}"),
    tag("@method", "Magic method", "@method ${1:type} ${2:name}(${3})"),
    tag("@package", "Package the element belongs to", "@package ${1:name}"),
    tag("@inheritDoc", "Inherit documentation", "@inheritDoc"),
    tag("@internal", "Not part of the public API", "@internal"),
    tag("@link", "External link", "@link ${1:url}"),
];

const JAVADOC: &[TagCompletion] = &[
    tag("@exception", "Documents a thrown exception", "@exception ${1:type} ${2:description}"),
    tag("@version", "Current version", "@version ${1:version}"),
    tag("@serial", "Serializable field", "@serial ${1:description}"),
    tag("{@link}", "Inline link", "{@link ${1:reference}\\}"),
    tag("{@code}", "Inline code", "{@code ${1:code}\\}"),
    tag("{@inheritDoc}", "Inherit documentation", "{@inheritDoc\\}"),
];

const DOXYGEN: &[TagCompletion] = &[
    tag("@brief", "Short description", "@brief ${1:description}"),
    tag("@details", "Long description", "@details ${1:description}"),
    tag("@file", "Documents the file", "@file ${1:name}"),
    tag("@struct", "Documents a struct", "@struct ${1:name}"),
    tag("@retval", "Documents a specific return value", "@retval ${1:value} ${2:description}"),
    tag("@note", "Note", "@note ${1:text}"),
    tag("@warning", "Warning", "@warning ${1:text}"),
];

const SASSDOC: &[TagCompletion] = &[
    tag("@type", "Type of a variable", "@type ${1:type}"),
    tag("@group", "Group the item belongs to", "@group ${1:name}"),
    tag("@content", "Mixin accepts a content block", "@content ${1:description}"),
    tag("@output", "CSS the mixin outputs", "@output ${1:description}"),
    tag("@requires", "Dependency on another item", "@requires ${1:name}"),
    tag("@access", "Access level", "@access ${1|public,private|}"),
    tag("@alias", "Alias of another item", "@alias ${1:name}"),
];

fn dialect(language: Language) -> &'static [TagCompletion] {
    match language {
        Language::C => DOXYGEN,
        Language::Java => JAVADOC,
        Language::JavaScript => JSDOC,
        Language::Php => PHPDOC,
        Language::Scss => SASSDOC,
    }
}

/// All tags offered for `language`, shared core first
pub fn tags(language: Language) -> Vec<TagCompletion> {
    CORE.iter().chain(dialect(language)).copied().collect()
}
