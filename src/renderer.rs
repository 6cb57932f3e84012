//! Comment block rendering
//!
//! Turns a recognized [`Symbol`] into the text of a documentation comment. Every
//! field the user is expected to fill in (names, types, descriptions) becomes a
//! numbered snippet placeholder, `${n:default}`, numbered from 1 in line order so
//! an editor can tab through them.
//!
//! In the default style the tag lines are laid out as columns:
//!
//!     @param   {[type]}  bar    [bar description]
//!     @param   {[type]}  bazzz  [bazzz description]
//!
//!     @return  {[type]}         [return description]
//!
//! Column widths are measured on the raw text, before placeholder wrapping and
//! escaping, so the plain view of a snippet (see [`strip_placeholders`]) lines up.

use crate::config::{CommentStyle, Settings};
use crate::languages::Language;
use crate::parser::Recognizer;
use crate::symbol::{Param, Symbol, SymbolKind};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{\d+:((?:[^}\\]|\\.)*)\}").expect("placeholder pattern is valid")
});

const UNNAMED_PARAM: &str = "[name]";

/// Escape the characters that carry meaning inside a snippet placeholder
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '$', '}']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if matches!(c, '\\' | '$' | '}') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

fn unescape(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                plain.push(next);
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Replace every placeholder with its default text
pub fn strip_placeholders(snippet: &str) -> String {
    PLACEHOLDER
        .replace_all(snippet, |caps: &Captures<'_>| unescape(&caps[1]))
        .into_owned()
}

/// Hands out tab stops in order
#[derive(Debug, Default)]
struct Stops {
    last: usize,
}

impl Stops {
    fn field(&mut self, text: &str) -> String {
        self.last += 1;
        format!("${{{}:{}}}", self.last, escape(text))
    }
}

/// A field together with the width it occupies once placeholders are removed
struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    fn raw(text: &str) -> Self {
        Self {
            text: text.to_string(),
            width: text.chars().count(),
        }
    }

    fn field(stops: &mut Stops, text: &str) -> Self {
        Self {
            text: stops.field(text),
            width: text.chars().count(),
        }
    }

    fn braced(stops: &mut Stops, text: &str) -> Self {
        Self {
            text: format!("{{{}}}", stops.field(text)),
            width: text.chars().count() + 2,
        }
    }

    /// Append the cell, padded with spaces to `column` visible characters
    fn pad_into(&self, line: &mut String, column: usize) {
        line.push_str(&self.text);
        let padding = column.saturating_sub(self.width).max(1);
        line.extend(std::iter::repeat(' ').take(padding));
    }
}

/// Renders symbols of one language with one set of settings
pub struct Renderer<'a> {
    settings: &'a Settings,
    recognizer: &'static dyn Recognizer,
}

impl<'a> Renderer<'a> {
    pub fn new(language: Language, settings: &'a Settings) -> Self {
        Self {
            settings,
            recognizer: language.recognizer(),
        }
    }

    /// The block produced when nothing was recognized
    pub fn empty_block(&self) -> String {
        let markers = &self.settings.markers;
        finish(&[
            markers.open.clone(),
            markers.separator.clone(),
            markers.close.clone(),
        ])
    }

    /// Render the comment for `symbol`
    pub fn render(&self, symbol: &Symbol) -> String {
        if !symbol.is_recognized() {
            return self.empty_block();
        }

        let mut stops = Stops::default();
        let mut sections = vec![vec![stops.field(&format!("[{} description]", symbol.name))]];

        match symbol.kind {
            SymbolKind::Function => {
                let show_return = self.shows_return(symbol);
                let (params, returns) = match self.settings.comment_style {
                    CommentStyle::Default => self.aligned_tags(symbol, show_return, &mut stops),
                    CommentStyle::Drupal => self.wrapped_tags(symbol, show_return, &mut stops),
                };
                sections.push(params);
                sections.push(returns);
            }
            SymbolKind::Variable => {
                let kind = symbol
                    .var_type
                    .as_deref()
                    .unwrap_or(&self.settings.type_placeholder);
                let line = match self.settings.comment_style {
                    CommentStyle::Default => format!(
                        "{}{}{{{}}}",
                        self.recognizer.var_tag(),
                        " ".repeat(self.settings.gap()),
                        stops.field(kind)
                    ),
                    CommentStyle::Drupal => {
                        format!("{} {}", self.recognizer.var_tag(), stops.field(kind))
                    }
                };
                sections.push(vec![line]);
            }
            SymbolKind::Class | SymbolKind::Unset => {}
        }

        let markers = &self.settings.markers;
        let mut lines = vec![markers.open.clone()];
        let mut first = true;
        for section in sections.into_iter().filter(|section| !section.is_empty()) {
            if !first {
                lines.push(markers.separator.clone());
            }
            first = false;
            lines.extend(
                section
                    .into_iter()
                    .map(|line| format!("{}{}", markers.separator, line)),
            );
        }
        lines.push(markers.close.clone());
        finish(&lines)
    }

    fn shows_return(&self, symbol: &Symbol) -> bool {
        symbol.return_info.present
            && (self.settings.always_show_return_tag || symbol.return_info.kind.is_some())
    }

    fn param_type<'s>(&'s self, param: &'s Param) -> &'s str {
        param
            .kind
            .as_deref()
            .unwrap_or(&self.settings.type_placeholder)
    }

    /// Unnamed prototype parameters (`int add(int, int)`) get a fillable name
    fn param_name(param: &Param) -> &str {
        if param.has_name() {
            &param.name
        } else {
            UNNAMED_PARAM
        }
    }

    fn param_description(param: &Param) -> String {
        if param.has_name() {
            format!("[{} description]", param.name)
        } else {
            "[description]".to_string()
        }
    }

    fn return_type<'s>(&'s self, symbol: &'s Symbol) -> &'s str {
        symbol
            .return_info
            .kind
            .as_deref()
            .unwrap_or(&self.settings.type_placeholder)
    }

    /// Tag lines for the default style, as (parameter lines, return lines)
    fn aligned_tags(
        &self,
        symbol: &Symbol,
        show_return: bool,
        stops: &mut Stops,
    ) -> (Vec<String>, Vec<String>) {
        let gap = self.settings.gap();
        let param_tag = self.recognizer.param_tag();
        let return_tag = self.recognizer.return_tag();

        let mut tag_width = 0;
        let mut type_width = 0;
        let mut name_width = 0;
        if !symbol.params.is_empty() {
            tag_width = param_tag.chars().count();
            for param in &symbol.params {
                type_width = type_width.max(self.param_type(param).chars().count());
                name_width = name_width.max(Self::param_name(param).chars().count());
            }
            name_width += gap;
        }
        if show_return {
            tag_width = tag_width.max(return_tag.chars().count());
            type_width = type_width.max(self.return_type(symbol).chars().count());
        }
        let tag_width = tag_width + gap;
        let type_width = type_width + 2 + gap;

        let params = symbol
            .params
            .iter()
            .map(|param| {
                let mut line = String::new();
                Cell::raw(param_tag).pad_into(&mut line, tag_width);
                Cell::braced(stops, self.param_type(param)).pad_into(&mut line, type_width);
                Cell::field(stops, Self::param_name(param)).pad_into(&mut line, name_width);
                line.push_str(&stops.field(&Self::param_description(param)));
                line
            })
            .collect();

        let mut returns = Vec::new();
        if show_return {
            let mut line = String::new();
            Cell::raw(return_tag).pad_into(&mut line, tag_width);
            Cell::braced(stops, self.return_type(symbol)).pad_into(&mut line, type_width + name_width);
            line.push_str(&stops.field("[return description]"));
            returns.push(line);
        }

        (params, returns)
    }

    /// Tag lines for the wrapped style, descriptions on continuation lines
    fn wrapped_tags(
        &self,
        symbol: &Symbol,
        show_return: bool,
        stops: &mut Stops,
    ) -> (Vec<String>, Vec<String>) {
        let mut params = Vec::new();
        for param in &symbol.params {
            params.push(format!(
                "{} {} {}",
                self.recognizer.param_tag(),
                stops.field(self.param_type(param)),
                stops.field(Self::param_name(param))
            ));
            params.push(format!("  {}", stops.field(&Self::param_description(param))));
        }

        let mut returns = Vec::new();
        if show_return {
            returns.push(format!(
                "{} {}",
                self.recognizer.return_tag(),
                stops.field(self.return_type(symbol))
            ));
            returns.push(format!("  {}", stops.field("[return description]")));
        }

        (params, returns)
    }
}

/// Join lines, dropping trailing whitespace from each
fn finish(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
