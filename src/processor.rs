//! Line processing API
//!
//! Runs a declaration line through the pipeline up to a chosen stage and formats
//! what that stage produced. A processing spec is written `<stage>-<format>`:
//!
//!     token-simple, token-json, token-yaml
//!     symbol-simple, symbol-json, symbol-yaml
//!     comment-snippet, comment-plain
//!
//! [`render_line`] is the pass driver used for the comment stage. It is the one
//! place a lex failure is recovered: a line that cannot be tokenized still yields
//! the empty comment block.

use crate::config::Settings;
use crate::error::{DocblockError, DocblockResult};
use crate::languages::Language;
use crate::lexer::{tokenize_significant, Token};
use crate::parser::Parser;
use crate::renderer::{strip_placeholders, Renderer};
use crate::symbol::Symbol;
use std::fmt::Write;
use std::str::FromStr;
use tracing::debug;

/// What the pipeline runs up to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Symbol,
    Comment,
}

/// How the stage's result is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    /// The comment with its tab-stop placeholders
    Snippet,
    /// The comment as plain text
    Plain,
}

/// A stage together with an output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-json" or "comment-plain"
    pub fn from_string(format_str: &str) -> DocblockResult<Self> {
        let invalid = || DocblockError::InvalidFormat(format_str.to_string());
        let (stage, format) = format_str.split_once('-').ok_or_else(invalid)?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "symbol" => ProcessingStage::Symbol,
            "comment" => ProcessingStage::Comment,
            _ => return Err(invalid()),
        };
        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "snippet" => OutputFormat::Snippet,
            "plain" => OutputFormat::Plain,
            _ => return Err(invalid()),
        };

        let spec = ProcessingSpec { stage, format };
        if Self::available_specs().contains(&spec) {
            Ok(spec)
        } else {
            Err(DocblockError::InvalidFormat(format!(
                "format '{format_str}' does not apply to the {} stage",
                stage.name()
            )))
        }
    }

    /// Get all valid stage and format combinations
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let data_formats = [OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml];
        let mut specs = Vec::new();
        for stage in [ProcessingStage::Token, ProcessingStage::Symbol] {
            specs.extend(data_formats.map(|format| ProcessingSpec { stage, format }));
        }
        for format in [OutputFormat::Snippet, OutputFormat::Plain] {
            specs.push(ProcessingSpec {
                stage: ProcessingStage::Comment,
                format,
            });
        }
        specs
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

impl FromStr for ProcessingSpec {
    type Err = DocblockError;

    fn from_str(format_str: &str) -> Result<Self, Self::Err> {
        Self::from_string(format_str)
    }
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Symbol => "symbol",
            ProcessingStage::Comment => "comment",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Snippet => "snippet",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

/// Recognize `code` and render its comment block as a snippet
///
/// A line that cannot be tokenized renders the empty block. Any other failure is
/// returned to the caller.
pub fn render_line(code: &str, language: Language, settings: &Settings) -> DocblockResult<String> {
    let renderer = Renderer::new(language, settings);
    match Parser::new(language).parse(code) {
        Ok(symbol) => Ok(renderer.render(&symbol)),
        Err(err) if err.is_recoverable() => {
            debug!(%language, error = %err, "rendering the empty block");
            Ok(renderer.empty_block())
        }
        Err(err) => Err(err),
    }
}

/// Run `code` through the pipeline up to `spec.stage` and format the result
pub fn process(
    code: &str,
    language: Language,
    spec: ProcessingSpec,
    settings: &Settings,
) -> DocblockResult<String> {
    match spec.stage {
        ProcessingStage::Token => {
            let source = language.recognizer().prepare(code);
            let tokens = tokenize_significant(&source)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Symbol => {
            let symbol = Parser::new(language).parse(code)?;
            format_symbol(&symbol, spec.format)
        }
        ProcessingStage::Comment => {
            let snippet = render_line(code, language, settings)?;
            match spec.format {
                OutputFormat::Plain => Ok(strip_placeholders(&snippet)),
                _ => Ok(snippet),
            }
        }
    }
}

/// Format tokens as one `<label:text>` per token, JSON or YAML
pub fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> DocblockResult<String> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tokens)?),
        OutputFormat::Snippet | OutputFormat::Plain => Err(DocblockError::InvalidFormat(
            format!("{} output only works with the comment stage", format.name()),
        )),
    }
}

/// Format a symbol as an indented outline, JSON or YAML
pub fn format_symbol(symbol: &Symbol, format: OutputFormat) -> DocblockResult<String> {
    match format {
        OutputFormat::Simple => Ok(outline(symbol)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(symbol)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(symbol)?),
        OutputFormat::Snippet | OutputFormat::Plain => Err(DocblockError::InvalidFormat(
            format!("{} output only works with the comment stage", format.name()),
        )),
    }
}

fn outline(symbol: &Symbol) -> String {
    let mut out = format!("{} {}", symbol.kind, symbol.name);
    if let Some(kind) = &symbol.var_type {
        let _ = write!(out, ": {kind}");
    }
    for param in &symbol.params {
        let _ = write!(out, "\n  param {}", param.name);
        if let Some(kind) = &param.kind {
            let _ = write!(out, ": {kind}");
        }
        if let Some(value) = &param.value {
            let _ = write!(out, " = {value}");
        }
    }
    if symbol.return_info.present {
        out.push_str("\n  returns");
        if let Some(kind) = &symbol.return_info.kind {
            let _ = write!(out, " {kind}");
        }
    }
    out.trim_end().to_string()
}
