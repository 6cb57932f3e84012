//! Error types for the docblock pipeline

use thiserror::Error;

/// Result type used across the crate.
pub type DocblockResult<T> = Result<T, DocblockError>;

/// Errors that can occur while tokenizing, recognizing or rendering.
#[derive(Debug, Error)]
pub enum DocblockError {
    /// A grammar was queried for a property it does not define.
    ///
    /// This is a programming error and is never recovered.
    #[error("unknown grammar property `{0}`")]
    UnknownGrammarProperty(String),

    /// The token stream could not be produced for the input line.
    #[error("cannot tokenize `{text}` at byte {position}")]
    Lex { text: String, position: usize },

    /// No recognizer is registered for the language identifier.
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),

    /// A processing format string could not be understood.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DocblockError {
    /// True for failures the pass driver recovers into an empty block.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocblockError::Lex { .. })
    }
}
