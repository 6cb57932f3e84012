//! Rendering settings and the layered loader that produces them
//!
//! `defaults/docblock.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior cannot drift apart. Callers layer their own TOML
//! files and single-key overrides on top with [`Loader`] and deserialize the result
//! into [`Settings`], an immutable value handed by reference to the renderer.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docblock.default.toml");

/// Everything the renderer needs to know about the wanted output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum gap between aligned columns
    pub column_spacing: usize,
    pub comment_style: CommentStyle,
    pub always_show_return_tag: bool,
    /// Text used where a type is unknown
    pub type_placeholder: String,
    pub markers: Markers,
}

impl Settings {
    /// The effective column gap, never less than one space
    pub fn gap(&self) -> usize {
        self.column_spacing.max(1)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            column_spacing: 2,
            comment_style: CommentStyle::Default,
            always_show_return_tag: true,
            type_placeholder: "[type]".to_string(),
            markers: Markers::default(),
        }
    }
}

/// Layout of the tag lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// Tag, type, name and description aligned on one line
    #[default]
    Default,
    /// Type and name on the tag line, description wrapped below it
    #[serde(alias = "alternate")]
    Drupal,
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStyle::Default => f.write_str("default"),
            CommentStyle::Drupal => f.write_str("drupal"),
        }
    }
}

/// The character sequences framing a comment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub open: String,
    /// Prefix of every inner line
    pub separator: String,
    pub close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "/**".to_string(),
            separator: " * ".to_string(),
            close: " */".to_string(),
        }
    }
}

/// Builds [`Settings`] from the embedded defaults plus user layers
///
/// Later layers win key by key, so a project file only needs the keys it changes
/// and a `--style` flag beats both.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `docblock.default.toml`
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Add a settings file that must exist when [`Loader::build`] runs
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a settings file, skipped if it does not exist (a per-user file, say)
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Force one settings key, as the CLI does for `--style` and `--spacing`
    ///
    /// Nested keys use dots: `markers.open`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into rendering settings
    ///
    /// Unknown comment styles and wrongly typed values fail here.
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings from the embedded defaults alone
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}
