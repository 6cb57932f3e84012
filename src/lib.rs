//! # docblock
//!
//! Turns a single declaration line into a documentation comment template.
//!
//! A line such as `function foo(bar: number): string {` goes through three steps:
//!
//! 1. [`lexer`] splits it into typed tokens.
//! 2. [`parser`] feeds the tokens through the rules of one language
//!    ([`languages`]) and produces a [`Symbol`]: what is declared, its name,
//!    parameters, return value or variable type.
//! 3. [`renderer`] turns the symbol into an aligned comment block whose fields are
//!    numbered snippet placeholders.
//!
//! [`processor::render_line`] runs all three and is what most callers want:
//!
//! ```rust,ignore
//! use docblock::{processor, Language, Settings};
//!
//! let block = processor::render_line("int foo = 5;", Language::C, &Settings::default())?;
//! ```
//!
//! Rendering is configured with [`Settings`], usually built by [`config::Loader`]
//! from the embedded defaults plus user overrides.

pub mod completions;
pub mod config;
pub mod error;
pub mod grammar;
pub mod languages;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod renderer;
pub mod symbol;

pub use config::{CommentStyle, Settings};
pub use error::{DocblockError, DocblockResult};
pub use languages::Language;
pub use parser::Parser;
pub use renderer::Renderer;
pub use symbol::{Param, ReturnInfo, Symbol, SymbolKind};
