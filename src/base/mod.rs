//! Foundation types for the assistance engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Language`] - The closed set of supported source languages
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line splitting and line/column conversion
//! - [`TextEdit`] - A single buffer replacement
//!
//! This module has NO dependencies on other crate modules.

mod edit;
mod language;
mod span;

pub use edit::TextEdit;
pub use language::{Language, UnsupportedLanguage};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
