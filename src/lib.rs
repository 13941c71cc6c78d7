//! # codeassist-base
//!
//! Language-aware assistance for an in-browser code editor: heuristic syntax
//! diagnostics with quick-fixes, keyword documentation on hover, and atomic
//! rebinding of both when the buffer's language changes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → Host API, hover resolution, editor session
//!   ↓
//! diagnostics  → Per-language rule sets
//! docs         → Keyword documentation tables
//! syntax       → Highlighting grammars
//!   ↓
//! base         → Primitives (Language, TextRange, LineIndex, TextEdit)
//! ```
//!
//! Supported languages are python, javascript, cpp and java. The rules are
//! deliberately shallow line heuristics; there is no parser behind them.

/// Foundation types: Language, TextRange, LineIndex, TextEdit
pub mod base;

/// Session settings
pub mod config;

/// Heuristic diagnostics and quick-fixes
pub mod diagnostics;

/// Keyword documentation for hover
pub mod docs;

/// Highlighting grammars
pub mod syntax;

/// Host-facing API: diagnostics, hover, editor sessions
pub mod ide;

// Re-export foundation types
pub use base::{Language, LineCol, LineIndex, TextEdit, TextRange, TextSize, UnsupportedLanguage};
pub use config::Settings;
pub use diagnostics::{Diagnostic, QuickFix, Severity};
pub use docs::{DocumentationEntry, KeywordDictionary};
pub use ide::{EditorHost, EditorSession, HoverResult, compute_diagnostics, compute_hover};
pub use syntax::Grammar;
