//! Syntax definitions for supported languages.
//!
//! A [`Grammar`] is the highlighting half of a language binding. It is a
//! lexical classifier for coloring: it recognises keywords, literals and
//! comments, and builds no tree.

mod grammar;
mod lexer;

pub use grammar::{Grammar, HighlightKind, HighlightSpan};
