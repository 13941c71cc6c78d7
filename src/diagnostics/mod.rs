//! Diagnostics — heuristic, line-local syntax checks with quick-fixes.
//!
//! A scan is a pure function of `(text, language)`: every call rescans the
//! whole document from scratch and returns a fresh list. Nothing is cached or
//! merged between scans.
//!
//! The rules are shallow pattern checks, not a parser. They over-report on
//! valid multi-line constructs and miss problems a real grammar would catch;
//! that precision is the contract.

mod c_family;
mod python;

use std::sync::Arc;

use smol_str::SmolStr;
use tracing::trace;

use crate::base::{Language, LineIndex, TextEdit, TextRange, TextSize};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }
}

/// A single deterministic edit offered alongside a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuickFix {
    /// Action label shown by the host (e.g. "Add ;").
    pub label: SmolStr,
    /// The edit to apply.
    pub edit: TextEdit,
}

impl QuickFix {
    /// A fix that inserts `text` at `offset`.
    pub fn insert(label: impl Into<SmolStr>, offset: TextSize, text: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            edit: TextEdit::insert(offset, text),
        }
    }

    /// Where the fix applies.
    pub fn offset(&self) -> TextSize {
        self.edit.range.start()
    }

    /// Apply the fix to a copy of `text`.
    pub fn apply_to(&self, text: &str) -> Option<String> {
        self.edit.applied(text)
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Byte range the diagnostic covers.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Diagnostic code (e.g., "W0001").
    pub code: Option<&'static str>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional automated fix.
    pub quick_fix: Option<QuickFix>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            quick_fix: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Info,
            code: None,
            message: message.into(),
            quick_fix: None,
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a quick-fix.
    pub fn with_quick_fix(mut self, fix: QuickFix) -> Self {
        self.quick_fix = Some(fix);
        self
    }

    /// The offset the diagnostic is anchored at: its fix position, or the
    /// start of its range when it has no fix.
    pub fn anchor(&self) -> TextSize {
        self.quick_fix
            .as_ref()
            .map_or(self.range.start(), QuickFix::offset)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes for the built-in rules.
pub mod codes {
    /// Python block opener followed by an unindented line.
    pub const EXPECTED_INDENT: &str = "W0001";

    /// C-family statement without a terminating semicolon.
    pub const MISSING_SEMICOLON: &str = "I0001";
}

/// Message of the Python indentation rule.
pub const EXPECTED_INDENT_MESSAGE: &str = "Expected an indented block after this line";

/// Message of the C-family terminator rule.
pub const MISSING_SEMICOLON_MESSAGE: &str = "Possible missing semicolon";

/// Width of the indentation inserted by the indentation quick-fix.
pub const INDENT: &str = "    ";

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during one scan.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an expected-indent warning for the line starting at `line_start`.
    pub fn expected_indent(&mut self, line_start: TextSize) {
        self.add(
            Diagnostic::warning(TextRange::empty(line_start), EXPECTED_INDENT_MESSAGE)
                .with_code(codes::EXPECTED_INDENT)
                .with_quick_fix(QuickFix::insert("Indent next line", line_start, INDENT)),
        );
    }

    /// Add a missing-semicolon hint for a statement; the fix appends `;` at its end.
    pub fn missing_semicolon(&mut self, statement: TextRange) {
        self.add(
            Diagnostic::info(statement, MISSING_SEMICOLON_MESSAGE)
                .with_code(codes::MISSING_SEMICOLON)
                .with_quick_fix(QuickFix::insert("Add ;", statement.end(), ";")),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    /// Get the number of infos.
    pub fn info_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Info).count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

// ============================================================================
// RULE SETS
// ============================================================================

/// The rules bound to a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Indentation after `def`/`for`/`if` block openers.
    Python,
    /// Missing statement terminators, shared by cpp, java and javascript.
    CFamily,
}

impl RuleSet {
    /// The rule set for `language`.
    pub fn for_language(language: Language) -> RuleSet {
        if language.is_c_family() {
            RuleSet::CFamily
        } else {
            RuleSet::Python
        }
    }

    /// Scan the whole document.
    pub fn scan(self, text: &str) -> Vec<Diagnostic> {
        if text.is_empty() {
            return Vec::new();
        }

        let lines = LineIndex::new(text);
        let mut collector = DiagnosticCollector::new();
        match self {
            RuleSet::Python => python::check(text, &lines, &mut collector),
            RuleSet::CFamily => c_family::check(text, &lines, &mut collector),
        }
        trace!(
            rules = ?self,
            lines = lines.len(),
            warnings = collector.warning_count(),
            infos = collector.info_count(),
            "scanned"
        );
        collector.finish()
    }
}

/// Scan `text` with the rules of `language`.
pub fn scan(text: &str, language: Language) -> Vec<Diagnostic> {
    RuleSet::for_language(language).scan(text)
}
