//! C-family (cpp, java, javascript): statements that look like they need a
//! terminating `;` but do not have one.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::base::{LineIndex, TextRange, TextSize};

use super::DiagnosticCollector;

/// Lines starting with one of these never need a terminator.
const SKIP_PREFIXES: &[&str] = &[
    "if", "for", "while", "switch", "class", "function", "else", "try", "catch", "finally", "do",
    "return", "#", "import", "export", "const", "let", "var",
];

/// Statement shapes that need a terminator: typed declaration, assignment,
/// call, member access.
static NEEDS_TERMINATOR: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^(?:int|string|char|bool|float|double|void|auto|const|static|public|private|protected)\s+[A-Za-z0-9_]+",
        r"^[A-Za-z0-9_]+\s*=\s*[^=]",
        r"^[A-Za-z0-9_]+\s*\(",
        r"^[A-Za-z0-9_]+\s*\.[A-Za-z0-9_]+",
    ])
    .unwrap()
});

pub(super) fn check(text: &str, lines: &LineIndex, collector: &mut DiagnosticCollector) {
    for line in lines.lines() {
        let content = &text[line];
        let trimmed = content.trim();
        if trimmed.is_empty() || is_skipped(trimmed) {
            continue;
        }
        if NEEDS_TERMINATOR.is_match(trimmed) {
            let leading = content.len() - content.trim_start().len();
            let start = line.start() + TextSize::from(leading as u32);
            let end = line.start() + TextSize::from(content.trim_end().len() as u32);
            collector.missing_semicolon(TextRange::new(start, end));
        }
    }
}

/// Skip-list keywords (`^(...)\b`) and lines already closed by `{`, `}` or `;`.
fn is_skipped(trimmed: &str) -> bool {
    if trimmed.ends_with(['{', '}', ';']) {
        return true;
    }
    SKIP_PREFIXES.iter().any(|prefix| {
        trimmed.strip_prefix(*prefix).is_some_and(|rest| {
            let before = prefix.chars().next_back().is_some_and(is_word_char);
            let after = rest.chars().next().is_some_and(is_word_char);
            before != after
        })
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
