//! Python: a block opener must be followed by an indented line.

use crate::base::LineIndex;

use super::DiagnosticCollector;

/// Keywords whose line opens a block when it ends in `:`.
const BLOCK_OPENERS: &[&str] = &["def", "for", "if"];

pub(super) fn check(text: &str, lines: &LineIndex, collector: &mut DiagnosticCollector) {
    for (i, line) in lines.lines().enumerate() {
        if !opens_block(&text[line]) {
            continue;
        }
        // A block opener on the last line is not checked.
        let Some(next) = lines.line(i + 1) else {
            continue;
        };
        let starts_unindented = text[next].chars().next().is_some_and(|c| !c.is_whitespace());
        if starts_unindented {
            collector.expected_indent(next.start());
        }
    }
}

/// `^(def|for|if)\b.*:\s*$`
fn opens_block(line: &str) -> bool {
    BLOCK_OPENERS.iter().any(|keyword| {
        line.strip_prefix(*keyword)
            .is_some_and(|rest| !rest.starts_with(is_word_char) && rest.trim_end().ends_with(':'))
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
