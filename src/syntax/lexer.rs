//! Raw lexical classes shared by every grammar.
//!
//! The lexer does not know which language it is reading; comment and
//! directive markers come out as bare markers and the active [`Grammar`]
//! decides what they start.
//!
//! [`Grammar`]: super::Grammar

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]+)?")]
    Number,

    // Unterminated strings run to the end of the line.
    #[regex(r#""([^"\\\n]|\\.)*"?"#)]
    DoubleQuoted,
    #[regex(r#"'([^'\\\n]|\\.)*'?"#)]
    SingleQuoted,
    #[regex(r"`([^`\\]|\\.)*`?")]
    Backtick,

    #[token("//")]
    DoubleSlash,
    #[token("/*")]
    BlockOpen,
    #[token("#")]
    Hash,

    #[regex(r#"[^\sA-Za-z0-9_$"'`#]"#)]
    Punct,
}

impl RawToken {
    pub(crate) fn is_string(self) -> bool {
        matches!(
            self,
            RawToken::DoubleQuoted | RawToken::SingleQuoted | RawToken::Backtick
        )
    }
}

/// Length of the rest of the current line.
pub(crate) fn rest_of_line(remainder: &str) -> usize {
    remainder.find(['\r', '\n']).unwrap_or(remainder.len())
}

/// Length up to and including the closing `*/`, or the rest of the text.
pub(crate) fn rest_of_block_comment(remainder: &str) -> usize {
    remainder.find("*/").map_or(remainder.len(), |end| end + 2)
}

/// Length of the directive name directly following a `#`.
pub(crate) fn directive_name(remainder: &str) -> usize {
    remainder
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(remainder.len())
}
