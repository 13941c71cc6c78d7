//! Per-language highlighting grammars.

use logos::Logos;

use crate::base::{Language, TextRange, TextSize};

use super::lexer::{RawToken, directive_name, rest_of_block_comment, rest_of_line};

/// Class of a highlighted span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Keyword,
    Identifier,
    Number,
    String,
    Comment,
    Preprocessor,
    Punctuation,
}

/// A classified span of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub range: TextRange,
    pub kind: HighlightKind,
}

/// What a `#` starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HashRole {
    /// A comment running to the end of the line
    Comment,
    /// A preprocessor directive name (`#include`)
    Directive,
    /// Plain punctuation
    Symbol,
}

/// The highlighting grammar bound to a language.
#[derive(Debug)]
pub struct Grammar {
    language: Option<Language>,
    name: &'static str,
    keywords: &'static [&'static str],
    /// `//` line comments and `/* */` block comments
    slash_comments: bool,
    hash: HashRole,
}

static PLAIN_TEXT: Grammar = Grammar {
    language: None,
    name: "Plain Text",
    keywords: &[],
    slash_comments: false,
    hash: HashRole::Symbol,
};

static PYTHON: Grammar = Grammar {
    language: Some(Language::Python),
    name: "Python",
    keywords: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    slash_comments: false,
    hash: HashRole::Comment,
};

static JAVASCRIPT: Grammar = Grammar {
    language: Some(Language::JavaScript),
    name: "JavaScript",
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "let", "new", "null", "return", "super",
        "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
        "with", "yield",
    ],
    slash_comments: true,
    hash: HashRole::Symbol,
};

static CPP: Grammar = Grammar {
    language: Some(Language::Cpp),
    name: "C++",
    keywords: &[
        "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
        "continue", "default", "delete", "do", "double", "else", "enum", "explicit", "extern",
        "false", "float", "for", "friend", "if", "inline", "int", "long", "namespace", "new",
        "nullptr", "operator", "private", "protected", "public", "return", "short", "signed",
        "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try",
        "typedef", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
        "while",
    ],
    slash_comments: true,
    hash: HashRole::Directive,
};

static JAVA: Grammar = Grammar {
    language: Some(Language::Java),
    name: "Java",
    keywords: &[
        "abstract", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
        "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
        "finally", "float", "for", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "new", "null", "package", "private", "protected", "public",
        "return", "short", "static", "super", "switch", "synchronized", "this", "throw",
        "throws", "true", "try", "void", "volatile", "while",
    ],
    slash_comments: true,
    hash: HashRole::Symbol,
};

impl Grammar {
    /// The grammar for `language`.
    pub fn for_language(language: Language) -> &'static Grammar {
        match language {
            Language::Python => &PYTHON,
            Language::JavaScript => &JAVASCRIPT,
            Language::Cpp => &CPP,
            Language::Java => &JAVA,
        }
    }

    /// The grammar of a buffer with no supported language.
    pub fn plain_text() -> &'static Grammar {
        &PLAIN_TEXT
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Display name (e.g. "C++").
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word)
    }

    /// Classify `text` into highlight spans, in document order.
    ///
    /// Whitespace is not reported. Plain text produces no spans.
    pub fn highlight(&self, text: &str) -> Vec<HighlightSpan> {
        if self.language.is_none() {
            return Vec::new();
        }

        let mut lexer = RawToken::lexer(text);
        let mut spans = Vec::new();

        while let Some(token) = lexer.next() {
            let Ok(token) = token else {
                continue;
            };
            let kind = match token {
                RawToken::Word if self.is_keyword(lexer.slice()) => HighlightKind::Keyword,
                RawToken::Word => HighlightKind::Identifier,
                RawToken::Number => HighlightKind::Number,
                t if t.is_string() => HighlightKind::String,
                RawToken::DoubleSlash if self.slash_comments => {
                    lexer.bump(rest_of_line(lexer.remainder()));
                    HighlightKind::Comment
                }
                RawToken::BlockOpen if self.slash_comments => {
                    lexer.bump(rest_of_block_comment(lexer.remainder()));
                    HighlightKind::Comment
                }
                RawToken::Hash => match self.hash {
                    HashRole::Comment => {
                        lexer.bump(rest_of_line(lexer.remainder()));
                        HighlightKind::Comment
                    }
                    HashRole::Directive => {
                        lexer.bump(directive_name(lexer.remainder()));
                        HighlightKind::Preprocessor
                    }
                    HashRole::Symbol => HighlightKind::Punctuation,
                },
                _ => HighlightKind::Punctuation,
            };

            let span = lexer.span();
            spans.push(HighlightSpan {
                range: TextRange::new(
                    TextSize::from(span.start as u32),
                    TextSize::from(span.end as u32),
                ),
                kind,
            });
        }

        spans
    }
}
