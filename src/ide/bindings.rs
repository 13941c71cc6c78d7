//! The per-language behavior of a session, derived from one language value.

use crate::base::{Language, TextSize};
use crate::diagnostics::{Diagnostic, RuleSet};
use crate::docs::KeywordDictionary;
use crate::syntax::Grammar;

use super::hover::{self, HoverResult};

/// Grammar, diagnostics rules and hover dictionary for one language.
///
/// All three are derived from the language alone, so a session swaps them as
/// one value. `None` gives plain-text bindings: no highlighting, no
/// diagnostics, no hover.
#[derive(Clone, Copy, Debug)]
pub struct Bindings {
    language: Option<Language>,
    grammar: &'static Grammar,
    rules: Option<RuleSet>,
    dictionary: Option<&'static KeywordDictionary>,
}

impl Bindings {
    pub fn for_language(language: Option<Language>) -> Self {
        match language {
            Some(language) => Self {
                language: Some(language),
                grammar: Grammar::for_language(language),
                rules: Some(RuleSet::for_language(language)),
                dictionary: Some(KeywordDictionary::for_language(language)),
            },
            None => Self {
                language: None,
                grammar: Grammar::plain_text(),
                rules: None,
                dictionary: None,
            },
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    pub fn rules(&self) -> Option<RuleSet> {
        self.rules
    }

    pub fn dictionary(&self) -> Option<&'static KeywordDictionary> {
        self.dictionary
    }

    /// Full rescan of `text`.
    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        self.rules.map(|rules| rules.scan(text)).unwrap_or_default()
    }

    pub fn hover(&self, text: &str, offset: TextSize) -> Option<HoverResult> {
        hover::resolve(self.dictionary?, text, offset)
    }
}
