//! Keyword documentation — static per-language hover docs.
//!
//! Each language has one [`KeywordDictionary`] mapping a keyword (exact,
//! case-sensitive match) to a [`DocumentationEntry`]. Dictionaries are built
//! once on first use and never mutated afterwards.

mod table;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;

use crate::base::Language;

/// Hover documentation for one keyword.
///
/// Built by splitting a raw documentation string on its first line break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentationEntry {
    /// First line of the source, shown prominently
    pub title: &'static str,
    /// Everything after the first line break, shown as code. May be empty.
    pub example: &'static str,
}

impl DocumentationEntry {
    /// Split a raw documentation string into title and example.
    pub fn from_source(source: &'static str) -> Self {
        match source.split_once('\n') {
            Some((title, example)) => Self { title, example },
            None => Self {
                title: source,
                example: "",
            },
        }
    }

    /// The example block, or `None` when the host should omit it.
    pub fn example(&self) -> Option<&'static str> {
        (!self.example.is_empty()).then_some(self.example)
    }

    /// Recombine title and example into the documentation source.
    pub fn source(&self) -> String {
        match self.example() {
            Some(example) => format!("{}\n{}", self.title, example),
            None => self.title.to_owned(),
        }
    }
}

/// All documented keywords of one language, in declaration order.
#[derive(Debug)]
pub struct KeywordDictionary {
    language: Language,
    entries: IndexMap<&'static str, DocumentationEntry, FxBuildHasher>,
}

static PYTHON: Lazy<KeywordDictionary> =
    Lazy::new(|| KeywordDictionary::build(Language::Python, table::PYTHON));
static JAVASCRIPT: Lazy<KeywordDictionary> =
    Lazy::new(|| KeywordDictionary::build(Language::JavaScript, table::JAVASCRIPT));
static CPP: Lazy<KeywordDictionary> =
    Lazy::new(|| KeywordDictionary::build(Language::Cpp, table::CPP));
static JAVA: Lazy<KeywordDictionary> =
    Lazy::new(|| KeywordDictionary::build(Language::Java, table::JAVA));

impl KeywordDictionary {
    fn build(language: Language, sources: &'static [(&'static str, &'static str)]) -> Self {
        let entries = sources
            .iter()
            .map(|&(keyword, source)| (keyword, DocumentationEntry::from_source(source)))
            .collect();
        Self { language, entries }
    }

    /// The dictionary for `language`.
    pub fn for_language(language: Language) -> &'static KeywordDictionary {
        match language {
            Language::Python => &*PYTHON,
            Language::JavaScript => &*JAVASCRIPT,
            Language::Cpp => &*CPP,
            Language::Java => &*JAVA,
        }
    }

    /// The raw documentation source a keyword's entry was built from.
    pub fn source(language: Language, keyword: &str) -> Option<&'static str> {
        let sources = match language {
            Language::Python => table::PYTHON,
            Language::JavaScript => table::JAVASCRIPT,
            Language::Cpp => table::CPP,
            Language::Java => table::JAVA,
        };
        sources
            .iter()
            .find(|(candidate, _)| *candidate == keyword)
            .map(|&(_, source)| source)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a token. Matching is exact and case-sensitive.
    pub fn get(&self, token: &str) -> Option<&DocumentationEntry> {
        self.entries.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Iterate over `(keyword, entry)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &DocumentationEntry)> + '_ {
        self.entries.iter().map(|(&keyword, entry)| (keyword, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
