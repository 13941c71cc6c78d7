//! Hover — keyword documentation for the token under the pointer.
//!
//! Resolution reads the text and nothing else: it never touches the buffer
//! or the caret.

use smol_str::SmolStr;

use crate::base::{Language, LineIndex, TextRange, TextSize};
use crate::docs::{DocumentationEntry, KeywordDictionary};

/// Documentation for a hovered token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// Span of the hovered token
    pub range: TextRange,
    /// The token text
    pub token: SmolStr,
    /// Its documentation
    pub entry: DocumentationEntry,
}

impl HoverResult {
    /// Render title and example as Markdown.
    ///
    /// The example becomes a fenced block tagged with the language id and is
    /// omitted when empty.
    pub fn to_markdown(&self, language: Language) -> String {
        match self.entry.example() {
            Some(example) => format!(
                "**{}**\n\n```{}\n{}\n```",
                self.entry.title,
                language.id(),
                example
            ),
            None => format!("**{}**", self.entry.title),
        }
    }
}

/// Resolve documentation for the token at `offset`.
///
/// Returns `None` when there is no token at `offset` or the token is not a
/// documented keyword of `language`.
pub fn hover(text: &str, offset: TextSize, language: Language) -> Option<HoverResult> {
    resolve(KeywordDictionary::for_language(language), text, offset)
}

pub(crate) fn resolve(
    dictionary: &KeywordDictionary,
    text: &str,
    offset: TextSize,
) -> Option<HoverResult> {
    let (range, token) = token_at(text, offset)?;
    let entry = dictionary.get(token)?;
    Some(HoverResult {
        range,
        token: SmolStr::new(token),
        entry: *entry,
    })
}

/// The maximal run of identifier characters (`[A-Za-z0-9_#]`) around
/// `offset`, within its line.
///
/// If the character at `offset` is on the line and is not an identifier
/// character there is no token, so resting on a space or bracket yields
/// `None`. At the end of a line the run ending there is returned.
///
/// The run is never extended leftwards from a non-identifier character:
/// `for(` at offset 3 yields `None`, not `for`. Only the character under the
/// pointer decides, which keeps a pointer between two keywords from showing
/// either one.
pub fn token_at(text: &str, offset: TextSize) -> Option<(TextRange, &str)> {
    let at = usize::from(offset);
    if at > text.len() || !text.is_char_boundary(at) {
        return None;
    }

    let lines = LineIndex::new(text);
    let line = lines.line(lines.line_of(offset))?;
    if !line.contains_inclusive(offset) {
        // Between `\r` and `\n`.
        return None;
    }

    let bytes = text[line].as_bytes();
    let col = usize::from(offset - line.start());
    if bytes.get(col).is_some_and(|&b| !is_identifier_byte(b)) {
        return None;
    }

    let mut start = col;
    while start > 0 && is_identifier_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = col;
    while end < bytes.len() && is_identifier_byte(bytes[end]) {
        end += 1;
    }
    if start == end {
        return None;
    }

    let range = TextRange::new(
        line.start() + TextSize::from(start as u32),
        line.start() + TextSize::from(end as u32),
    );
    Some((range, &text[range]))
}

/// ASCII letters, digits, `_` and `#` (for preprocessor-style tokens).
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'#'
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn at(n: u32) -> TextSize {
        TextSize::from(n)
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn test_hover_inside_keyword(#[case] offset: u32) {
        let result = hover("for i in range(5):", at(offset), Language::Python).unwrap();
        assert!(result.entry.title.starts_with("Loop:"));
        assert_eq!(result.range, TextRange::new(at(0), at(3)));
        assert_eq!(result.token, "for");
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    #[case(8)]
    fn test_hover_on_space(#[case] offset: u32) {
        assert_eq!(hover("for i in range(5):", at(offset), Language::Python), None);
    }

    #[test]
    fn test_punctuation_after_keyword() {
        assert_eq!(token_at("for(", at(3)), None);
        assert_eq!(hover("for(", at(2), Language::JavaScript).map(|h| h.token), Some("for".into()));
    }

    #[test]
    fn test_undocumented_token() {
        // `range` is an identifier, but not a documented keyword.
        assert_eq!(hover("for i in range(5):", at(10), Language::Python), None);
    }

    #[test]
    fn test_end_of_line_extends_left() {
        let text = "x = 1\nreturn";
        let result = hover(text, at(12), Language::Python).unwrap();
        assert_eq!(result.token, "return");
        assert_eq!(result.range, TextRange::new(at(6), at(12)));
    }

    #[test]
    fn test_token_stops_at_line_boundary() {
        let text = "if\nfor";
        assert_eq!(token_at(text, at(2)), Some((TextRange::new(at(0), at(2)), "if")));
        assert_eq!(token_at(text, at(3)), Some((TextRange::new(at(3), at(6)), "for")));
    }

    #[test]
    fn test_hash_is_part_of_token() {
        let text = "#include <vector>";
        assert_eq!(token_at(text, at(3)).map(|(_, token)| token), Some("#include"));
        // The dictionary documents `include` without the hash.
        assert_eq!(hover(text, at(3), Language::Cpp), None);
    }

    #[test]
    fn test_case_sensitive_per_language() {
        assert!(hover("String s;", at(2), Language::Java).is_some());
        assert!(hover("String s;", at(2), Language::Cpp).is_none());
        assert!(hover("string s;", at(2), Language::Cpp).is_some());
    }

    #[test]
    fn test_out_of_range_offsets() {
        assert_eq!(token_at("", at(0)), None);
        assert_eq!(token_at("for", at(4)), None);
        assert_eq!(token_at("é", at(1)), None);
        assert_eq!(token_at("if\r\nx", at(3)), None);
    }

    #[test]
    fn test_markdown_rendering() {
        let result = hover("await x", at(1), Language::JavaScript).unwrap();
        assert_eq!(
            result.to_markdown(Language::JavaScript),
            "**Wait for Promise to resolve**\n\n```javascript\nExample: const data = await fetchData();\n```"
        );
    }
}
