//! Editor session transitions, observed from the host side.
//!
//! A recording host logs every call the session makes so the tests can check
//! ordering (grammar and diagnostics arrive together) and counts (exactly one
//! rescan per event).

use std::borrow::Cow;

use codeassist::diagnostics::{Diagnostic, Severity, codes};
use codeassist::ide::{EditorHost, EditorSession, HoverResult, Reconfiguration};
use codeassist::{Language, Settings, TextEdit, TextRange, TextSize};

// ============================================================================
// RECORDING HOST
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ReplaceAll(String),
    InsertAt(u32, String),
    Diagnostics(Vec<Diagnostic>),
    Hover(Option<HoverResult>),
    Reconfigure {
        language: Option<Language>,
        grammar: Option<Language>,
        diagnostics: Vec<Diagnostic>,
        hover: Option<HoverResult>,
    },
}

/// Pointer events are (line, column) pairs, like a widget would report.
#[derive(Debug, Default)]
struct RecordingHost {
    text: String,
    calls: Vec<Call>,
}

impl RecordingHost {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            calls: Vec::new(),
        }
    }

    fn rescans(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Diagnostics(_) | Call::Reconfigure { .. }))
            .count()
    }

    fn last_diagnostics(&self) -> &[Diagnostic] {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Diagnostics(diagnostics) => Some(diagnostics.as_slice()),
                Call::Reconfigure { diagnostics, .. } => Some(diagnostics.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

impl EditorHost for RecordingHost {
    type PointerEvent = (u32, u32);

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn replace_all(&mut self, text: &str) {
        self.text = text.to_owned();
        self.calls.push(Call::ReplaceAll(text.to_owned()));
    }

    fn insert_at(&mut self, offset: TextSize, text: &str) -> bool {
        let at = usize::from(offset);
        if !self.text.is_char_boundary(at) {
            return false;
        }
        self.text.insert_str(at, text);
        self.calls.push(Call::InsertAt(offset.into(), text.to_owned()));
        true
    }

    fn offset_for_pointer(&self, &(line, col): &(u32, u32)) -> Option<TextSize> {
        let index = codeassist::LineIndex::new(&self.text);
        index.offset(codeassist::LineCol::new(line, col))
    }

    fn publish_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.calls.push(Call::Diagnostics(diagnostics));
    }

    fn show_hover(&mut self, hover: Option<HoverResult>) {
        self.calls.push(Call::Hover(hover));
    }

    fn reconfigure(&mut self, update: Reconfiguration) {
        self.calls.push(Call::Reconfigure {
            language: update.language,
            grammar: update.grammar.language(),
            diagnostics: update.diagnostics,
            hover: update.hover,
        });
    }
}

fn open(text: &str, language: Language) -> EditorSession<RecordingHost> {
    EditorSession::new(RecordingHost::new(text), Some(language), Settings::default())
}

// ============================================================================
// LANGUAGE SWITCH
// ============================================================================

#[test]
fn test_switch_swaps_grammar_and_diagnostics_together() {
    let text = "def f():\nx=1";
    let mut session = open(text, Language::Python);
    session.host_mut().calls.clear();

    session.switch_language(Some(Language::Java));

    let calls = &session.host().calls;
    assert_eq!(calls.len(), 1, "one host call per switch: {calls:?}");
    let Call::Reconfigure {
        language,
        grammar,
        diagnostics,
        ..
    } = &calls[0]
    else {
        panic!("expected a reconfiguration, got {:?}", calls[0]);
    };
    assert_eq!(*language, Some(Language::Java));
    assert_eq!(*grammar, Some(Language::Java));
    assert_eq!(diagnostics, &codeassist::diagnostics::scan(text, Language::Java));
}

#[test]
fn test_no_python_diagnostics_after_switch() {
    let text = "def f():\nx=1";
    let mut session = open(text, Language::Python);
    assert_eq!(session.host().last_diagnostics()[0].code, Some(codes::EXPECTED_INDENT));

    session.switch_language(Some(Language::Java));
    session.text_changed();

    // `x=1` is an assignment without terminator under the java rules.
    let diagnostics = session.host().last_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Info);
    assert!(diagnostics.iter().all(|d| d.code != Some(codes::EXPECTED_INDENT)));
}

#[test]
fn test_switch_preserves_buffer() {
    let mut session = open("int x = 5", Language::Cpp);
    session.switch_language(Some(Language::Python));

    assert_eq!(session.host().text, "int x = 5");
    assert!(
        !session
            .host()
            .calls
            .iter()
            .any(|call| matches!(call, Call::ReplaceAll(_) | Call::InsertAt(..)))
    );
    assert!(session.host().last_diagnostics().is_empty());
}

#[test]
fn test_reconfigure_by_id() {
    let mut session = open("", Language::Python);
    session.reconfigure("javascript");
    assert_eq!(session.language(), Some(Language::JavaScript));
    assert_eq!(session.grammar().name(), "JavaScript");

    session.reconfigure("cobol");
    assert_eq!(session.language(), None);
    assert_eq!(session.grammar().language(), None);
}

// ============================================================================
// BUFFER REPLACEMENT AND EDITS
// ============================================================================

#[test]
fn test_replace_buffer_substitutes_once() {
    let mut session = open("print(\"Hello, World!\")", Language::Python);
    session.host_mut().calls.clear();

    assert!(session.replace_buffer("if x:\ny"));

    let calls = &session.host().calls;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::ReplaceAll("if x:\ny".to_owned()));
    assert_eq!(calls[1], Call::Hover(None));
    assert!(matches!(&calls[2], Call::Diagnostics(d) if d.len() == 1));
}

#[test]
fn test_replace_buffer_closes_tooltip_over_old_text() {
    let mut session = open("public int x", Language::Java);
    session.hover(TextSize::from(2));
    assert!(matches!(session.host().calls.last(), Some(Call::Hover(Some(_)))));

    session.replace_buffer("y");

    let last_hover = session.host().calls.iter().rev().find_map(|call| match call {
        Call::Hover(hover) => Some(hover),
        _ => None,
    });
    assert_eq!(last_hover, Some(&None));
}

#[test]
fn test_replace_buffer_with_same_text_is_noop() {
    let mut session = open("x = 1", Language::JavaScript);
    session.host_mut().calls.clear();

    assert!(!session.replace_buffer("x = 1"));
    assert!(session.host().calls.is_empty());
}

#[test]
fn test_edit_rescans_once() {
    let mut session = open("int x = 5;", Language::Cpp);
    let before = session.host().rescans();

    let range = TextRange::new(TextSize::from(9), TextSize::from(10));
    session.edit(&TextEdit::replace(range, ""));

    assert_eq!(session.host().text, "int x = 5");
    assert_eq!(session.host().rescans(), before + 1);
    assert_eq!(session.host().last_diagnostics().len(), 1);
}

#[test]
fn test_quick_fix_goes_through_insert_at() {
    let mut session = open("def f():\nx=1", Language::Python);
    let fix = session.host().last_diagnostics()[0]
        .quick_fix
        .clone()
        .unwrap();

    session.apply_quick_fix(&fix);

    let host = session.host();
    assert!(host.calls.contains(&Call::InsertAt(9, "    ".to_owned())));
    assert_eq!(host.text, "def f():\n    x=1");
    assert!(host.last_diagnostics().is_empty());
}

#[test]
fn test_stale_quick_fix_reports_failure() {
    let mut session = open("int counter = 0\nx", Language::Cpp);
    let fix = session.host().last_diagnostics()[0]
        .quick_fix
        .clone()
        .unwrap();
    assert_eq!(fix.offset(), TextSize::from(15));

    session.replace_buffer("a");
    session.host_mut().calls.clear();

    assert!(!session.apply_quick_fix(&fix));
    assert_eq!(session.host().text, "a");
    assert!(session.host().calls.is_empty(), "no edit, no rescan");
}

// ============================================================================
// HOVER
// ============================================================================

#[test]
fn test_pointer_hover_resolves_through_host_offsets() {
    let mut session = open("x = 0\nwhile x < 3:\n    x += 1", Language::Python);

    session.pointer_moved(&(1, 2));
    let Some(Call::Hover(Some(result))) = session.host().calls.last() else {
        panic!("expected a tooltip");
    };
    assert_eq!(result.token, "while");
    assert!(result.entry.title.starts_with("While loop"));

    session.pointer_moved(&(9, 0));
    assert_eq!(session.host().calls.last(), Some(&Call::Hover(None)));
}

#[test]
fn test_hover_follows_active_language() {
    let mut session = open("public int x", Language::Java);
    session.hover(TextSize::from(2));
    assert!(matches!(session.host().calls.last(), Some(Call::Hover(Some(_)))));

    session.switch_language(Some(Language::Python));
    session.hover(TextSize::from(2));
    assert_eq!(session.host().calls.last(), Some(&Call::Hover(None)));
}

#[test]
fn test_switch_closes_tooltip_in_the_same_call() {
    let mut session = open("public int x", Language::Java);
    session.hover(TextSize::from(2));
    session.host_mut().calls.clear();

    session.switch_language(Some(Language::Python));

    let calls = &session.host().calls;
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], Call::Reconfigure { hover: None, .. }));
}

#[test]
fn test_hover_never_edits() {
    let mut session = open("for i in range(5):", Language::Python);
    for offset in 0..=18 {
        session.hover(TextSize::from(offset));
    }
    assert_eq!(session.host().text, "for i in range(5):");
    assert!(
        session
            .host()
            .calls
            .iter()
            .all(|call| matches!(call, Call::Hover(_) | Call::Reconfigure { .. }))
    );
}

#[test]
fn test_into_host_returns_buffer() {
    let mut session = open("x = 1", Language::JavaScript);
    session.replace_buffer("y = 2");
    let host = session.into_host();
    assert_eq!(host.text, "y = 2");
}
