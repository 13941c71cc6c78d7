//! The boundary to the rendering host that owns the visible buffer.

use std::borrow::Cow;

use crate::base::{Language, TextEdit, TextSize};
use crate::diagnostics::Diagnostic;
use crate::syntax::Grammar;

use super::HoverResult;

/// Everything the host must swap in one step when the language changes.
#[derive(Clone, Debug)]
pub struct Reconfiguration {
    pub language: Option<Language>,
    pub grammar: &'static Grammar,
    /// Diagnostics of the current text under the new language
    pub diagnostics: Vec<Diagnostic>,
    /// Tooltip to show under the new bindings. A tooltip resolved with the
    /// previous dictionary never survives a switch, so this replaces it.
    pub hover: Option<HoverResult>,
}

/// The editor widget an [`EditorSession`] drives.
///
/// The host owns the document. The session reads it through [`text`] on
/// every event and changes it only through [`replace_all`], [`insert_at`] and
/// [`apply_edit`]. None of these may call back into the session.
///
/// [`EditorSession`]: super::EditorSession
/// [`text`]: EditorHost::text
/// [`replace_all`]: EditorHost::replace_all
/// [`insert_at`]: EditorHost::insert_at
/// [`apply_edit`]: EditorHost::apply_edit
pub trait EditorHost {
    /// Whatever the host reports pointer movement with.
    type PointerEvent;

    /// Current buffer contents.
    fn text(&self) -> Cow<'_, str>;

    /// Substitute the whole buffer.
    fn replace_all(&mut self, text: &str);

    /// Insert `text` at `offset`.
    ///
    /// Returns `false` and leaves the buffer unchanged when `offset` is not a
    /// valid position in it.
    fn insert_at(&mut self, offset: TextSize, text: &str) -> bool;

    /// Map a pointer event to a buffer offset, if it is over text.
    fn offset_for_pointer(&self, event: &Self::PointerEvent) -> Option<TextSize>;

    /// Apply an edit. Insertions go through [`EditorHost::insert_at`], other
    /// edits through a whole-buffer [`EditorHost::replace_all`].
    ///
    /// Returns `false` when the edit does not fit the buffer.
    fn apply_edit(&mut self, edit: &TextEdit) -> bool {
        if edit.is_insert() {
            return self.insert_at(edit.range.start(), &edit.insert);
        }
        let mut text = self.text().into_owned();
        if !edit.apply(&mut text) {
            return false;
        }
        self.replace_all(&text);
        true
    }

    /// Show a freshly computed diagnostic list, replacing the previous one.
    fn publish_diagnostics(&mut self, diagnostics: Vec<Diagnostic>);

    /// Show a tooltip, or hide it on `None`.
    fn show_hover(&mut self, hover: Option<HoverResult>);

    /// Swap grammar, diagnostics and tooltip together.
    fn reconfigure(&mut self, update: Reconfiguration);
}

/// A headless host backed by a `String`.
///
/// Keeps the last published state so callers without a widget (batch
/// checks, tests) can read it back. Pointer events are plain offsets.
#[derive(Debug)]
pub struct BufferHost {
    text: String,
    language: Option<Language>,
    grammar: &'static Grammar,
    diagnostics: Vec<Diagnostic>,
    hover: Option<HoverResult>,
    publications: usize,
}

impl BufferHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            grammar: Grammar::plain_text(),
            diagnostics: Vec::new(),
            hover: None,
            publications: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Language of the last reconfiguration.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    /// Last published diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Tooltip currently shown.
    pub fn hover(&self) -> Option<&HoverResult> {
        self.hover.as_ref()
    }

    /// Number of diagnostic lists received, reconfigurations included.
    pub fn publications(&self) -> usize {
        self.publications
    }

    /// Edit the buffer behind the session's back, as a user typing would.
    pub fn type_text(&mut self, edit: &TextEdit) -> bool {
        edit.apply(&mut self.text)
    }
}

impl EditorHost for BufferHost {
    type PointerEvent = TextSize;

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn replace_all(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn insert_at(&mut self, offset: TextSize, text: &str) -> bool {
        TextEdit::insert(offset, text).apply(&mut self.text)
    }

    fn offset_for_pointer(&self, event: &TextSize) -> Option<TextSize> {
        (usize::from(*event) <= self.text.len()).then_some(*event)
    }

    fn publish_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
        self.publications += 1;
    }

    fn show_hover(&mut self, hover: Option<HoverResult>) {
        self.hover = hover;
    }

    fn reconfigure(&mut self, update: Reconfiguration) {
        self.language = update.language;
        self.grammar = update.grammar;
        self.diagnostics = update.diagnostics;
        self.hover = update.hover;
        self.publications += 1;
    }
}
