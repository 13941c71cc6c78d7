//! Editor session — the state machine that binds a host buffer to a language.
//!
//! The session's only state is the active language. Grammar, rules and hover
//! dictionary are derived from it as one [`Bindings`] value, so switching
//! language is a single assignment followed by one rescan whose result goes
//! to the host together with the new grammar.
//!
//! Every event handler recomputes from the host's current text. Nothing from
//! an earlier call is kept, so a later event always supersedes an earlier one.

use std::fmt;

use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::base::{Language, LineIndex, TextEdit, TextSize};
use crate::config::Settings;
use crate::diagnostics::{Diagnostic, QuickFix};
use crate::syntax::Grammar;

use super::bindings::Bindings;
use super::host::{EditorHost, Reconfiguration};
use super::hover::HoverResult;

/// Identifies a session in logs.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drives an [`EditorHost`]: routes text, pointer and language events to the
/// diagnostics and hover engines and publishes their results.
pub struct EditorSession<H: EditorHost> {
    id: SessionId,
    host: H,
    settings: Settings,
    bindings: Bindings,
}

impl<H: EditorHost> EditorSession<H> {
    /// Open a session on `host` for the document's declared language.
    ///
    /// The host receives the initial grammar and diagnostics immediately.
    pub fn new(host: H, language: Option<Language>, settings: Settings) -> Self {
        let mut session = Self {
            id: SessionId::new(),
            host,
            settings,
            bindings: Bindings::for_language(language),
        };
        debug!(
            session = %session.id,
            file = ?language.map(Language::file_name),
            "session opened"
        );
        session.publish_reconfiguration();
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn language(&self) -> Option<Language> {
        self.bindings.language()
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.bindings.grammar()
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. Report buffer changes made through it
    /// with [`EditorSession::text_changed`].
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the session down, handing the host back.
    pub fn into_host(self) -> H {
        debug!(session = %self.id, "session closed");
        self.host
    }

    /// Replace the settings and rescan under them.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if !self.settings.hover {
            self.host.show_hover(None);
        }
        self.text_changed();
    }

    /// Diagnostics of the current text, without publishing them.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        if !self.settings.diagnostics {
            return Vec::new();
        }
        self.bindings.diagnostics(&self.host.text())
    }

    /// Hover result at `offset` in the current text, without showing it.
    pub fn hover_at(&self, offset: TextSize) -> Option<HoverResult> {
        if !self.settings.hover {
            return None;
        }
        self.bindings.hover(&self.host.text(), offset)
    }

    /// The host's buffer changed: rescan and publish.
    pub fn text_changed(&mut self) {
        let diagnostics = self.diagnostics();
        trace!(
            session = %self.id,
            language = ?self.bindings.language(),
            diagnostics = diagnostics.len(),
            "rescanned"
        );
        self.host.publish_diagnostics(diagnostics);
    }

    /// Forward an edit to the host, then rescan once.
    ///
    /// Returns `false` without rescanning when the host rejects the edit.
    pub fn edit(&mut self, edit: &TextEdit) -> bool {
        if !self.host.apply_edit(edit) {
            debug!(session = %self.id, range = ?edit.range, "edit does not fit the buffer");
            return false;
        }
        self.text_changed();
        true
    }

    /// Apply a diagnostic's quick-fix through the host, then rescan once.
    ///
    /// A fix computed against an older text may no longer fit the buffer; it
    /// is then dropped, nothing is rescanned and `false` is returned.
    pub fn apply_quick_fix(&mut self, fix: &QuickFix) -> bool {
        let at = LineIndex::new(&self.host.text()).line_col(fix.offset());
        if !self.host.insert_at(fix.offset(), &fix.edit.insert) {
            debug!(session = %self.id, label = %fix.label, %at, "stale quick-fix dropped");
            return false;
        }
        debug!(session = %self.id, label = %fix.label, %at, "quick-fix applied");
        self.text_changed();
        true
    }

    /// Show the tooltip for `offset`, or hide it.
    pub fn hover(&mut self, offset: TextSize) {
        let hover = self.hover_at(offset);
        self.host.show_hover(hover);
    }

    /// Show the tooltip for a pointer event, or hide it when the pointer is
    /// not over text.
    pub fn pointer_moved(&mut self, event: &H::PointerEvent) {
        let hover = self
            .host
            .offset_for_pointer(event)
            .and_then(|offset| self.hover_at(offset));
        self.host.show_hover(hover);
    }

    /// Bind the session to another language.
    ///
    /// Buffer, edit wiring and selection stay as they are. The host receives
    /// the new grammar together with a full rescan under the new rules, and
    /// any open tooltip is closed in the same step.
    pub fn switch_language(&mut self, language: Option<Language>) {
        let previous = self.bindings.language();
        self.bindings = Bindings::for_language(language);
        debug!(session = %self.id, ?previous, ?language, "language switched");
        self.publish_reconfiguration();
    }

    /// Bind the session to a language given by id; an unsupported id gives
    /// plain-text bindings.
    pub fn reconfigure(&mut self, language: &str) {
        let language = match language.parse::<Language>() {
            Ok(language) => Some(language),
            Err(err) => {
                warn!(session = %self.id, %err, "falling back to plain text");
                None
            }
        };
        self.switch_language(language);
    }

    /// Load a different document into the buffer.
    ///
    /// Does nothing and returns `false` when the buffer already holds `text`.
    /// Otherwise the whole buffer is substituted at once, the tooltip over the
    /// old text is closed and the new text is rescanned once.
    pub fn replace_buffer(&mut self, text: &str) -> bool {
        if self.host.text() == text {
            return false;
        }
        self.host.replace_all(text);
        self.host.show_hover(None);
        self.text_changed();
        true
    }

    fn publish_reconfiguration(&mut self) {
        let diagnostics = self.diagnostics();
        self.host.reconfigure(Reconfiguration {
            language: self.bindings.language(),
            grammar: self.bindings.grammar(),
            diagnostics,
            hover: None,
        });
    }
}

impl<H: EditorHost + fmt::Debug> fmt::Debug for EditorSession<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("id", &self.id)
            .field("language", &self.bindings.language())
            .field("settings", &self.settings)
            .field("host", &self.host)
            .finish()
    }
}
