//! IDE features — the API the rendering host talks to.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take text in, return data out
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Stateless**: Every call rescans from scratch
//!
//! ## Usage
//!
//! One-off queries go through [`compute_diagnostics`] and [`compute_hover`].
//! A live editor is driven through an [`EditorSession`]:
//!
//! ```ignore
//! use codeassist::ide::{BufferHost, EditorSession};
//! use codeassist::{Language, Settings};
//!
//! let mut session = EditorSession::new(BufferHost::new("def f():\nx=1"), Some(Language::Python), Settings::default());
//! assert_eq!(session.host().diagnostics().len(), 1);
//!
//! session.switch_language(Some(Language::Java));
//! ```

mod bindings;
mod host;
mod hover;
mod session;

pub use bindings::Bindings;
pub use host::{BufferHost, EditorHost, Reconfiguration};
pub use hover::{HoverResult, hover, token_at};
pub use session::{EditorSession, SessionId};

use tracing::debug;

use crate::base::{Language, TextSize};
use crate::diagnostics::{self, Diagnostic};

/// Diagnostics for `text` in the language with id `language`.
///
/// An unsupported language id yields no diagnostics.
pub fn compute_diagnostics(text: &str, language: &str) -> Vec<Diagnostic> {
    match language.parse::<Language>() {
        Ok(language) => diagnostics::scan(text, language),
        Err(err) => {
            debug!(%err, "no diagnostics");
            Vec::new()
        }
    }
}

/// Hover documentation at `offset` in `text` for the language with id
/// `language`.
///
/// An unsupported language id yields `None`.
pub fn compute_hover(text: &str, offset: TextSize, language: &str) -> Option<HoverResult> {
    match language.parse::<Language>() {
        Ok(language) => hover(text, offset, language),
        Err(err) => {
            debug!(%err, "no hover");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_is_neutral() {
        assert!(compute_diagnostics("int x = 5", "rust").is_empty());
        assert!(compute_hover("for i in x:", TextSize::from(0), "ruby").is_none());
    }

    #[test]
    fn test_language_ids() {
        assert_eq!(compute_diagnostics("int x = 5", "cpp").len(), 1);
        assert_eq!(compute_diagnostics("def f():\nx=1", "python").len(), 1);
        assert!(compute_hover("for i in x:", TextSize::from(0), "python").is_some());
    }
}
