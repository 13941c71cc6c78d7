//! Engine settings supplied by the host.

/// Feature switches for an editor session.
///
/// Switching a feature off makes the session publish empty results for it;
/// settings never change *what* a feature computes.
///
/// With the `serde` feature enabled, settings deserialize from any serde
/// format; missing fields fall back to [`Settings::default`]:
///
/// ```json
/// { "hover": false }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Settings {
    /// Run the diagnostics rules on every rescan
    pub diagnostics: bool,
    /// Resolve keyword documentation on hover
    pub hover: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            diagnostics: true,
            hover: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let settings = Settings::default();
        assert!(settings.diagnostics);
        assert!(settings.hover);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "hover": false }"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                diagnostics: true,
                hover: false,
            }
        );
    }
}
