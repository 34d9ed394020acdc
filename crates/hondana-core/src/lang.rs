//! Language display-name resolution
//!
//! Maps content-source language codes to the human-readable names used as
//! group labels in the catalog. Locale-aware localization belongs to the UI
//! layer; this resolver covers the codes the extension repository ships.

/// Sentinel language code meaning "not restricted to one language"
pub const ALL_LANGUAGES: &str = "all";

/// Maps a language code to a human-readable display name
pub trait LanguageResolver: Send + Sync {
    /// Display name for a language code; must be pure
    fn display_name(&self, code: &str) -> String;
}

/// Static-table resolver with English display names
///
/// Unknown codes fall back to the code itself, so a repository adding a new
/// language still groups correctly before this table catches up.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLanguageResolver;

const DISPLAY_NAMES: &[(&str, &str)] = &[
    (ALL_LANGUAGES, "All"),
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("ru", "Russian"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-Hans", "Chinese (Simplified)"),
    ("zh-Hant", "Chinese (Traditional)"),
];

impl LanguageResolver for DefaultLanguageResolver {
    fn display_name(&self, code: &str) -> String {
        DISPLAY_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| code.to_string())
    }
}
