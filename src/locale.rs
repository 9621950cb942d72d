//! Locale and text direction.
//!
//! Direction is derived from the active language on every render and written
//! onto the document root. Nothing is persisted between requests.

use std::fmt;

/// Languages written right to left. Matched case-insensitively, first on the
/// full code and then on the primary subtag.
const RTL_LANGUAGES: &[&str] = &["ar", "arc", "ckb", "dv", "fa", "ha", "he", "khw", "ks", "ku", "ps", "sd", "ur", "yi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` when `language` is written right to left. Empty or absent input is LTR.
#[must_use]
pub fn is_rtl(language: Option<&str>) -> bool {
    let Some(code) = language.map(str::trim).filter(|c| !c.is_empty()) else {
        return false;
    };
    let code = code.to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&code.as_str()) {
        return true;
    }
    code.split_once('-')
        .is_some_and(|(primary, _)| RTL_LANGUAGES.contains(&primary))
}

#[must_use]
pub fn direction(language: Option<&str>) -> Direction {
    if is_rtl(language) { Direction::Rtl } else { Direction::Ltr }
}

// =============================================================================
// DOCUMENT ATTRIBUTES
// =============================================================================

/// Root element attributes of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: String,
    pub dir: Direction,
}

impl DocumentAttributes {
    #[must_use]
    pub fn new(default_language: &str) -> Self {
        let mut attrs = Self { lang: String::new(), dir: Direction::Ltr };
        attrs.apply_language(default_language);
        attrs
    }

    /// Write `lang` and `dir` for `language`. Idempotent; called on every
    /// language change.
    pub fn apply_language(&mut self, language: &str) {
        language.trim().clone_into(&mut self.lang);
        self.dir = direction(Some(language));
    }
}

// =============================================================================
// PATH LANGUAGE
// =============================================================================

/// Split a leading language segment off a request path.
///
/// `/ar/about` resolves to (`ar`, `/about`) when `ar` is supported. Anything
/// else resolves to the default language and the unchanged path.
#[must_use]
pub fn resolve_path_language(path: &str, supported: &[String], default_language: &str) -> (String, String) {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
    let candidate = first.to_ascii_lowercase();

    if !candidate.is_empty() && supported.iter().any(|code| *code == candidate) {
        let route = format!("/{}", rest.trim_end_matches('/'));
        return (candidate, route);
    }

    let route = if trimmed.is_empty() { "/".to_owned() } else { format!("/{}", trimmed.trim_end_matches('/')) };
    (default_language.to_owned(), route)
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
