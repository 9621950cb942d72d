//! Render variants and themes.
//!
//! Both are chosen from rendering parameters authored in the CMS. Unknown
//! values never fail a render: the variant falls back to `Default` and the
//! theme to `Light`, silently.

/// Variant every component supports.
pub const DEFAULT_VARIANT: &str = "Default";

/// Rendering parameter naming the variant.
pub const VARIANT_PARAM: &str = "FieldNames";

/// Rendering parameter naming the colour theme.
pub const THEME_PARAM: &str = "theme";

/// Pick `requested` if the component declares it, else `Default`.
/// Matching is exact; `"centered"` does not select `"Centered"`.
#[must_use]
pub fn select_variant(declared: &'static [&'static str], requested: Option<&str>) -> &'static str {
    requested
        .map(str::trim)
        .and_then(|name| declared.iter().copied().find(|variant| *variant == name))
        .unwrap_or(DEFAULT_VARIANT)
}

// =============================================================================
// THEMES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Brand,
}

/// CSS classes applied by a theme.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub section: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub accent: &'static str,
}

static LIGHT: ThemeStyles = ThemeStyles {
    section: "theme-light bg-white",
    heading: "text-slate-900",
    body: "text-slate-600",
    accent: "btn btn-primary",
};

static DARK: ThemeStyles = ThemeStyles {
    section: "theme-dark bg-slate-900",
    heading: "text-white",
    body: "text-slate-300",
    accent: "btn btn-inverse",
};

static BRAND: ThemeStyles = ThemeStyles {
    section: "theme-brand bg-brand",
    heading: "text-white",
    body: "text-brand-50",
    accent: "btn btn-light",
};

impl Theme {
    /// Parse the `theme` parameter. Case-insensitive; unknown values map to `Light`.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("dark") => Self::Dark,
            Some("brand") => Self::Brand,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn styles(self) -> &'static ThemeStyles {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
            Self::Brand => &BRAND,
        }
    }
}
