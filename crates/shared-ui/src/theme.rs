use dioxus::prelude::*;

/// Theme families available in the application.
///
/// Each family provides a dark variant, a light variant, or both. Families
/// with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Slate,
    /// Dark-only high-contrast theme.
    Chalkboard,
    /// Light-only document-reading theme.
    Paper,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Slate,
    ThemeFamily::Chalkboard,
    ThemeFamily::Paper,
];

impl ThemeFamily {
    /// Internal key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Slate => "slate",
            ThemeFamily::Chalkboard => "chalkboard",
            ThemeFamily::Paper => "paper",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Slate => "Slate",
            ThemeFamily::Chalkboard => "Chalkboard",
            ThemeFamily::Paper => "Paper",
        }
    }

    /// Parse a family key string, falling back to Slate.
    pub fn from_key(s: &str) -> Self {
        match s {
            "chalkboard" => ThemeFamily::Chalkboard,
            "paper" => ThemeFamily::Paper,
            _ => ThemeFamily::Slate,
        }
    }

    /// Whether this family supports dark mode.
    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Paper)
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Chalkboard)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Slate, true) => "slate",
            (ThemeFamily::Slate, false) => "slate-light",
            // Chalkboard is dark-only
            (ThemeFamily::Chalkboard, _) => "chalkboard",
            // Paper is light-only
            (ThemeFamily::Paper, _) => "paper",
        }
    }
}

/// Shared theme state provided as context.
///
/// The sidebar mode toggle reads and writes these signals. Changes call
/// [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'slate';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
