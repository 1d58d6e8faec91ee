//! Light/dark theme initialization and toggle.
//!
//! Reads the preference from a `PreferenceStore` (default `light`) and
//! applies a `data-theme` attribute to the `<html>` element. Toggle writes
//! back to the store and re-applies immediately.
//!
//! TRADE-OFFS
//! ==========
//! The theme is a non-critical preference: storage failures are ignored and
//! non-browser builds skip the document update entirely.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark` is treated as light.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon offered by the toggle button: the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Owns the active theme and the store it persists to.
#[derive(Clone, Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the persisted theme (default light) and apply it to the document.
    pub fn init(store: S, key: &str) -> Self {
        let theme = store.load(key).map_or(Theme::default(), |raw| Theme::parse(&raw));
        apply(theme);
        Self { store, key: key.to_owned(), theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, persist it, and re-apply the document attribute.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(&self.key, self.theme.as_str());
        apply(self.theme);
        self.theme
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
