//! Theme preference resolution and toggle.
//!
//! Reads the `theme` key from `localStorage` once at startup and applies the
//! `dark` class to the `<html>` element. The key holds `"dark"` or is absent;
//! absence defers to the system `prefers-color-scheme`. Requires a browser
//! environment; other builds resolve to light and no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

const DARK_VALUE: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored value wins; otherwise follow the system preference.
#[must_use]
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(DARK_VALUE) => Theme::Dark,
        Some(_) => Theme::Light,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Value to persist for `theme`; `None` means remove the key.
#[must_use]
pub fn stored_value(theme: Theme) -> Option<&'static str> {
    theme.is_dark().then_some(DARK_VALUE)
}

/// Read the startup theme from localStorage and the system preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        resolve(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve(None, false)
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = if theme.is_dark() { class_list.add_1("dark") } else { class_list.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = match stored_value(next) {
                Some(v) => storage.set_item(STORAGE_KEY, v),
                None => storage.remove_item(STORAGE_KEY),
            };
        }
    }
    next
}
