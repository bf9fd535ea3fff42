//! Theme initialization and persistence.
//!
//! Reads the stored [`ThemeMode`] from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment; other builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "saas_dashboard_theme";

/// Read the stored theme, falling back to the system preference.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(mode) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(ThemeMode::parse) {
                return mode;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeMode::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Apply `mode` and persist it.
pub fn store(mode: ThemeMode) {
    apply(mode);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                log::warn!("theme: localStorage write failed");
            }
        }
    }
}
