use leptos::prelude::*;

use crate::storage;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Saved preference, falling back to the OS-level color scheme.
pub fn initial_theme() -> String {
    if let Some(saved) = storage::get(THEME_KEY) {
        return saved;
    }
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);
    if prefers_dark { "dark" } else { "light" }.to_string()
}

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
/// - "dark" → forces dark
/// - anything else → light, the stylesheet default
pub fn apply_theme(theme: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                if theme == "dark" {
                    let _ = html.set_attribute("data-theme", "dark");
                } else {
                    let _ = html.remove_attribute("data-theme");
                }
            }
        }
    }
}

pub fn persist_theme(theme: &str) {
    storage::set(THEME_KEY, theme);
}
