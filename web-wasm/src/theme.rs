//! Light/dark theme
//!
//! Applied as `data-bs-theme` on the root element and remembered in
//! localStorage.

use crate::storage::{read_value, write_value};
use leptos::prelude::*;

const THEME_STORAGE_KEY: &str = "shoppingTheme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button, showing the theme it switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-bs-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Restores the stored theme and applies it
    pub fn new() -> Self {
        let theme = read_value(THEME_STORAGE_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default();
        apply_theme(theme);
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        write_value(THEME_STORAGE_KEY, next.as_str());
        apply_theme(next);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
