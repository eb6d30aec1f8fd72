//! Application Context
//!
//! Theme state provided via Leptos Context API. The theme persists in its
//! own storage slot, independent of the task list.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Theme;
use crate::storage::{BrowserStorage, KeyValueStore};

/// App-wide theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current color scheme - read
    pub theme: ReadSignal<Theme>,
    /// Current color scheme - write
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new(theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }

    /// Switch between light and dark
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

/// Create the theme signal, keep `<html class="dark">` and the storage slot
/// in sync with it, and provide it to children.
pub fn provide_theme() -> ThemeContext {
    let initial = initial_theme(&BrowserStorage, system_prefers_dark());
    let ctx = ThemeContext::new(signal(initial));

    Effect::new(move |_| {
        let theme = ctx.theme.get();
        apply_theme(theme);
        persist_theme(&BrowserStorage, theme);
        log::debug!("[THEME] {}", theme.as_str());
    });

    provide_context(ctx);
    ctx
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Stored choice first, then the system preference
pub fn initial_theme<S: KeyValueStore + ?Sized>(storage: &S, prefers_dark: bool) -> Theme {
    let stored = storage
        .get_item(&AppConfig::get().theme_key)
        .ok()
        .flatten()
        .and_then(|s| Theme::parse(&s));
    match stored {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn persist_theme<S: KeyValueStore + ?Sized>(storage: &S, theme: Theme) {
    if let Err(e) = storage.set_item(&AppConfig::get().theme_key, theme.as_str()) {
        log::warn!("[THEME] Failed to persist theme: {}", e);
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        log::warn!("[THEME] Failed to update root class: {:?}", e);
    }
}
