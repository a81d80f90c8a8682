//! UI Preferences
//!
//! Light/dark theme: read once on startup, written on every toggle.
//! The browser side (localStorage, `dark` class on `<html>`) is confined
//! to this module.

const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved choice first; the OS preference only applies when nothing (or
    /// an empty string) is saved. Unrecognized saved values mean light.
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.filter(|value| !value.is_empty()) {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

fn storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("no window")?
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Theme to start with, already applied to the document.
pub fn load_theme() -> Theme {
    let saved = storage().ok().and_then(|s| s.get_item(THEME_KEY).ok().flatten());
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);
    let theme = Theme::resolve(saved.as_deref(), prefers_dark);
    if let Err(e) = apply_theme(theme) {
        log::warn!("[Theme] could not apply {}: {}", theme.as_str(), e);
    }
    theme
}

/// Apply `theme` to the document and remember it.
pub fn save_theme(theme: Theme) {
    if let Err(e) = apply_theme(theme) {
        log::warn!("[Theme] could not apply {}: {}", theme.as_str(), e);
    }
    let stored = storage().and_then(|s| s.set_item(THEME_KEY, theme.as_str()).map_err(|e| format!("{:?}", e)));
    if let Err(e) = stored {
        log::warn!("[Theme] could not persist {}: {}", theme.as_str(), e);
    }
}

fn apply_theme(theme: Theme) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or("no document element")?;
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
    result.map_err(|e| format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_choice_wins() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_falls_back_to_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_unknown_saved_value_is_light() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("Dark"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
