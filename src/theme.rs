//! Color Themes
//!
//! Cycle order and persistence for the theme toggle. The active theme is
//! written to `data-theme` on `<html>` plus a `theme-*` class on `<body>`.

pub const STORAGE_KEY: &str = "pixelPetsTheme";

/// Theme used by the Konami easter egg; never persisted or cycled
pub const GAMEBOY_THEME: &str = "gb";

const BODY_CLASSES: [&str; 5] = ["theme-cola", "theme-sunset", "theme-grape", "theme-light", "theme-gb"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Light,
    Cola,
    Sunset,
    Grape,
}

impl Theme {
    pub const ALL: [Theme; 5] = [Theme::Default, Theme::Light, Theme::Cola, Theme::Sunset, Theme::Grape];

    /// Attribute value; `None` for the default palette
    pub fn id(self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            Theme::Light => Some("light"),
            Theme::Cola => Some("cola"),
            Theme::Sunset => Some("sunset"),
            Theme::Grape => Some("grape"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Light => "Light",
            Theme::Cola => "Cola",
            Theme::Sunset => "Sunset",
            Theme::Grape => "Grape",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Default => "🌙",
            Theme::Light => "☀️",
            Theme::Cola => "🥤",
            Theme::Sunset => "🌅",
            Theme::Grape => "🍇",
        }
    }

    pub fn next(self) -> Theme {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Unknown or missing ids map to the default theme
    pub fn from_id(id: Option<&str>) -> Theme {
        Self::ALL
            .into_iter()
            .find(|t| t.id().is_some() && t.id() == id)
            .unwrap_or_default()
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Theme saved by a previous visit
pub fn stored_theme() -> Theme {
    let stored = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_id(stored.as_deref())
}

/// Apply to the document and persist
pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(root), Some(body)) = (document.document_element(), document.body()) else {
        return;
    };

    for class in BODY_CLASSES {
        let _ = body.class_list().remove_1(class);
    }

    match theme.id() {
        None => {
            let _ = root.remove_attribute("data-theme");
            if let Some(storage) = storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
        Some(id) => {
            let _ = root.set_attribute("data-theme", id);
            let _ = body.class_list().add_1(&format!("theme-{}", id));
            if let Some(storage) = storage() {
                let _ = storage.set_item(STORAGE_KEY, id);
            }
        }
    }
}

/// Flip the Game Boy palette on `<html>`; returns whether it is now active
pub fn toggle_gameboy() -> bool {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return false;
    };

    if root.get_attribute("data-theme").as_deref() == Some(GAMEBOY_THEME) {
        let _ = root.remove_attribute("data-theme");
        false
    } else {
        let _ = root.set_attribute("data-theme", GAMEBOY_THEME);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order_wraps() {
        let mut theme = Theme::Default;
        let mut seen = Vec::new();
        for _ in 0..5 {
            theme = theme.next();
            seen.push(theme.label());
        }
        assert_eq!(seen, ["Light", "Cola", "Sunset", "Grape", "Default"]);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Theme::from_id(Some("cola")), Theme::Cola);
        assert_eq!(Theme::from_id(Some("gb")), Theme::Default);
        assert_eq!(Theme::from_id(Some("")), Theme::Default);
        assert_eq!(Theme::from_id(None), Theme::Default);
    }
}
