//! Light and dark reading themes.

use crate::host::KeyValueStore;
use crate::preferences::{self, PreferenceError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button glyph: the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::UnknownTheme(other.to_owned())),
        }
    }
}

/// The stored theme if there is a valid one, else the system theme, else light.
pub fn resolve_theme<S: KeyValueStore + ?Sized>(store: &S, system: Option<Theme>) -> Theme {
    match preferences::load_theme(store) {
        Ok(theme) => theme,
        Err(err) => {
            log::debug!("Following system theme: {err}");
            system.unwrap_or_default()
        }
    }
}

/// Whether the reader has never picked a theme explicitly.
pub fn follows_system<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    preferences::load_theme(store).is_err()
}

/// The theme to switch to after the system theme changed, or `None` when
/// the reader picked one explicitly or nothing differs.
///
/// Called every frame, so it stays quiet.
pub fn system_theme_change<S: KeyValueStore + ?Sized>(
    store: &S,
    current: Theme,
    system: Option<Theme>,
) -> Option<Theme> {
    if !follows_system(store) {
        return None;
    }
    let theme = system.unwrap_or_default();
    (theme != current).then_some(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryStore;
    use crate::preferences::{THEME_KEY, store_theme};

    #[test]
    fn test_resolve_prefers_stored_theme() {
        let mut store = MemoryStore::new();
        store_theme(&mut store, Theme::Light);
        assert_eq!(resolve_theme(&store, Some(Theme::Dark)), Theme::Light);
        assert!(!follows_system(&store));
    }

    #[test]
    fn test_resolve_falls_back_to_system_then_light() {
        let mut store = MemoryStore::new();
        assert_eq!(resolve_theme(&store, Some(Theme::Dark)), Theme::Dark);
        assert_eq!(resolve_theme(&store, None), Theme::Light);

        store.set(THEME_KEY, "sepia".to_owned());
        assert_eq!(resolve_theme(&store, Some(Theme::Dark)), Theme::Dark);
        assert!(follows_system(&store));
    }

    #[test]
    fn test_system_theme_change_only_when_following() {
        let mut store = MemoryStore::new();
        assert_eq!(
            system_theme_change(&store, Theme::Light, Some(Theme::Dark)),
            Some(Theme::Dark)
        );
        assert_eq!(system_theme_change(&store, Theme::Dark, Some(Theme::Dark)), None);
        assert_eq!(system_theme_change(&store, Theme::Dark, None), Some(Theme::Light));

        store_theme(&mut store, Theme::Light);
        assert_eq!(system_theme_change(&store, Theme::Light, Some(Theme::Dark)), None);
    }

    #[test]
    fn test_toggle_and_icon() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Light.icon(), Theme::Dark.icon());
    }
}
