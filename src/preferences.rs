//! Persisted reader preferences.
//!
//! Every value is stored as a plain string under a fixed key. Readers
//! return a [`PreferenceError`] for absent or unparsable values; callers
//! log it and fall back to a default.

use crate::geometry::Position;
use crate::host::KeyValueStore;
use crate::panel::FontScale;
use crate::theme::Theme;
use thiserror::Error;

/// JSON `{"x":..,"y":..}` of the panel's last resting offset.
pub const PANEL_POSITION_KEY: &str = "reading-panel-position";

/// Decimal string of the chosen font scale.
pub const FONT_SCALE_KEY: &str = "article-font-size";

/// `"light"` or `"dark"`. Absent means "follow the system".
pub const THEME_KEY: &str = "theme";

/// Keys written to persistent storage.
pub const PERSISTENT_KEYS: [&str; 3] = [PANEL_POSITION_KEY, FONT_SCALE_KEY, THEME_KEY];

/// Errors that can occur when reading a stored preference.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("no value stored under '{0}'")]
    Missing(&'static str),
    #[error("malformed panel position: {0}")]
    MalformedPosition(#[from] serde_json::Error),
    #[error("unknown font scale '{0}'")]
    UnknownFontScale(String),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

pub fn load_position<S: KeyValueStore + ?Sized>(store: &S) -> Result<Position, PreferenceError> {
    let raw = store
        .get(PANEL_POSITION_KEY)
        .ok_or(PreferenceError::Missing(PANEL_POSITION_KEY))?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn store_position<S: KeyValueStore + ?Sized>(store: &mut S, position: Position) {
    match serde_json::to_string(&position) {
        Ok(json) => store.set(PANEL_POSITION_KEY, json),
        Err(err) => log::warn!("Failed to encode panel position: {err}"),
    }
}

pub fn load_font_scale<S: KeyValueStore + ?Sized>(store: &S) -> Result<FontScale, PreferenceError> {
    store
        .get(FONT_SCALE_KEY)
        .ok_or(PreferenceError::Missing(FONT_SCALE_KEY))?
        .parse()
}

pub fn store_font_scale<S: KeyValueStore + ?Sized>(store: &mut S, scale: FontScale) {
    store.set(FONT_SCALE_KEY, scale.as_str().to_owned());
}

pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Result<Theme, PreferenceError> {
    store
        .get(THEME_KEY)
        .ok_or(PreferenceError::Missing(THEME_KEY))?
        .parse()
}

pub fn store_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) {
    store.set(THEME_KEY, theme.as_str().to_owned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryStore;

    #[test]
    fn test_position_round_trip() {
        let mut store = MemoryStore::new();
        store_position(&mut store, Position::new(312, 45));
        assert_eq!(
            store.get(PANEL_POSITION_KEY).as_deref(),
            Some(r#"{"x":312,"y":45}"#)
        );
        assert_eq!(load_position(&store).unwrap(), Position::new(312, 45));
    }

    #[test]
    fn test_position_missing_and_malformed() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            load_position(&store),
            Err(PreferenceError::Missing(PANEL_POSITION_KEY))
        ));

        for bad in ["{not json", r#"{"x":"left","y":3}"#, r#"{"x":1}"#, "null"] {
            store.set(PANEL_POSITION_KEY, bad.to_owned());
            assert!(
                matches!(
                    load_position(&store),
                    Err(PreferenceError::MalformedPosition(_))
                ),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_font_scale_round_trip() {
        let mut store = MemoryStore::new();
        store_font_scale(&mut store, FontScale::Increase);
        assert_eq!(store.get(FONT_SCALE_KEY).as_deref(), Some("1.2"));
        assert_eq!(load_font_scale(&store).unwrap(), FontScale::Increase);
    }

    #[test]
    fn test_font_scale_unknown() {
        let mut store = MemoryStore::new();
        store.set(FONT_SCALE_KEY, "huge".to_owned());
        assert!(matches!(
            load_font_scale(&store),
            Err(PreferenceError::UnknownFontScale(_))
        ));
    }

    #[test]
    fn test_theme_round_trip() {
        let mut store = MemoryStore::new();
        assert!(load_theme(&store).is_err());
        store_theme(&mut store, Theme::Dark);
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
    }
}
