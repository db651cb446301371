//! Bridges eframe's persistent storage to the panel's key-value store.
//!
//! eframe only hands out writable storage from `App::save`, so preferences
//! live in a [`MemoryStore`] mirror during the session and are copied back
//! on save.

use reading_panel::host::{KeyValueStore, MemoryStore};
use reading_panel::preferences::{PANEL_POSITION_KEY, PERSISTENT_KEYS};

/// Copies every known preference out of eframe storage.
///
/// Empty strings mark removed keys and are skipped.
pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> MemoryStore {
    let Some(storage) = storage else {
        log::info!("No persistent storage available - preferences last for this session only");
        return MemoryStore::new();
    };

    PERSISTENT_KEYS
        .iter()
        .filter_map(|&key| {
            storage
                .get_string(key)
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        })
        .collect()
}

/// Forgets the saved panel position so the next mount uses the default.
pub fn reset_layout(preferences: &mut MemoryStore) {
    log::info!("Resetting saved panel position");
    preferences.remove(PANEL_POSITION_KEY);
}

/// Writes the mirror back if it changed since the last flush.
pub fn flush_preferences(preferences: &mut MemoryStore, storage: &mut dyn eframe::Storage) {
    if !preferences.take_dirty() {
        return;
    }

    for key in PERSISTENT_KEYS {
        let value = preferences.get(key).unwrap_or_default();
        storage.set_string(key, value);
    }
    log::debug!("Preferences saved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use reading_panel::preferences::{FONT_SCALE_KEY, THEME_KEY};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStorage {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl eframe::Storage for FakeStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.writes += 1;
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    fn load(storage: &FakeStorage) -> MemoryStore {
        load_preferences(Some(storage as &dyn eframe::Storage))
    }

    fn saved_storage() -> FakeStorage {
        let mut storage = FakeStorage::default();
        storage
            .values
            .insert(PANEL_POSITION_KEY.to_owned(), r#"{"x":40,"y":120}"#.to_owned());
        storage.values.insert(THEME_KEY.to_owned(), "dark".to_owned());
        storage.values.insert("unrelated".to_owned(), "kept".to_owned());
        storage
    }

    #[test]
    fn test_load_preferences_copies_known_keys() {
        let storage = saved_storage();
        let preferences = load(&storage);

        assert_eq!(
            preferences.get(PANEL_POSITION_KEY).as_deref(),
            Some(r#"{"x":40,"y":120}"#)
        );
        assert_eq!(preferences.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(preferences.get(FONT_SCALE_KEY), None);
        assert_eq!(preferences.get("unrelated"), None);
        assert!(!preferences.is_dirty());
    }

    #[test]
    fn test_load_preferences_without_storage() {
        let preferences = load_preferences(None);
        assert_eq!(preferences.get(THEME_KEY), None);
    }

    #[test]
    fn test_reset_layout_survives_save_and_reload() {
        let mut storage = saved_storage();
        let mut preferences = load(&storage);

        reset_layout(&mut preferences);
        flush_preferences(&mut preferences, &mut storage);

        assert_eq!(storage.values.get(PANEL_POSITION_KEY).map(String::as_str), Some(""));
        let reloaded = load(&storage);
        assert_eq!(reloaded.get(PANEL_POSITION_KEY), None);
        assert_eq!(reloaded.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_flush_skips_clean_mirror() {
        let mut storage = saved_storage();
        let mut preferences = load(&storage);

        flush_preferences(&mut preferences, &mut storage);
        assert_eq!(storage.writes, 0);

        preferences.set(FONT_SCALE_KEY, "1.2".to_owned());
        flush_preferences(&mut preferences, &mut storage);
        assert_eq!(storage.writes, PERSISTENT_KEYS.len());
        assert_eq!(storage.values.get(FONT_SCALE_KEY).map(String::as_str), Some("1.2"));

        flush_preferences(&mut preferences, &mut storage);
        assert_eq!(storage.writes, PERSISTENT_KEYS.len());
    }
}
