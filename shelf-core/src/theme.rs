//! Light/dark theme preference
//!
//! [`ThemeStore`] is the single source of truth for the theme. It is passed to
//! whoever needs it rather than living in a global, persists every change to a
//! [`PreferenceStore`], and notifies subscribers through a watch channel.

use crate::storage::PreferenceStore;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Preference key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

/// Attribute set on the document root so styling can react to the theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
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

    /// Parse a persisted value; anything other than `dark` reads as light
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The marker attribute applied to the document root
    pub fn root_attribute(self) -> (&'static str, &'static str) {
        (THEME_ATTRIBUTE, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide theme preference backed by durable storage
pub struct ThemeStore {
    prefs: Arc<dyn PreferenceStore>,
    current: watch::Sender<Theme>,
}

impl ThemeStore {
    /// Load the persisted preference, defaulting to light when unset
    pub fn load(prefs: Arc<dyn PreferenceStore>) -> Self {
        let theme = prefs
            .get(THEME_KEY)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default();
        tracing::debug!(%theme, "loaded theme preference");

        let (current, _) = watch::channel(theme);
        Self { prefs, current }
    }

    pub fn get(&self) -> Theme {
        *self.current.borrow()
    }

    /// Apply and persist a theme
    ///
    /// Storage failures are logged and otherwise ignored.
    pub fn set(&self, theme: Theme) {
        self.current.send_replace(theme);
        if let Err(e) = self.prefs.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    /// Flip the current theme and return the new value
    pub fn toggle(&self) -> Theme {
        let next = self.get().flipped();
        self.set(next);
        next
    }

    /// Observe theme changes
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::{MemoryPreferences, StorageResult};

    struct BrokenPreferences;

    impl PreferenceStore for BrokenPreferences {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("disk full".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::load(Arc::new(MemoryPreferences::new()));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn test_loads_persisted_dark() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(THEME_KEY, "dark").unwrap();

        let store = ThemeStore::load(prefs);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(THEME_KEY, "sepia").unwrap();

        assert_eq!(ThemeStore::load(prefs).get(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = ThemeStore::load(prefs.clone());
        let original = store.get();

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get().root_attribute(), ("data-theme", "dark"));

        assert_eq!(store.toggle(), original);
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some(original.as_str()));
        assert_eq!(store.get().root_attribute(), original.root_attribute());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = ThemeStore::load(Arc::new(MemoryPreferences::new()));
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.toggle();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Theme::Dark);
    }

    #[test]
    fn test_storage_failure_is_not_surfaced() {
        let store = ThemeStore::load(Arc::new(BrokenPreferences));
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }
}
