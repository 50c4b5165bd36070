//! Light/dark theme store.
//!
//! The store is created once at start-up, injected into `State`, and read by
//! every widget when drawing, so toggling it re-styles the whole screen.

use crate::error::AppResult;
use log::*;
use serde::{Deserialize, Serialize};

/// Terminal convention for advertising foreground and background colours,
/// e.g. `15;0` for light text on a dark background.
///
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Specifying the two display modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    ///
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Durable storage for the theme preference.
///
pub trait ThemePreference: Send {
    fn stored_theme(&self) -> Option<ThemeMode>;
    fn store_theme(&mut self, mode: ThemeMode) -> AppResult<()>;
}

/// Derive the ambient preference from a `COLORFGBG` value. The last field is
/// the background colour index: 0-6 and 8 are dark, 7 and 9-15 are light.
///
pub fn ambient_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match background {
        0..=6 | 8 => Some(ThemeMode::Dark),
        7 | 9..=15 => Some(ThemeMode::Light),
        _ => None,
    }
}

/// Read the ambient preference the terminal reports, if it reports one.
///
pub fn ambient_preference() -> Option<ThemeMode> {
    std::env::var(COLORFGBG_VAR)
        .ok()
        .and_then(|value| ambient_from_colorfgbg(&value))
}

/// Holds the current mode and writes every change through to its preference
/// storage.
///
pub struct ThemeStore {
    mode: ThemeMode,
    preference: Option<Box<dyn ThemePreference>>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        ThemeStore {
            mode: ThemeMode::Light,
            preference: None,
        }
    }
}

impl ThemeStore {
    /// Restore the mode from storage, falling back to the ambient preference
    /// and finally to light.
    ///
    pub fn restore(preference: Box<dyn ThemePreference>, ambient: Option<ThemeMode>) -> Self {
        let mode = match preference.stored_theme() {
            Some(mode) => {
                debug!("Restored {} theme from configuration.", mode.as_str());
                mode
            }
            None => {
                let mode = ambient.unwrap_or(ThemeMode::Light);
                debug!("No stored theme, using {} from the terminal.", mode.as_str());
                mode
            }
        };
        ThemeStore {
            mode,
            preference: Some(preference),
        }
    }

    /// Returns the current mode.
    ///
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip between light and dark, persisting the new mode. A storage
    /// failure is logged and the new mode still applies for this session.
    ///
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Some(preference) = self.preference.as_mut() {
            if let Err(e) = preference.store_theme(self.mode) {
                error!("Failed to persist theme preference: {}", e);
            }
        }
        info!("Switched to {} theme.", self.mode.as_str());
        self.mode
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory preference storage shared with the test body.
    ///
    #[derive(Clone, Default)]
    pub(crate) struct MemoryPreference {
        pub(crate) stored: Arc<Mutex<Option<ThemeMode>>>,
    }

    impl ThemePreference for MemoryPreference {
        fn stored_theme(&self) -> Option<ThemeMode> {
            *self.stored.lock().unwrap()
        }

        fn store_theme(&mut self, mode: ThemeMode) -> AppResult<()> {
            *self.stored.lock().unwrap() = Some(mode);
            Ok(())
        }
    }

    #[test]
    fn stored_value_wins_over_ambient() {
        let preference = MemoryPreference::default();
        *preference.stored.lock().unwrap() = Some(ThemeMode::Light);
        let store = ThemeStore::restore(Box::new(preference), Some(ThemeMode::Dark));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn fresh_session_adopts_ambient_preference() {
        let store = ThemeStore::restore(
            Box::new(MemoryPreference::default()),
            Some(ThemeMode::Dark),
        );
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn defaults_to_light_without_any_preference() {
        let store = ThemeStore::restore(Box::new(MemoryPreference::default()), None);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_twice_returns_to_persisted_value() {
        let preference = MemoryPreference::default();
        *preference.stored.lock().unwrap() = Some(ThemeMode::Dark);
        let mut store = ThemeStore::restore(Box::new(preference.clone()), None);

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(*preference.stored.lock().unwrap(), Some(ThemeMode::Light));
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(*preference.stored.lock().unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn toggle_without_storage_still_flips() {
        let mut store = ThemeStore::default();
        assert_eq!(store.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn colorfgbg_parsing() {
        assert_eq!(ambient_from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(ambient_from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(ambient_from_colorfgbg("12;default;8"), Some(ThemeMode::Dark));
        assert_eq!(ambient_from_colorfgbg("0;7"), Some(ThemeMode::Light));
        assert_eq!(ambient_from_colorfgbg("default"), None);
        assert_eq!(ambient_from_colorfgbg(""), None);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert!(serde_yaml::to_string(&ThemeMode::Dark).unwrap().contains("dark"));
        let mode: ThemeMode = serde_yaml::from_str("light").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
