//! Light/dark theme preference.
//!
//! The preference is a single string in the browser's persistent key-value
//! store. [`ThemeStore`] reads it once at load, reflects it onto the page
//! through a [`ThemeSurface`], and flips it on every toggle click.
//!
//! Storage is best-effort: a missing, unreadable or corrupted value means the
//! light theme, and a failed write still switches the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::ThemeConfig;

/// The two supported color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted and attribute representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret the root theme attribute. Only `dark` selects the dark theme.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a persisted value is not a known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Error raised by a [`PreferenceStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage failed: {0}")]
    Backend(String),
}

/// Persistent string key-value storage scoped to the page's origin.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Session-lifetime store, used when the browser refuses persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where the active theme becomes visible: the root attribute and the toggle icon.
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme, icon: &str);
}

/// Reads, applies and toggles the persisted theme.
pub struct ThemeStore<S> {
    store: S,
    config: ThemeConfig,
    current: Theme,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Create a store; the current theme starts from the persisted value.
    pub fn new(store: S, config: ThemeConfig) -> Self {
        let mut themes = Self { store, config, current: Theme::Light };
        themes.current = themes.get_theme();
        themes
    }

    /// The persisted theme, or light when unset, unreadable or invalid.
    pub fn get_theme(&self) -> Theme {
        match self.store.read(&self.config.storage_key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err: ThemeParseError| {
                log::debug!("{err}, using {}", Theme::default());
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                Theme::default()
            }
        }
    }

    /// The theme currently shown on the page.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Glyph for the toggle icon while `theme` is active.
    #[must_use]
    pub fn icon(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.config.dark_icon,
            Theme::Light => &self.config.light_icon,
        }
    }

    /// Show the current theme without touching storage. Used at page load.
    pub fn restore(&self, surface: &impl ThemeSurface) -> Theme {
        surface.apply_theme(self.current, self.icon(self.current));
        self.current
    }

    /// Persist `theme` and show it.
    pub fn set_theme(&mut self, theme: Theme, surface: &impl ThemeSurface) {
        if let Err(err) = self.store.write(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.current = theme;
        surface.apply_theme(theme, self.icon(theme));
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&mut self, surface: &impl ThemeSurface) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next, surface);
        next
    }
}
