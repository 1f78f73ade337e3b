//! Colour theme preference.
//!
//! The preference is a single string (`"dark"` or `"light"`) kept in a
//! key-value store. The browser binding backs the store with `localStorage`;
//! tests use [`MemoryStore`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Page colour theme, reflected as `<html data-theme="…">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon class for the toggle button: it shows the theme you would switch to.
    #[must_use]
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-solid fa-sun",
            Self::Light => "fa-solid fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(SiteError::InvalidConfig(format!("unknown theme '{other}'"))),
        }
    }
}

/// Origin-scoped string store holding the preference.
pub trait PreferenceStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the store refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-memory store for tests and for pages where storage is blocked.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Theme preference bound to a store key.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    key: String,
    current: Theme,
}

impl ThemePreference {
    /// Load the stored theme, falling back to `default` when nothing usable is stored.
    pub fn load(store: &(impl PreferenceStore + ?Sized), key: &str, default: Theme) -> Self {
        let current = match store.get(key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                log::warn!(target: "site::theme", "ignoring stored theme: {err}");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                log::warn!(target: "site::theme", "{err}; using {default}");
                default
            }
        };
        Self { key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// The in-page theme changes even when the write fails; the error is
    /// returned so the caller can log it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the store refuses the write.
    pub fn toggle(&mut self, store: &mut (impl PreferenceStore + ?Sized)) -> Result<Theme, SiteError> {
        self.current = self.current.toggled();
        store.set(&self.key, self.current.as_str())?;
        Ok(self.current)
    }
}
