//! Persisted key-value preferences
//!
//! A small JSON map kept in the user config directory. The only key in use
//! is the theme; the last value written wins. Storage failures never reach
//! the user, they are logged and ignored.

use crate::error::{Result, TranslumenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the theme is stored
pub const THEME_KEY: &str = "tl-theme";

/// Theme variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    /// Parse a stored value; unknown values yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeVariant::Dark),
            "light" => Some(ThemeVariant::Light),
            _ => None,
        }
    }

    /// Dark becomes light; anything else becomes dark
    pub fn toggle(&self) -> Self {
        match self {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        }
    }
}

/// File-backed string map
#[derive(Debug)]
pub struct PreferenceStore {
    /// Path to the preferences file
    path: PathBuf,

    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store in `~/.config/translumen/preferences.json`
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| TranslumenError::config("Could not determine config directory"))?
            .join("translumen");
        Ok(Self::with_path(dir.join("preferences.json")))
    }

    /// Open the store at a specific path (for testing)
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable preferences"
                );
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a stored value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Store a value and write the file immediately
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Saved theme, if one was stored and is recognised
    pub fn load_theme(&self) -> Option<ThemeVariant> {
        self.get(THEME_KEY).and_then(ThemeVariant::parse)
    }

    /// Save the theme, logging instead of failing
    pub fn save_theme(&mut self, theme: ThemeVariant) {
        if let Err(e) = self.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, "failed to save theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!(ThemeVariant::parse("dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::parse("LIGHT"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::parse("sepia"), None);
    }

    #[test]
    fn test_variant_toggle() {
        assert_eq!(ThemeVariant::Dark.toggle(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.toggle(), ThemeVariant::Dark);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::with_path(dir.path().join("prefs.json"));
        assert_eq!(store.load_theme(), None);
    }

    #[test]
    fn test_theme_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = PreferenceStore::with_path(&path);
        store.save_theme(ThemeVariant::Dark);

        let reopened = PreferenceStore::with_path(&path);
        assert_eq!(reopened.load_theme(), Some(ThemeVariant::Dark));
        assert_eq!(reopened.get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn test_last_value_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PreferenceStore::with_path(&path);
        store.save_theme(ThemeVariant::Dark);
        store.save_theme(ThemeVariant::Light);

        assert_eq!(
            PreferenceStore::with_path(&path).load_theme(),
            Some(ThemeVariant::Light)
        );
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let store = PreferenceStore::with_path(&path);
        assert_eq!(store.load_theme(), None);
    }
}
