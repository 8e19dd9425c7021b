//! Configuration management for lexitui
//!
//! Handles config file loading/saving and the persisted theme preference.
//! Config is stored at ~/.config/lexitui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::ThemeMode;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Persisted theme preference ("light" / "dark")
    pub theme: Option<ThemeMode>,
}

impl Config {
    /// Get config file path (~/.config/lexitui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexitui").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from an explicit path, or return default if not found
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}

// =============================================================================
// Theme Store
// =============================================================================

/// Persisted light/dark preference.
///
/// `get` reflects the value read at startup (absent key defaults to light);
/// `set` updates the in-memory mode and writes the config file best-effort.
/// Storage failures are ignored; the in-memory mode still switches so the
/// screen stays consistent.
#[derive(Debug)]
pub struct ThemeStore {
    mode: ThemeMode,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Load the preference from the default config location
    pub fn load() -> Self {
        Self::load_from(Config::path())
    }

    /// Load the preference from an explicit config path (None = memory only)
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let mode = path
            .as_deref()
            .map(Config::load_from)
            .and_then(|c| c.theme)
            .unwrap_or_default();
        Self { mode, path }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Some(path) = &self.path {
            let mut config = Config::load_from(path);
            config.theme = Some(mode);
            let _ = config.save_to(path);
        }
    }

    /// Flip the preference and persist it, returning the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }
}
