//! Data structures and types for lexitui
//!
//! Contains all shared models used across the application:
//! - **Entries**: dictionary lookup results (headword, phonetic, meanings)
//! - **Theme**: light/dark mode preference

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Theme
// =============================================================================

/// Light/dark theme preference, persisted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

// =============================================================================
// Dictionary Entries
// =============================================================================

/// One sense of a word: part-of-speech label plus its primary definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
    /// Usage example, when the upstream entry carries one
    pub example: Option<String>,
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.part_of_speech, self.definition)
    }
}

/// A resolved dictionary entry for one headword.
///
/// The pronunciation audio URL is part of the record, so it is replaced
/// atomically with the rest of the result on every successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<Meaning>,
    pub audio_url: Option<String>,
}

impl WordEntry {
    pub fn has_audio(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phonetic {
            Some(p) => write!(f, "{} {}", self.word, p),
            None => write!(f, "{}", self.word),
        }
    }
}
