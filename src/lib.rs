//! lexitui - Terminal dictionary with debounced live lookup
//!
//! Type a word, stop typing for a second, get the definition: headword,
//! phonetic transcription, meanings by part of speech, and pronunciation
//! audio. Light/dark theme persisted across sessions.
//!
//! # Modules
//!
//! - `models` - Dictionary entries and theme preference
//! - `api` - Dictionary API client
//! - `lookup` - Query-keyed cache and single-flight fetcher
//! - `debounce` - Trailing-edge input debouncer
//! - `audio` - Pronunciation playback
//! - `config` - Config file and theme store
//! - `ui` - TUI components
//! - `app` - Application state

pub mod api;
pub mod app;
pub mod audio;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod lookup;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{DictionaryClient, DictionaryError};
pub use app::{App, InputMode, LookupStatus};
pub use config::{Config, ThemeStore};
pub use debounce::Debouncer;
pub use lookup::{LookupOutcome, LookupService};
pub use models::{Meaning, ThemeMode, WordEntry};
