//! App state and core application logic
//!
//! Holds the query editing state, the lookup status shown by the renderer,
//! the stale-response guard, and keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::DictionaryError;
use crate::models::{ThemeMode, WordEntry};

/// Inline validation message for an empty query
pub const EMPTY_QUERY_ERROR: &str = "Please enter a word";

/// User-visible text for any failed lookup
pub const NOT_FOUND_MESSAGE: &str = "Word not found.";

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Text input mode (search box focused)
    #[default]
    Editing,
}

// =============================================================================
// Lookup Status
// =============================================================================

/// Fetch status for the active query, consumed read-only by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum LookupStatus {
    /// Nothing to show (no stabilized query yet, or query cleared)
    Idle,
    /// Request in flight for the active key
    Loading,
    /// Entry for the active key
    Ready(WordEntry),
    /// Lookup failed; carries the user-visible reason
    Failed(String),
}

impl LookupStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading)
    }

    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            LookupStatus::Ready(entry) => Some(entry),
            _ => None,
        }
    }
}

// =============================================================================
// Query State
// =============================================================================

/// Search input state with cursor editing and validation
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Raw query text
    pub value: String,
    /// Cursor position in bytes, always on a char boundary
    pub cursor: usize,
    /// Whether the field has ever been edited
    pub dirty: bool,
}

impl QueryState {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.dirty = true;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.value.remove(self.cursor);
            self.dirty = true;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            self.dirty = true;
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        let prev = self.value[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor -= prev;
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let next = self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor += next;
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Clear query
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.dirty = true;
    }

    /// Trimmed query used as the lookup key
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Inline validation error, shown once the field has been edited
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.dirty && self.trimmed().is_empty() {
            Some(EMPTY_QUERY_ERROR)
        } else {
            None
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Search input
    pub query: QueryState,
    /// Lookup status for the active key
    pub status: LookupStatus,
    /// Key the visible status belongs to; resolutions for any other key are
    /// dropped at apply time
    pub active_key: Option<String>,
    /// Current theme mode (persisted through the ThemeStore by the caller)
    pub theme: ThemeMode,
    /// Transient app-level error (e.g. audio player missing)
    pub notice: Option<String>,

    /// Pronunciation URL waiting for the event loop to dispatch
    audio_request: Option<String>,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            running: true,
            input_mode: InputMode::default(),
            query: QueryState::default(),
            status: LookupStatus::Idle,
            active_key: None,
            theme,
            notice: None,
            audio_request: None,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Mark a stabilized query as active.
    ///
    /// Empty keys disable the lookup: status returns to idle and no request
    /// is expected. Returns the key the caller should hand to the fetch
    /// layer, if any.
    pub fn activate_key(&mut self, key: &str) -> Option<String> {
        if key.is_empty() {
            self.active_key = None;
            self.status = LookupStatus::Idle;
            return None;
        }
        self.active_key = Some(key.to_string());
        self.status = LookupStatus::Loading;
        Some(key.to_string())
    }

    /// Apply a completed lookup under the stale-response guard.
    ///
    /// A resolution whose key no longer matches the active key is discarded;
    /// responses may arrive out of order relative to issuance.
    pub fn apply_lookup(&mut self, key: &str, result: Result<WordEntry, DictionaryError>) {
        if self.active_key.as_deref() != Some(key) {
            return;
        }
        self.status = match result {
            Ok(entry) => LookupStatus::Ready(entry),
            Err(_) => LookupStatus::Failed(NOT_FOUND_MESSAGE.to_string()),
        };
    }

    /// Take a pending pronunciation request, if the user asked for one
    pub fn take_audio_request(&mut self) -> Option<String> {
        self.audio_request.take()
    }

    /// Set a transient app-level message
    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear transient notices on any keypress
        self.notice = None;

        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Char(c) => {
                self.query.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.query.backspace();
                true
            }
            KeyCode::Delete => {
                self.query.delete();
                true
            }
            KeyCode::Left => {
                self.query.cursor_left();
                true
            }
            KeyCode::Right => {
                self.query.cursor_right();
                true
            }
            KeyCode::Home => {
                self.query.cursor_home();
                true
            }
            KeyCode::End => {
                self.query.cursor_end();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.input_mode = InputMode::Editing;
                true
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                true
            }
            KeyCode::Char('p') => {
                match self.status.entry().and_then(|e| e.audio_url.clone()) {
                    Some(url) => self.audio_request = Some(url),
                    None => self.set_notice("No audio available"),
                }
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
