//! Pronunciation playback via a local audio player
//!
//! Spawns mpv (or ffplay) detached from the TUI to play the entry's
//! pronunciation clip.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

/// Supported audio players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerType {
    /// mpv (default)
    #[default]
    Mpv,
    /// ffplay from ffmpeg
    Ffplay,
}

impl PlayerType {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Ffplay => "ffplay",
        }
    }

    /// Get a display name for this player
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Ffplay => "ffplay",
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from audio playback
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("No audio player found. Install mpv or ffmpeg.")]
    NotFound,
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// Local player for pronunciation audio
pub struct AudioPlayer {
    player_type: PlayerType,
}

impl AudioPlayer {
    pub fn new(player_type: PlayerType) -> Self {
        Self { player_type }
    }

    /// Pick the first player available on this system
    pub async fn detect() -> Option<Self> {
        for player_type in [PlayerType::Mpv, PlayerType::Ffplay] {
            let player = Self::new(player_type);
            if player.is_available().await {
                return Some(player);
            }
        }
        None
    }

    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        Command::new("which")
            .arg(self.player_type.command())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Play an audio URL, detached from the terminal.
    ///
    /// The child is returned so callers can reap it; the TUI lets it run to
    /// completion on its own.
    pub fn play(&self, url: &str) -> Result<Child, PlayerError> {
        let mut cmd = Command::new(self.player_type.command());

        match self.player_type {
            PlayerType::Mpv => {
                cmd.arg("--no-video").arg("--really-quiet").arg(url);
            }
            PlayerType::Ffplay => {
                cmd.arg("-nodisp").arg("-autoexit").arg("-loglevel").arg("quiet").arg(url);
            }
        }

        // Keep the player's stdio off the TUI's terminal.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        Ok(cmd.spawn()?)
    }
}
