//! lexitui - Terminal dictionary with debounced live lookup
//!
//! Type a word, stop typing for a second, get the definition.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! lexitui
//!
//! # CLI mode (for automation)
//! lexitui define hello
//! lexitui define serendipity --json
//! ```

// The binary re-declares the library modules; helpers exercised only through
// the library (tests, CLI surface) are not dead here.
#![allow(dead_code)]

mod api;
mod app;
mod audio;
mod cli;
mod commands;
mod config;
mod debounce;
mod lookup;
mod models;
mod ui;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::process::Child;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::cli::{Cli, Command, ExitCode};
use crate::config::ThemeStore;
use crate::debounce::Debouncer;
use crate::lookup::LookupService;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = cli::Output::new(&cli);

    match cli.command {
        Some(Command::Define(cmd)) => commands::define_cmd(cmd, &output).await,
        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let mut terminal = init_terminal()?;

    // Theme preference read once at startup; persisted on every toggle.
    let mut store = ThemeStore::load();
    let mut app = App::new(store.get());

    // One client and one cache for the whole process lifetime.
    let mut service = LookupService::new(api::DictionaryClient::new());
    let mut debouncer = Debouncer::default();

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut store, &mut service, &mut debouncer).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, pumps the debouncer and lookup channel,
/// renders the UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    store: &mut ThemeStore,
    service: &mut LookupService,
    debouncer: &mut Debouncer,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    // Probe for a local audio player once; 'p' reports if none is installed.
    let audio_player = AudioPlayer::detect().await;
    // Keeps the most recent clip's process handle alive until the next one.
    let mut _audio_child: Option<Child> = None;

    while app.running {
        // Render current state
        terminal.draw(|frame| ui::view::render(frame, app))?;

        // Poll for events with timeout; the timeout doubles as the tick
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    let theme_before = app.theme;
                    app.handle_key(key);
                    if app.theme != theme_before {
                        store.set(app.theme);
                    }
                }
            }
        }

        // Feed the debouncer the live query and activate stabilized values.
        debouncer.update(app.query.trimmed());
        if let Some(stable) = debouncer.poll() {
            if let Some(key) = app.activate_key(&stable) {
                if let Some(entry) = service.cached(&key).cloned() {
                    app.apply_lookup(&key, Ok(entry));
                } else {
                    service.request(&key);
                }
            }
        }

        // Apply completed lookups; the active-key guard drops stale ones.
        while let Some(outcome) = service.poll() {
            app.apply_lookup(&outcome.key, outcome.result);
        }

        // Dispatch pronunciation playback
        if let Some(url) = app.take_audio_request() {
            match &audio_player {
                Some(player) => match player.play(&url) {
                    Ok(child) => _audio_child = Some(child),
                    Err(e) => app.set_notice(e.to_string()),
                },
                None => app.set_notice("No audio player found. Install mpv or ffmpeg."),
            }
        }
    }

    Ok(())
}
