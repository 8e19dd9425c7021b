//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first, one screen, light and dark palettes.

pub mod theme;
pub mod view;

pub use theme::Palette;
