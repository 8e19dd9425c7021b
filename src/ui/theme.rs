//! Light and dark palettes for lexitui
//!
//! The active [`Palette`] is chosen from the persisted [`ThemeMode`] on every
//! frame, so a toggle repaints the whole screen consistently.

use ratatui::style::{Color, Modifier, Style};

use crate::models::ThemeMode;

/// A resolved color palette for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Panel/input background
    pub surface: Color,
    /// Headwords, titles, focused borders
    pub primary: Color,
    /// Body text
    pub text: Color,
    /// Muted text (hints, phonetics, examples)
    pub dim: Color,
    /// Part-of-speech labels
    pub accent: Color,
    /// Validation and lookup errors
    pub error: Color,
    /// Audio-available indicator
    pub success: Color,
    /// Unfocused borders
    pub border: Color,
}

impl Palette {
    /// Light mode: ink on paper
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(0xfa, 0xfa, 0xf7),
            surface: Color::Rgb(0xee, 0xee, 0xe8),
            primary: Color::Rgb(0x1d, 0x4e, 0xd8),
            text: Color::Rgb(0x1f, 0x29, 0x33),
            dim: Color::Rgb(0x6b, 0x72, 0x80),
            accent: Color::Rgb(0x92, 0x40, 0x0e),
            error: Color::Rgb(0xb9, 0x1c, 0x1c),
            success: Color::Rgb(0x15, 0x80, 0x3d),
            border: Color::Rgb(0xc6, 0xc6, 0xbd),
        }
    }

    /// Dark mode
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(0x11, 0x18, 0x27),
            surface: Color::Rgb(0x1f, 0x2a, 0x3a),
            primary: Color::Rgb(0x60, 0xa5, 0xfa),
            text: Color::Rgb(0xe5, 0xe7, 0xeb),
            dim: Color::Rgb(0x9c, 0xa3, 0xaf),
            accent: Color::Rgb(0xfb, 0xbf, 0x24),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            border: Color::Rgb(0x37, 0x41, 0x51),
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Style helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Default text style
    pub fn body(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Dimmed/muted text
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Error style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Headword style
    pub fn headword(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Phonetic transcription style
    pub fn phonetic(&self) -> Style {
        Style::default().fg(self.dim).add_modifier(Modifier::ITALIC)
    }

    /// Part-of-speech label style
    pub fn part_of_speech(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Audio-available style
    pub fn audio(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Loading indicator style
    pub fn loading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused border
    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the search input field
    pub fn input(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Keybinding hint style
    pub fn keybind(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Status bar style
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
