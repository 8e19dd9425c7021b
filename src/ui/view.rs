//! Screen rendering
//!
//! Pure functions of app state → frame. The whole screen is one view:
//! header with search box, message line, result area, status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, LookupStatus};
use crate::models::WordEntry;
use crate::ui::theme::Palette;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let pal = Palette::for_mode(app.theme);
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(pal.background)),
        area,
    );

    // Main layout: header, message line, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (logo + search box)
            Constraint::Length(1), // Validation / notice line
            Constraint::Min(1),    // Result area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app, &pal);
    render_message_line(frame, chunks[1], app, &pal);
    render_result(frame, chunks[2], app, &pal);
    render_status_bar(frame, chunks[3], app, &pal);
}

/// Render the header with logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Logo
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "LEXI",
            ratatui::style::Style::default()
                .fg(pal.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            ratatui::style::Style::default()
                .fg(pal.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(pal.border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let search_style = if app.input_mode == InputMode::Editing {
        pal.border_focused()
    } else {
        pal.border()
    };

    let search_text = if app.input_mode == InputMode::Editing {
        let query = &app.query.value;
        let cursor = app.query.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.query.value.is_empty() {
        "⌕ Type / to search...".to_string()
    } else {
        format!("⌕ {}", app.query.value)
    };

    let search_box = Paragraph::new(search_text)
        .style(if app.input_mode == InputMode::Editing {
            pal.input().fg(pal.primary)
        } else {
            pal.input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(search_style)
                .title(Span::styled(" SEARCH ", pal.title())),
        );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Render the inline validation error or transient notice
fn render_message_line(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let message = app
        .notice
        .as_deref()
        .or_else(|| app.query.validation_error());

    if let Some(msg) = message {
        let line = Paragraph::new(Span::styled(msg, pal.error())).alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}

/// Render the result area for the current lookup status
fn render_result(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    match &app.status {
        LookupStatus::Idle => {
            let hint = Paragraph::new("Definitions appear here as you type")
                .style(pal.dimmed())
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
        LookupStatus::Loading => {
            let loading = Paragraph::new("⟳ Looking up...")
                .style(pal.loading())
                .alignment(Alignment::Center);
            frame.render_widget(loading, area);
        }
        LookupStatus::Failed(reason) => {
            let error = Paragraph::new(reason.as_str())
                .style(pal.error())
                .alignment(Alignment::Center);
            frame.render_widget(error, area);
        }
        LookupStatus::Ready(entry) => render_card(frame, area, entry, pal),
    }
}

/// Render the definition card
fn render_card(frame: &mut Frame, area: Rect, entry: &WordEntry, pal: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pal.border())
        .title(Span::styled(" DEFINITION ", pal.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        entry.word.clone(),
        pal.headword(),
    ))];

    if let Some(phonetic) = &entry.phonetic {
        lines.push(Line::from(Span::styled(phonetic.clone(), pal.phonetic())));
    }

    for meaning in &entry.meanings {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(meaning.part_of_speech.clone(), pal.part_of_speech()),
            Span::styled(": ", pal.dimmed()),
            Span::styled(meaning.definition.clone(), pal.body()),
        ]));
        if let Some(example) = &meaning.example {
            lines.push(Line::from(Span::styled(
                format!("  “{}”", example),
                pal.dimmed(),
            )));
        }
    }

    lines.push(Line::from(""));
    if entry.has_audio() {
        lines.push(Line::from(vec![
            Span::styled("♪ ", pal.audio()),
            Span::styled("Pronunciation available", pal.audio()),
            Span::styled("  p:play", pal.keybind()),
        ]));
    } else {
        lines.push(Line::from(Span::styled("No audio available", pal.dimmed())));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(card, inner);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, pal: &Palette) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            ratatui::style::Style::default()
                .fg(pal.background)
                .bg(pal.primary),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            ratatui::style::Style::default()
                .fg(pal.background)
                .bg(pal.accent),
        ),
    };

    let theme_indicator = Span::styled(format!(" ◐ {} ", app.theme), pal.dimmed());

    let help = Span::styled(" q:quit  /:search  t:theme  p:play ", pal.dimmed());

    let status_line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        theme_indicator,
        Span::raw(" │ "),
        help,
    ]);

    let status = Paragraph::new(status_line).style(pal.status_bar());
    frame.render_widget(status, area);
}
