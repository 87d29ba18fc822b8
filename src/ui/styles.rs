use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Cyan;
const RUNNING: Color = Color::Magenta;
const MUTED: Color = Color::DarkGray;

pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Row under the cursor
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "▶" marker in front of the selected task
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// RUNNING badge and live clock
pub fn running_style() -> Style {
    Style::default().fg(RUNNING).add_modifier(Modifier::BOLD)
}

pub fn idle_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn modal_bg_style() -> Style {
    Style::default().bg(MUTED).fg(Color::White)
}

pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding bar and empty-state hints
pub fn hint_style() -> Style {
    Style::default().fg(MUTED)
}

/// Share bars in the distribution pane
pub fn bar_style() -> Style {
    Style::default().fg(RUNNING)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn info_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Last-active date column
pub fn date_style() -> Style {
    Style::default().fg(Color::Blue)
}
