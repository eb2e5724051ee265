use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub(super) const REGISTRY: &[(&str, Theme)] =
    &[("slate", SLATE), ("light", LIGHT), ("solarized", SOLARIZED)];

/// The theme used when nothing else is configured.
pub fn default_theme() -> Theme {
    SLATE
}

const SLATE: Theme = Theme {
    highlight: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(250, 204, 21)),
    title: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    date: Style::new().fg(Color::DarkGray),
    prompt: Style::new().fg(Color::LightCyan),
    counter: Style::new().fg(Color::Rgb(250, 204, 21)),
    hint: Style::new().fg(Color::DarkGray),
    focus_marker: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
    highlight: Style::new()
        .fg(Color::Rgb(250, 250, 250))
        .bg(Color::Rgb(180, 80, 10)),
    title: Style::new()
        .fg(Color::Rgb(30, 30, 30))
        .add_modifier(Modifier::BOLD),
    date: Style::new().fg(Color::Gray),
    prompt: Style::new().fg(Color::Blue),
    counter: Style::new().fg(Color::Rgb(180, 80, 10)),
    hint: Style::new().fg(Color::Gray),
    focus_marker: Style::new()
        .fg(Color::Rgb(180, 80, 10))
        .add_modifier(Modifier::BOLD),
};

const SOLARIZED: Theme = Theme {
    highlight: Style::new()
        .fg(Color::Rgb(0, 43, 54))
        .bg(Color::Rgb(181, 137, 0)),
    title: Style::new()
        .fg(Color::Rgb(147, 161, 161))
        .add_modifier(Modifier::BOLD),
    date: Style::new().fg(Color::Rgb(88, 110, 117)),
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    counter: Style::new().fg(Color::Rgb(181, 137, 0)),
    hint: Style::new().fg(Color::Rgb(88, 110, 117)),
    focus_marker: Style::new()
        .fg(Color::Rgb(203, 75, 22))
        .add_modifier(Modifier::BOLD),
};
