//! Named style sets for the terminal UI.

mod builtins;

use ratatui::style::Style;

pub use builtins::default_theme;

/// Styles applied to the widget's visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Style for matched substrings inside titles and descriptions.
    pub highlight: Style,
    /// Style for article titles.
    pub title: Style,
    /// Style for article dates.
    pub date: Style,
    /// Style for the query prompt.
    pub prompt: Style,
    /// Style for the occurrence counter.
    pub counter: Style,
    /// Style for the footer key hints.
    pub hint: Style,
    /// Style for the marker in front of the focused record's title.
    pub focus_marker: Style,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Look up a built-in theme by name.
pub fn by_name(name: &str) -> Option<Theme> {
    builtins::REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, theme)| *theme)
}

/// Names of all built-in themes, in registration order.
pub fn names() -> Vec<&'static str> {
    builtins::REGISTRY.iter().map(|(name, _)| *name).collect()
}
