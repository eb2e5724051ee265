use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::App;

const PROMPT: &str = "❯ ";

impl App {
    /// Render the whole widget: query bar, article list, key hints.
    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        let [query_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_query_bar(frame, query_area);
        self.draw_articles(frame, list_area);
        self.draw_hints(frame, hint_area);
    }

    fn draw_query_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut block = Block::bordered().title("Article Search");
        let counter = self.counter_text();
        if !counter.is_empty() {
            block = block.title_top(
                Line::from(Span::styled(counter, self.theme.counter)).right_aligned(),
            );
        }

        let input_line = Line::from(vec![
            Span::styled(PROMPT, self.theme.prompt),
            Span::raw(self.input.text().to_string()),
        ]);
        frame.render_widget(Paragraph::new(input_line).block(block), area);

        let cursor_x = area.x
            + 1
            + PROMPT.width() as u16
            + self.input.cursor_column().min(u16::MAX as usize) as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }

    fn draw_articles(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let width = area.width.saturating_sub(1) as usize;
        let (lines, placements) = self.build_document(width);

        self.viewport_height = area.height as usize;
        self.document_height = lines.len();
        self.resolve_pending_scroll(&placements);
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(lines).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_hints(&self, frame: &mut Frame<'_>, area: Rect) {
        let hints = Line::from(Span::styled(
            " type to search · enter next · backtab prev · ctrl-u clear · ↑/↓ scroll · esc quit",
            self.theme.hint,
        ));
        frame.render_widget(Paragraph::new(hints), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    use crate::dataset;
    use crate::search::{Direction, SearchEvent};

    use super::super::state::App;

    fn render(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        terminal
    }

    #[test]
    fn empty_query_renders_all_titles_unhighlighted() {
        let mut app = App::new(dataset::builtin());
        let terminal = render(&mut app, 90, 120);
        let view = terminal.backend().to_string();
        assert!(view.contains("Article Search"));
        assert!(view.contains("Introduction to React"));
        assert!(view.contains("2024-01-15"));

        let highlight_bg = app.theme.highlight.bg;
        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.style().bg == highlight_bg);
        assert!(!highlighted, "no cell should carry the highlight style");
    }

    #[test]
    fn matches_are_highlighted_and_counted() {
        let mut app = App::new(dataset::builtin());
        app.set_initial_query("react".to_string());
        let terminal = render(&mut app, 90, 120);
        let view = terminal.backend().to_string();
        let total = app.search.total_matches();
        assert!(view.contains(&format!("match 1/{total}")));

        let highlight_bg = app.theme.highlight.bg;
        assert_eq!(highlight_bg, Some(Color::Rgb(250, 204, 21)));
        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.style().bg == highlight_bg);
        assert!(highlighted, "matched text should carry the highlight style");
    }

    #[test]
    fn no_match_query_shows_the_empty_counter() {
        let mut app = App::new(dataset::builtin());
        app.set_initial_query("zzzz".to_string());
        let terminal = render(&mut app, 90, 40);
        let view = terminal.backend().to_string();
        assert!(view.contains("no matches"));
    }

    #[test]
    fn navigation_scrolls_the_last_record_into_a_small_viewport() {
        let mut app = App::new(dataset::builtin());
        app.set_initial_query("router".to_string());
        // First draw establishes the viewport; the scroll effect queued by
        // the navigation is applied on the next draw.
        render(&mut app, 90, 12);
        app.apply_event(SearchEvent::Navigate(Direction::Next));
        let terminal = render(&mut app, 90, 12);
        let view = terminal.backend().to_string();
        assert!(view.contains("React Router"));
    }
}
