use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::search::{Direction, SearchEvent};

use super::state::{App, SearchOutcome};

impl App {
    /// Handle one key press. Returns an outcome when the user is done.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Some(self.outcome())),
                KeyCode::Char('u') => {
                    self.input.clear();
                    self.apply_event(SearchEvent::Clear);
                    return Ok(None);
                }
                KeyCode::Char('n') => {
                    self.apply_event(SearchEvent::Navigate(Direction::Next));
                    return Ok(None);
                }
                KeyCode::Char('p') => {
                    self.apply_event(SearchEvent::Navigate(Direction::Prev));
                    return Ok(None);
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => return Ok(Some(self.outcome())),
            KeyCode::Enter => self.apply_event(SearchEvent::Navigate(Direction::Next)),
            KeyCode::BackTab => self.apply_event(SearchEvent::Navigate(Direction::Prev)),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height.max(1) as isize)),
            KeyCode::PageDown => self.scroll_by(self.viewport_height.max(1) as isize),
            _ => {
                if self.input.handle(key) {
                    self.apply_event(SearchEvent::Input(self.input.text().to_string()));
                }
            }
        }
        Ok(None)
    }
}
