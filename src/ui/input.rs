use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// A single-line query editor with a movable insertion cursor.
///
/// Keeps the cursor as a char offset so editing stays correct for
/// multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    pub fn new(initial: String) -> Self {
        let cursor = initial.chars().count();
        Self {
            text: initial,
            cursor,
        }
    }

    /// The current query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display column of the cursor, for terminal cursor placement.
    pub fn cursor_column(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    /// Empty the editor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply a key event. Returns `true` when the text changed (cursor-only
    /// movement returns `false`).
    pub fn handle(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.text.chars().count() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                false
            }
            _ => false,
        }
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(input: &mut QueryInput, text: &str) {
        for ch in text.chars() {
            assert!(input.handle(press(KeyCode::Char(ch))));
        }
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = QueryInput::default();
        type_text(&mut input, "ract");
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Left));
        type_text(&mut input, "e");
        assert_eq!(input.text(), "react");
    }

    #[test]
    fn backspace_removes_before_the_cursor() {
        let mut input = QueryInput::new("react".to_string());
        assert!(input.handle(press(KeyCode::Backspace)));
        assert_eq!(input.text(), "reac");

        input.handle(press(KeyCode::Home));
        assert!(!input.handle(press(KeyCode::Backspace)));
        assert_eq!(input.text(), "reac");
    }

    #[test]
    fn delete_removes_under_the_cursor() {
        let mut input = QueryInput::new("react".to_string());
        assert!(!input.handle(press(KeyCode::Delete)));

        input.handle(press(KeyCode::Home));
        assert!(input.handle(press(KeyCode::Delete)));
        assert_eq!(input.text(), "eact");
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut input = QueryInput::default();
        let changed = input.handle(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(!changed);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn multibyte_editing_keeps_offsets_straight() {
        let mut input = QueryInput::default();
        type_text(&mut input, "héllo");
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Left));
        assert!(input.handle(press(KeyCode::Backspace)));
        assert_eq!(input.text(), "éllo");
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut input = QueryInput::new("react".to_string());
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_column(), 0);
    }
}
