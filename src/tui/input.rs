//! Single-line text field with a cursor.
//!
//! Backs the custom delta entry and the rename prompt.

/// A text input buffer with cursor positioning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `text`, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((prev, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((prev, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Take the content out, resetting the field.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut field = TextField::new();
        field.insert_char('1');
        field.insert_char('2');
        assert_eq!(field.text(), "12");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut field = TextField::with_text("Zoë");
        field.backspace();
        assert_eq!(field.text(), "Zo");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn test_insert_mid_text() {
        let mut field = TextField::with_text("Jce");
        field.move_left();
        field.move_left();
        field.insert_char('a');
        assert_eq!(field.text(), "Jace");

        field.move_right();
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor_position(), 4);
    }

    #[test]
    fn test_take_resets() {
        let mut field = TextField::with_text("abc");
        assert_eq!(field.take(), "abc");
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor_position(), 0);

        field.insert_char('x');
        field.clear();
        assert_eq!(field.text(), "");
    }
}
