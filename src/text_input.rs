//! Multi-line text buffer with a byte-offset cursor.
//!
//! Shared by every editable surface: list inputs, the note editor and the
//! bookmark form. The cursor always sits on a char boundary.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole content and moves the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Replaces content and cursor at once. The cursor is clamped and snapped
    /// back to the previous char boundary.
    pub fn set_text_and_cursor(&mut self, text: String, cursor: usize) {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.text = text;
        self.cursor = cursor;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Moves to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// Moves to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Byte offset where the cursor's line begins.
    pub fn line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Text of the cursor's line up to the cursor.
    pub fn line_before_cursor(&self) -> &str {
        &self.text[self.line_start()..self.cursor]
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let col = self.line_before_cursor().chars().count();
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_handle_multibyte_chars() {
        let mut input = TextInput::new();
        input.insert_str("a• ");
        input.insert_char('b');
        assert_eq!(input.text(), "a• b");

        input.backspace();
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn home_and_end_stay_on_current_line() {
        let mut input = TextInput::with_text("first\nsecond\nthird");
        input.move_left();
        input.move_left();
        input.move_home();
        assert_eq!(input.cursor(), "first\nsecond\n".len());
        assert_eq!(input.cursor_position(), (2, 0));

        input.move_left();
        input.move_home();
        input.move_end();
        assert_eq!(input.line_before_cursor(), "second");
        assert_eq!(input.cursor_position(), (1, 6));
    }

    #[test]
    fn set_text_and_cursor_snaps_to_char_boundary() {
        let mut input = TextInput::new();
        input.set_text_and_cursor("•x".to_string(), 1);
        assert_eq!(input.cursor(), 0);

        input.set_text_and_cursor("ab".to_string(), 99);
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = TextInput::with_text("ab");
        input.delete();
        assert_eq!(input.text(), "ab");
        input.move_left();
        input.delete();
        assert_eq!(input.text(), "a");
        assert_eq!(input.line_count(), 1);
    }
}
