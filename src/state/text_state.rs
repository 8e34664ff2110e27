//! TextInputState - Single-Line Text Editing
//!
//! The cursor is a char index, never a byte index.

/// Convert a char index into a byte index; past the end maps to `s.len()`
fn byte_idx(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

/// Value and cursor of a single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    value: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Replace the value and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(byte_idx(&self.value, self.cursor))
    }

    /// Insert text at the cursor; control characters are dropped
    pub fn insert_str(&mut self, text: &str) -> bool {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return false;
        }
        let at = byte_idx(&self.value, self.cursor);
        self.value.insert_str(at, &text);
        self.cursor += text.chars().count();
        true
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = byte_idx(&self.value, self.cursor - 1);
        let end = byte_idx(&self.value, self.cursor);
        self.value.drain(start..end);
        self.cursor -= 1;
        true
    }

    /// Delete the char after the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let start = byte_idx(&self.value, self.cursor);
        let end = byte_idx(&self.value, self.cursor + 1);
        self.value.drain(start..end);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = TextInputState::new("helo");
        input.move_left();
        assert!(input.insert_str("l"));
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 4);

        assert!(input.backspace());
        assert_eq!(input.value(), "helo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn cursor_is_char_indexed() {
        let mut input = TextInputState::new("héllo");
        input.home();
        input.move_right();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("hé", "llo"));
        assert!(input.backspace());
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInputState::new("abc");
        input.home();
        assert!(input.cursor_at_start());
        assert!(!input.backspace());
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn delete_forward() {
        let mut input = TextInputState::new("abc");
        input.home();
        assert!(input.delete());
        assert_eq!(input.value(), "bc");
        input.end();
        assert!(!input.delete());
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut input = TextInputState::default();
        assert!(!input.insert_str("\n"));
        assert!(input.is_empty());
    }
}
