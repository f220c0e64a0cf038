//! Single-line text buffer with a cursor.

/// Text content plus a cursor kept on a char boundary.
///
/// Every mutating method returns whether anything changed, so callers can
/// skip change notifications for no-op edits (Backspace at the start, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    text: String,
    /// Byte offset into `text`
    cursor: usize,
}

impl TextEdit {
    /// Create a buffer with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
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

    /// Replace the whole text, placing the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.text;
        self.text = text;
        self.cursor = self.text.len();
        changed
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn left(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn right(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn end(&mut self) -> bool {
        let moved = self.cursor != self.text.len();
        self.cursor = self.text.len();
        moved
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_multibyte_text() {
        let mut edit = TextEdit::new("añb");
        assert!(edit.left());
        assert!(edit.backspace());
        assert_eq!(edit.text(), "ab");
        assert_eq!(edit.cursor(), 1);
        assert!(edit.insert('é'));
        assert_eq!(edit.text(), "aéb");
        assert_eq!(edit.cursor(), 3);
    }

    #[test]
    fn test_noop_edits_report_unchanged() {
        let mut edit = TextEdit::default();
        assert!(!edit.backspace());
        assert!(!edit.delete());
        assert!(!edit.left());
        assert!(!edit.right());
        assert!(!edit.home());
        assert!(!edit.end());
        assert!(!edit.set(""));
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut edit = TextEdit::new("kiwi");
        edit.home();
        assert!(edit.delete());
        assert_eq!(edit.text(), "iwi");
        assert_eq!(edit.cursor(), 0);
    }
}
