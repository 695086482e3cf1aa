//! Input handling module
//!
//! A single-line text-input buffer with its own cursor editing state.
//! The controller forwards every key here except the confirm and quit
//! signals, which it intercepts first.

use crossterm::event::{KeyCode, KeyEvent};

/// Live text-input line.
///
/// The cursor is a character index into the buffer, kept within
/// `0..=len` at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty input buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reset the buffer to empty with the cursor at the start.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle a keyboard event for ordinary text editing.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => {}
        }
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Delete the character under the cursor, if any.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
