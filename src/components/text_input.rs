//! A focusable single-line text input.
//!
//! Supports cursor movement, character insertion/deletion, and placeholder
//! text. The cursor position is tracked as a byte offset into the value
//! string; all cursor operations are char-boundary safe.

use crossterm::style::Color;

use crate::event::input::Key;
use crate::render::strip::{CellStyle, Strip};

// ---------------------------------------------------------------------------
// TextInput
// ---------------------------------------------------------------------------

/// A single-line text field with cursor and placeholder.
pub struct TextInput {
    value: String,
    placeholder: String,
    cursor_position: usize,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            cursor_position: 0,
        }
    }

    /// Set the placeholder text (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_position = self.value.len();
        self
    }

    /// Return the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.value.len();
    }

    /// Return the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Handle an editing key. Returns `true` if the value changed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(ch) => {
                self.insert_char(ch);
                true
            }
            Key::Backspace => self.delete_char(),
            Key::Delete => self.delete_forward(),
            Key::Left => {
                self.move_cursor_left();
                false
            }
            Key::Right => {
                self.move_cursor_right();
                false
            }
            Key::Home => {
                self.cursor_position = 0;
                false
            }
            Key::End => {
                self.cursor_position = self.value.len();
                false
            }
            _ => false,
        }
    }

    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace). Returns `true`
    /// if a character was removed.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor_position);
        self.cursor_position = prev;
        true
    }

    /// Delete the character after the cursor (delete forward). Returns
    /// `true` if a character was removed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor_position >= self.value.len() {
            return false;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor_position..next);
        true
    }

    /// Move the cursor left by one character.
    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    /// Move the cursor right by one character.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    /// Render the input as one strip of exactly `width` cells at row `y`.
    ///
    /// An empty value shows the placeholder dimmed. When focused, the cell
    /// at the cursor renders in reverse video.
    pub fn render(&self, y: i32, width: i32, focused: bool) -> Strip {
        let base = CellStyle::new().fg(Color::White).underline();
        let mut strip = Strip::new(y, 0);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            strip.push_str(&self.placeholder, base.dim());
        } else {
            let cursor_char_idx = self.value[..self.cursor_position].chars().count();
            for (i, ch) in self.value.chars().enumerate() {
                let style = if focused && i == cursor_char_idx {
                    base.reverse()
                } else {
                    base
                };
                strip.push(ch, style);
            }
            if focused && cursor_char_idx == self.value.chars().count() {
                strip.push(' ', base.reverse());
            }
        }
        strip.fill(width, base);
        strip
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Find the byte offset of the previous character boundary.
    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Find the byte offset of the next character boundary.
    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(strip: &Strip) -> String {
        strip.cells.iter().map(|c| c.ch).collect()
    }

    // ── Editing ──────────────────────────────────────────────────────

    #[test]
    fn insert_and_delete() {
        let mut input = TextInput::new();
        input.insert_char('A');
        input.insert_char('B');
        input.insert_char('C');
        assert_eq!(input.value(), "ABC");
        assert!(input.delete_char());
        assert_eq!(input.value(), "AB");
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.delete_char());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn delete_forward() {
        let mut input = TextInput::new().with_value("abc");
        input.move_cursor_left();
        assert!(input.delete_forward());
        assert_eq!(input.value(), "ab");
        assert!(!input.delete_forward());
    }

    #[test]
    fn cursor_movement_is_char_boundary_safe() {
        let mut input = TextInput::new().with_value("aé b");
        input.move_cursor_left(); // before 'b'
        input.move_cursor_left(); // before ' '
        input.move_cursor_left(); // before 'é'
        input.insert_char('x');
        assert_eq!(input.value(), "axé b");
    }

    #[test]
    fn handle_key_reports_value_changes() {
        let mut input = TextInput::new();
        assert!(input.handle_key(Key::Char('a')));
        assert!(!input.handle_key(Key::Left));
        assert!(!input.handle_key(Key::Home));
        assert!(input.handle_key(Key::Backspace) || input.value() == "a");
    }

    #[test]
    fn home_and_end_keys() {
        let mut input = TextInput::new().with_value("hello");
        input.handle_key(Key::Home);
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(Key::End);
        assert_eq!(input.cursor_position(), 5);
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn renders_value_padded_to_width() {
        let input = TextInput::new().with_value("hi");
        let strip = input.render(0, 10, false);
        assert_eq!(strip.width(), 10);
        assert_eq!(text_of(&strip).trim_end(), "hi");
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let input = TextInput::new().with_placeholder("type here");
        let strip = input.render(0, 20, false);
        assert!(text_of(&strip).starts_with("type here"));
        assert!(strip.cells[0].style.dim);
    }

    #[test]
    fn focused_cursor_is_reverse_video() {
        let input = TextInput::new().with_value("ab");
        let strip = input.render(0, 10, true);
        // Cursor sits after the value: cell index 2.
        assert!(strip.cells[2].style.reverse);
        assert!(!strip.cells[0].style.reverse);
    }
}
