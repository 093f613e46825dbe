//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and move the cursor to its end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(format!("{:>12}: ", self.label), label_style)];

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.focused {
            let before: String = self.content.chars().take(self.cursor).collect();
            let mut rest = self.content.chars().skip(self.cursor);
            let at = rest.next().unwrap_or(' ');
            let after: String = rest.collect();

            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                at.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        } else {
            spans.push(Span::styled(
                self.content.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_moves_cursor() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        input.insert('0');
        assert_eq!(input.value(), "12.50");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "2.50");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "2.5");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_content() {
        let mut input = TextInput::new();
        input.set_value("चाय");
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "चाxय");
        input.backspace();
        assert_eq!(input.value(), "चाय");
    }
}
