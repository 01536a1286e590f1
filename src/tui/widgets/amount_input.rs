//! Amount input widget
//!
//! A labelled single-line field. The value is right-aligned, with a cursor
//! cell after it while focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A labelled input field for amounts or short text
#[derive(Debug, Clone, Default)]
pub struct AmountInput {
    /// Current text content
    pub content: String,
    /// Whether the input is focused
    pub focused: bool,
    /// Shown while empty and unfocused
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Align the value to the right edge
    pub right_aligned: bool,
}

impl AmountInput {
    /// Create a new input
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

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Right-align the value
    pub fn right_aligned(mut self, right_aligned: bool) -> Self {
        self.right_aligned = right_aligned;
        self
    }
}

impl Widget for AmountInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            (self.label.chars().count() + 2) as u16
        };

        if label_width > 0 {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));
        }

        let input_start = area.x + label_width.min(area.width);
        let input_width = area.width.saturating_sub(label_width);
        if input_width == 0 {
            return;
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let (text, style) = if showing_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        // one cell is kept for the cursor
        let cursor_cells = u16::from(self.focused);
        let text_width = (text.chars().count() as u16).min(input_width.saturating_sub(cursor_cells));
        let text_x = if self.right_aligned {
            input_start + input_width - cursor_cells - text_width
        } else {
            input_start
        };

        buf.set_stringn(text_x, area.y, text, text_width as usize, style);

        if self.focused {
            buf.set_string(
                text_x + text_width,
                area.y,
                " ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }
}
