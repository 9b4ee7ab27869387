use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use tui_textarea::TextArea;

/// Single-line text field, the body of the screen.
///
/// Wraps a `TextArea` for editing (cursor movement, deletion, word ops);
/// Enter is swallowed to keep the field single-line.
pub struct FormInput {
    textarea: TextArea<'static>,
}

impl FormInput {
    pub fn new(label: impl Into<String>) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(Block::default().borders(Borders::ALL).title(label.into()));
        textarea.set_cursor_line_style(Style::default());
        Self { textarea }
    }

    /// Feed a key into the field. Returns true if the text changed.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Enter {
            return false;
        }
        self.textarea.input(KeyEvent::new(code, modifiers))
    }

    /// Current field contents (always a single line).
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        (&self.textarea).render(area, buf);
    }
}
