use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};
use std::time::{Duration, Instant};

/// Transient one-line status message, shown after a menu selection.
pub struct Snackbar {
    message: Option<(String, Instant)>, // (text, deadline)
    ttl: Duration,
}

impl Snackbar {
    pub fn new(ttl: Duration) -> Self {
        Self { message: None, ttl }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now() + self.ttl));
    }

    /// Message still on display, if any.
    pub fn current(&self) -> Option<&str> {
        self.message_at(Instant::now())
    }

    fn message_at(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((text, deadline)) if now < *deadline => Some(text),
            _ => None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if let Some(text) = self.current() {
            Paragraph::new(format!(" {text} "))
                .style(Style::default().fg(Color::Black).bg(Color::Gray))
                .render(area, buf);
        }
    }
}
