use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Menu button glyph shown at the left edge of the bar.
const MENU_GLYPH: &str = "☰";

/// Width of the clickable menu-button region (glyph plus padding).
const MENU_BUTTON_WIDTH: u16 = 3;

/// Top app bar: menu button plus title.
pub struct TopBar {
    title: String,
}

impl TopBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Check if a mouse click at (x, y) hits the menu button.
    pub fn check_menu_click(&self, x: u16, y: u16, area: Rect) -> bool {
        y == area.y && x >= area.x && x < area.x + MENU_BUTTON_WIDTH.min(area.width)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
        let line = Line::from(vec![
            Span::styled(
                format!(" {MENU_GLYPH} "),
                bar_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.title.clone(), bar_style),
        ]);
        Paragraph::new(line).style(bar_style).render(area, buf);
    }
}
