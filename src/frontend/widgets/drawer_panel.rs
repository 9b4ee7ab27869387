use crate::core::MenuItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Colored header block at the top of the drawer, in rows.
const HEADER_ROWS: u16 = 3;

/// The slide-in drawer panel. Rendered as a left-side overlay while the
/// drawer is open.
pub struct DrawerPanel {
    width_percent: u16,
}

impl DrawerPanel {
    pub fn new(width_percent: u16) -> Self {
        Self {
            width_percent: width_percent.clamp(10, 90),
        }
    }

    /// Panel rectangle within the body area (everything below the top bar).
    pub fn area(&self, body: Rect) -> Rect {
        let width = (u32::from(body.width) * u32::from(self.width_percent) / 100) as u16;
        Rect::new(body.x, body.y, width.max(12).min(body.width), body.height)
    }

    /// Check if a mouse click at (x, y) hits a menu row.
    /// Returns the index of the clicked item if any.
    pub fn check_click(&self, x: u16, y: u16, area: Rect, items: &[MenuItem]) -> Option<usize> {
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }

        let relative_y = (y - area.y) as usize;
        let first_item_row = 1 + HEADER_ROWS as usize; // top border + header

        // Border takes 1 row at top and bottom
        if relative_y < first_item_row || relative_y >= area.height as usize - 1 {
            return None;
        }

        let item_index = relative_y - first_item_row;
        if item_index < items.len() {
            Some(item_index)
        } else {
            None
        }
    }

    /// Render the panel: header block, then one row per menu item.
    pub fn render(&self, area: Rect, buf: &mut Buffer, items: &[MenuItem], selected: usize) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Header block, the drawer's colored banner
        let header = Rect {
            height: HEADER_ROWS.min(inner.height),
            ..inner
        };
        buf.set_style(header, Style::default().bg(Color::Blue));

        for (idx, item) in items.iter().enumerate() {
            let row_y = inner.y + HEADER_ROWS + idx as u16;
            if row_y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, row_y, inner.width, 1);

            let style = if idx == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", item.icon.glyph()), style),
                Span::styled(item.label, style),
            ]);
            Paragraph::new(line).style(style).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu_items;

    #[test]
    fn test_area_respects_width_percent() {
        let panel = DrawerPanel::new(40);
        let body = Rect::new(0, 1, 100, 30);
        let area = panel.area(body);

        assert_eq!(area.x, 0);
        assert_eq!(area.y, 1);
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 30);
    }

    #[test]
    fn test_check_click_maps_rows_to_items() {
        let panel = DrawerPanel::new(40);
        let area = Rect::new(0, 1, 30, 20);
        let items = menu_items();

        // Top border and header rows are not items
        assert_eq!(panel.check_click(5, 1, area, items), None);
        assert_eq!(panel.check_click(5, 2, area, items), None);
        assert_eq!(panel.check_click(5, 4, area, items), None);

        // First item row sits below border + header
        assert_eq!(panel.check_click(5, 5, area, items), Some(0));
        assert_eq!(panel.check_click(5, 6, area, items), Some(1));
        assert_eq!(panel.check_click(5, 7, area, items), Some(2));

        // Past the last item
        assert_eq!(panel.check_click(5, 8, area, items), None);
    }

    #[test]
    fn test_check_click_outside_panel() {
        let panel = DrawerPanel::new(40);
        let area = Rect::new(0, 1, 30, 20);
        let items = menu_items();

        assert_eq!(panel.check_click(30, 5, area, items), None);
        assert_eq!(panel.check_click(5, 0, area, items), None);
        assert_eq!(panel.check_click(5, 21, area, items), None);
    }
}
