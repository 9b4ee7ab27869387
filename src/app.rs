//! App shell: routes frontend events into the screen and draws each frame.
//!
//! Key map: Esc is the host's back signal (unconsumed means screen exit),
//! F2 or a click on the menu button opens the drawer. While the drawer is
//! open it is modal: Up/Down move the highlight, Enter or a row click
//! selects. While closed, keys edit the form field. Ctrl+C / Ctrl+Q quit.

use crate::config::Config;
use crate::core::{menu_items, DrawerScreen, Host, SelectionEvent};
use crate::frontend::widgets::{DrawerPanel, FormInput, Snackbar, TopBar};
use crate::frontend::FrontendEvent;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use std::time::Duration;
use tracing::{debug, info};

/// Rectangles from the last draw, reused for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct ScreenLayout {
    top_bar: Rect,
    body: Rect,
    snackbar: Rect,
}

pub struct App {
    screen: DrawerScreen,
    top_bar: TopBar,
    drawer_panel: DrawerPanel,
    form_widget: FormInput,
    snackbar: Snackbar,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, screen: DrawerScreen) -> Self {
        Self {
            screen,
            top_bar: TopBar::new(config.ui.title.clone()),
            drawer_panel: DrawerPanel::new(config.ui.drawer_width_percent),
            form_widget: FormInput::new("Nama"),
            snackbar: Snackbar::new(Duration::from_secs(config.ui.snackbar_secs)),
            layout: ScreenLayout::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &DrawerScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut DrawerScreen {
        &mut self.screen
    }

    /// Selection message currently on display, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.snackbar.current()
    }

    pub fn handle_event(&mut self, event: FrontendEvent, host: &Host) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(code, modifiers, host),
            FrontendEvent::Mouse { kind, x, y } => self.handle_mouse(kind, x, y),
            // The next draw recomputes the layout from the frame area
            FrontendEvent::Resize { .. } => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, host: &Host) {
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Esc => {
                if !host.dispatch_back().is_consumed() {
                    info!("back signal unhandled, exiting screen");
                    self.should_quit = true;
                }
            }
            KeyCode::F(2) => self.screen.open_drawer(),
            _ if self.screen.is_drawer_open() => match code {
                KeyCode::Down => self.screen.drawer_select_next(),
                KeyCode::Up => self.screen.drawer_select_previous(),
                KeyCode::Enter => {
                    let event = self.screen.drawer_select_current();
                    self.on_selection(event);
                }
                _ => {}
            },
            _ => {
                if self.form_widget.handle_key(code, modifiers) {
                    let text = self.form_widget.text();
                    self.screen.form_mut().set_text(text);
                }
            }
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self.screen.is_drawer_open() {
            let area = self.drawer_panel.area(self.layout.body);
            if let Some(index) = self.drawer_panel.check_click(x, y, area, menu_items()) {
                let event = self.screen.drawer_select_at(index);
                self.on_selection(event);
            }
        } else if self.top_bar.check_menu_click(x, y, self.layout.top_bar) {
            self.screen.open_drawer();
        }
    }

    fn on_selection(&mut self, event: Option<SelectionEvent>) {
        if let Some(event) = event {
            debug!("menu item selected: {}", event.label);
            self.snackbar.show(format!("{} clicked", event.label));
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = compute_layout(frame.area());
        let buf = frame.buffer_mut();

        self.top_bar.render(self.layout.top_bar, buf);
        self.form_widget.render(form_area(self.layout.body), buf);
        self.snackbar.render(self.layout.snackbar, buf);

        if self.screen.is_drawer_open() {
            let area = self.drawer_panel.area(self.layout.body);
            self.drawer_panel.render(
                area,
                buf,
                menu_items(),
                self.screen.drawer_selected_index(),
            );
        }
    }
}

fn compute_layout(area: Rect) -> ScreenLayout {
    let [top_bar, body, snackbar] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenLayout {
        top_bar,
        body,
        snackbar,
    }
}

/// The form field sits near the top of the body with a little margin.
fn form_area(body: Rect) -> Rect {
    let width = body.width.saturating_sub(2).min(40);
    let height = 3.min(body.height);
    Rect::new(body.x + 1, body.y + 1, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawerState;

    fn mounted_app() -> (App, Host) {
        let host = Host::new();
        let mut screen = DrawerScreen::new();
        screen.mount(&host).unwrap();
        (App::new(&Config::default(), screen), host)
    }

    fn key(code: KeyCode) -> FrontendEvent {
        FrontendEvent::key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_closes_open_drawer_then_exits() {
        let (mut app, host) = mounted_app();

        app.handle_event(key(KeyCode::F(2)), &host);
        assert_eq!(app.screen().drawer_state(), DrawerState::Open);

        // First Esc is consumed by the drawer
        app.handle_event(key(KeyCode::Esc), &host);
        assert_eq!(app.screen().drawer_state(), DrawerState::Closed);
        assert!(!app.should_quit());

        // Second Esc falls through to the host default: exit
        app.handle_event(key(KeyCode::Esc), &host);
        assert!(app.should_quit());
    }

    #[test]
    fn test_enter_selects_highlighted_item() {
        let (mut app, host) = mounted_app();

        app.handle_event(key(KeyCode::F(2)), &host);
        app.handle_event(key(KeyCode::Down), &host);
        app.handle_event(key(KeyCode::Enter), &host);

        assert_eq!(app.screen().drawer_state(), DrawerState::Closed);
        assert_eq!(app.status_message(), Some("Favourite clicked"));
    }

    #[test]
    fn test_typing_edits_form_while_drawer_closed() {
        let (mut app, host) = mounted_app();

        app.handle_event(key(KeyCode::Char('h')), &host);
        app.handle_event(key(KeyCode::Char('i')), &host);
        assert_eq!(app.screen().form().text(), "hi");
    }

    #[test]
    fn test_typing_is_ignored_while_drawer_open() {
        let (mut app, host) = mounted_app();

        app.handle_event(key(KeyCode::F(2)), &host);
        app.handle_event(key(KeyCode::Char('x')), &host);
        assert_eq!(app.screen().form().text(), "");
        assert_eq!(app.screen().drawer_state(), DrawerState::Open);
    }

    #[test]
    fn test_mouse_drives_menu_button_and_drawer_rows() {
        let (mut app, host) = mounted_app();
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        // A draw pass records the layout used for hit-testing
        terminal.draw(|frame| app.draw(frame)).unwrap();
        app.handle_event(
            FrontendEvent::mouse(MouseEventKind::Down(MouseButton::Left), 1, 0),
            &host,
        );
        assert!(app.screen().is_drawer_open());

        // First drawer row sits below the top bar, panel border, and header
        terminal.draw(|frame| app.draw(frame)).unwrap();
        app.handle_event(
            FrontendEvent::mouse(MouseEventKind::Down(MouseButton::Left), 3, 5),
            &host,
        );
        assert_eq!(app.screen().drawer_state(), DrawerState::Closed);
        assert_eq!(app.status_message(), Some("Home clicked"));
    }

    #[test]
    fn test_quit_chord() {
        let (mut app, host) = mounted_app();
        app.handle_event(
            FrontendEvent::key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &host,
        );
        assert!(app.should_quit());
    }
}
