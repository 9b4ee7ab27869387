//! Ratatui widgets for the drawer screen.

pub mod drawer_panel;
pub mod form_input;
pub mod snackbar;
pub mod top_bar;

pub use drawer_panel::DrawerPanel;
pub use form_input::FormInput;
pub use snackbar::Snackbar;
pub use top_bar::TopBar;
