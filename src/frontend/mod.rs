//! Frontend layer
//!
//! Terminal setup/teardown, event translation, and the ratatui widgets that
//! render the drawer screen. Reads core state, never mutates it.

pub mod events;
pub mod tui;
pub mod widgets;

pub use events::FrontendEvent;
pub use tui::TuiFrontend;
