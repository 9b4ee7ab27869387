//! Core behavior layer
//!
//! Drawer state machine, observable state holders, and the back-signal
//! dispatch chain. NO imports from frontend/ or rendering code: frontends
//! read this state and render it, and feed user intents back in.

pub mod back;
pub mod drawer;
pub mod form;
pub mod menu;
pub mod observable;
pub mod screen;

pub use back::{BackDispatcher, BackOutcome, BackRegistration};
pub use drawer::{DrawerController, DrawerState, SelectionEvent};
pub use form::FormInputState;
pub use menu::{menu_items, MenuIcon, MenuItem};
pub use observable::{ObservableValue, SubscriptionId};
pub use screen::{DrawerScreen, Host};
