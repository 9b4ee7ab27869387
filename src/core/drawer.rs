//! Drawer open/close state machine.
//!
//! Two states, Closed and Open, starting Closed. Transitions: the menu
//! button opens, selecting a row closes (and yields a selection event), and
//! a back signal closes while open. Nothing else mutates the state.

use crate::core::back::BackOutcome;
use crate::core::menu::{menu_items, MenuItem};
use crate::core::observable::{ObservableValue, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Emitted exactly once per completed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub label: String,
}

/// Owns the drawer state and the highlighted row while the drawer is open.
///
/// The state cell is private: every mutation goes through the three intents
/// below, so observers only ever see real transitions.
pub struct DrawerController {
    state: ObservableValue<DrawerState>,
    selected_index: usize,
}

impl DrawerController {
    pub fn new() -> Self {
        Self {
            state: ObservableValue::new(DrawerState::Closed),
            selected_index: 0,
        }
    }

    pub fn state(&self) -> DrawerState {
        *self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state() == DrawerState::Open
    }

    /// Observe state transitions. Callbacks fire only on actual changes.
    pub fn on_state_change(
        &mut self,
        callback: impl FnMut(&DrawerState) + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    /// Open the drawer. Idempotent when already open.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.selected_index = 0;
        self.state.set(DrawerState::Open);
    }

    /// Highlighted row while open.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn select_next(&mut self) {
        let len = menu_items().len();
        if self.is_open() && len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = menu_items().len();
        if self.is_open() && len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Commit the menu item at `index`: closes the drawer and yields the
    /// selection event. No-op (None) while closed or for an out-of-range
    /// index.
    pub fn select_item(&mut self, index: usize) -> Option<SelectionEvent> {
        if !self.is_open() {
            return None;
        }
        let item: &MenuItem = menu_items().get(index)?;
        self.state.set(DrawerState::Closed);
        Some(SelectionEvent {
            label: item.label.to_string(),
        })
    }

    /// Commit the currently highlighted item.
    pub fn select_current(&mut self) -> Option<SelectionEvent> {
        self.select_item(self.selected_index)
    }

    /// React to the host's back signal: while open, consume it and close;
    /// while closed, decline so the host's default (screen exit) runs.
    pub fn handle_back(&mut self) -> BackOutcome {
        if self.is_open() {
            self.state.set(DrawerState::Closed);
            BackOutcome::Consumed
        } else {
            BackOutcome::NotConsumed
        }
    }
}

impl Default for DrawerController {
    fn default() -> Self {
        Self::new()
    }
}
