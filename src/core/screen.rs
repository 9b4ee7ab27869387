//! The single drawer screen and its mount lifecycle.
//!
//! Mounting acquires a back-handler registration on the host's dispatcher;
//! unmounting drops it. The handler stays registered for the whole mounted
//! lifetime and gates internally on the drawer state — closing an
//! already-closed drawer is a safe no-op, so no enable/disable toggling is
//! needed.

use crate::core::back::{BackDispatcher, BackOutcome, BackRegistration};
use crate::core::drawer::{DrawerController, DrawerState, SelectionEvent};
use crate::core::form::FormInputState;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// What the host environment provides to a screen. The back dispatcher is
/// required for mounting; a host without one cannot run this screen.
pub struct Host {
    back: Option<BackDispatcher>,
}

impl Host {
    pub fn new() -> Self {
        Self {
            back: Some(BackDispatcher::new()),
        }
    }

    /// A host that provides no back dispatcher. Screen mounting must fail
    /// against this rather than run with undefined interception behavior.
    pub fn without_back_dispatcher() -> Self {
        Self { back: None }
    }

    pub fn back_dispatcher(&self) -> Option<&BackDispatcher> {
        self.back.as_ref()
    }

    /// Deliver a back signal to whatever is registered.
    pub fn dispatch_back(&self) -> BackOutcome {
        match &self.back {
            Some(dispatcher) => dispatcher.dispatch(),
            None => BackOutcome::NotConsumed,
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

/// The navigation-drawer screen: drawer controller plus the text form.
///
/// The controller sits behind `Rc<RefCell<..>>` because the back handler
/// registered on the host needs to reach it from outside the screen's
/// borrow.
pub struct DrawerScreen {
    controller: Rc<RefCell<DrawerController>>,
    form: FormInputState,
    back_registration: Option<BackRegistration>,
}

impl DrawerScreen {
    pub fn new() -> Self {
        let mut controller = DrawerController::new();
        controller.on_state_change(|state| {
            tracing::debug!("drawer state -> {:?}", state);
        });

        let mut form = FormInputState::new("");
        form.on_change(|text| {
            tracing::trace!("form text -> {:?}", text);
        });

        Self {
            controller: Rc::new(RefCell::new(controller)),
            form,
            back_registration: None,
        }
    }

    /// Attach to the host: registers the back handler. Fails fast when the
    /// host provides no back dispatcher.
    pub fn mount(&mut self, host: &Host) -> Result<()> {
        let dispatcher = host
            .back_dispatcher()
            .context("host provided no back-navigation dispatcher")?;

        let controller = Rc::clone(&self.controller);
        self.back_registration =
            Some(dispatcher.register(Box::new(move || controller.borrow_mut().handle_back())));
        tracing::info!("drawer screen mounted");
        Ok(())
    }

    /// Detach from the host. The back handler is removed synchronously
    /// before this returns.
    pub fn unmount(&mut self) {
        if self.back_registration.take().is_some() {
            tracing::info!("drawer screen unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.back_registration.is_some()
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.controller.borrow().state()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    pub fn open_drawer(&self) {
        self.controller.borrow_mut().open();
    }

    pub fn drawer_selected_index(&self) -> usize {
        self.controller.borrow().selected_index()
    }

    pub fn drawer_select_next(&self) {
        self.controller.borrow_mut().select_next();
    }

    pub fn drawer_select_previous(&self) {
        self.controller.borrow_mut().select_previous();
    }

    pub fn drawer_select_current(&self) -> Option<SelectionEvent> {
        self.controller.borrow_mut().select_current()
    }

    pub fn drawer_select_at(&self, index: usize) -> Option<SelectionEvent> {
        self.controller.borrow_mut().select_item(index)
    }

    pub fn form(&self) -> &FormInputState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInputState {
        &mut self.form
    }
}

impl Default for DrawerScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DrawerScreen {
    fn drop(&mut self) {
        // Teardown must not leak a callback into the host's dispatch chain.
        self.unmount();
    }
}
