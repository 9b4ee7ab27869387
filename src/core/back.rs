//! Back-signal dispatch chain.
//!
//! The host (the event loop in `main.rs`) owns one [`BackDispatcher`]. A
//! mounted screen registers a handler on it; pressing Esc dispatches a back
//! signal through the chain. The handler decides whether to consume the
//! signal (close the drawer) or let the host's default behavior run
//! (exit the screen). Registrations are scoped: dropping the
//! [`BackRegistration`] guard removes the handler, so no stale callback can
//! fire after the owning screen is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What a back handler did with the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Signal handled; stop further back-handling.
    Consumed,
    /// Signal not handled; the host's default back behavior proceeds.
    NotConsumed,
}

impl BackOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, BackOutcome::Consumed)
    }
}

/// Handler invoked when a back signal is dispatched.
pub type BackCallback = Box<dyn FnMut() -> BackOutcome>;

struct DispatcherInner {
    /// Registration order; dispatch walks this most-recent-first.
    callbacks: Vec<(u64, BackCallback)>,
    next_id: u64,
}

/// The host's back-navigation dispatcher.
///
/// Cloning shares the same chain (the host hands clones to whoever needs to
/// register). Single-threaded; callbacks must not re-enter the dispatcher.
#[derive(Clone)]
pub struct BackDispatcher {
    inner: Rc<RefCell<DispatcherInner>>,
}

impl BackDispatcher {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DispatcherInner {
                callbacks: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Add a handler to the chain. The handler stays registered until the
    /// returned guard is dropped.
    pub fn register(&self, callback: BackCallback) -> BackRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, callback));
        BackRegistration {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Send a back signal through the chain, most recently registered
    /// handler first. Stops at the first handler that consumes it.
    pub fn dispatch(&self) -> BackOutcome {
        let mut inner = self.inner.borrow_mut();
        for (_, callback) in inner.callbacks.iter_mut().rev() {
            if callback().is_consumed() {
                return BackOutcome::Consumed;
            }
        }
        BackOutcome::NotConsumed
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}

impl Default for BackDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped registration: removing the handler is tied to this guard's
/// lifetime, not to any UI toolkit's disposal mechanism.
pub struct BackRegistration {
    inner: Weak<RefCell<DispatcherInner>>,
    id: u64,
}

impl Drop for BackRegistration {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .borrow_mut()
                .callbacks
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_with_no_handlers_is_not_consumed() {
        let dispatcher = BackDispatcher::new();
        assert_eq!(dispatcher.dispatch(), BackOutcome::NotConsumed);
    }

    #[test]
    fn test_registered_handler_consumes() {
        let dispatcher = BackDispatcher::new();
        let _reg = dispatcher.register(Box::new(|| BackOutcome::Consumed));
        assert_eq!(dispatcher.dispatch(), BackOutcome::Consumed);
        assert_eq!(dispatcher.handler_count(), 1);
    }

    #[test]
    fn test_declining_handler_falls_through() {
        let dispatcher = BackDispatcher::new();
        let _reg = dispatcher.register(Box::new(|| BackOutcome::NotConsumed));
        assert_eq!(dispatcher.dispatch(), BackOutcome::NotConsumed);
    }

    #[test]
    fn test_dropping_registration_removes_handler() {
        let dispatcher = BackDispatcher::new();
        let reg = dispatcher.register(Box::new(|| BackOutcome::Consumed));
        assert_eq!(dispatcher.handler_count(), 1);

        drop(reg);
        assert_eq!(dispatcher.handler_count(), 0);
        assert_eq!(dispatcher.dispatch(), BackOutcome::NotConsumed);
    }

    #[test]
    fn test_most_recent_handler_wins() {
        let dispatcher = BackDispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let older = Rc::clone(&log);
        let _a = dispatcher.register(Box::new(move || {
            older.borrow_mut().push("older");
            BackOutcome::Consumed
        }));
        let newer = Rc::clone(&log);
        let _b = dispatcher.register(Box::new(move || {
            newer.borrow_mut().push("newer");
            BackOutcome::Consumed
        }));

        assert_eq!(dispatcher.dispatch(), BackOutcome::Consumed);
        // The newer handler consumed; the older one never ran.
        assert_eq!(*log.borrow(), vec!["newer"]);
    }

    #[test]
    fn test_unconsumed_signal_reaches_older_handlers() {
        let dispatcher = BackDispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let older = Rc::clone(&log);
        let _a = dispatcher.register(Box::new(move || {
            older.borrow_mut().push("older");
            BackOutcome::Consumed
        }));
        let newer = Rc::clone(&log);
        let _b = dispatcher.register(Box::new(move || {
            newer.borrow_mut().push("newer");
            BackOutcome::NotConsumed
        }));

        assert_eq!(dispatcher.dispatch(), BackOutcome::Consumed);
        assert_eq!(*log.borrow(), vec!["newer", "older"]);
    }
}
