//! Observable value holder with a subscribe/notify contract.
//!
//! State that both the core and the frontend care about (drawer open/closed,
//! form text) lives in an `ObservableValue` instead of a framework-managed
//! state cell, so nothing here depends on how the value is rendered.

/// Handle returned by [`ObservableValue::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// A single value plus the list of callbacks to run when it changes.
///
/// Single-threaded by design: subscribers run synchronously on the caller's
/// thread, in subscription order. Subscribers must not call back into the
/// same `ObservableValue`.
pub struct ObservableValue<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> ObservableValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Register a callback invoked after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let value = &self.value;
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }
}

impl<T: PartialEq> ObservableValue<T> {
    /// Replace the value, notifying only when it actually changed.
    pub fn set_if_changed(&mut self, value: T) {
        if self.value != value {
            self.set(value);
        }
    }
}

impl<T: Default> Default for ObservableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
