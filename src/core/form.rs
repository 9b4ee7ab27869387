//! Text form state.

use crate::core::observable::{ObservableValue, SubscriptionId};

/// The single text field's contents. No validation; any string is valid.
#[derive(Default)]
pub struct FormInputState {
    input: ObservableValue<String>,
}

impl FormInputState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            input: ObservableValue::new(initial.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.input.get()
    }

    /// Replace the text. Observers are notified only when it changed, since
    /// the frontend syncs the full line after every key event.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_if_changed(text.into());
    }

    pub fn on_change(&mut self, callback: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.input.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_text_notifies_on_change_only() {
        let mut form = FormInputState::new("");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        form.on_change(move |s| sink.borrow_mut().push(s.clone()));

        form.set_text("a");
        form.set_text("a");
        form.set_text("ab");

        assert_eq!(form.text(), "ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }
}
