//! Controlled / uncontrolled value synchronization.
//!
//! A widget value can be owned in one of two places:
//!
//! | Mode         | Who stores the value | `set_value` does                   |
//! |--------------|----------------------|------------------------------------|
//! | Controlled   | the caller           | calls `on_change`, stores nothing  |
//! | Uncontrolled | this state           | stores the value, calls `on_change`|
//!
//! The mode is fixed when the state is built: supplying a controlled value
//! makes it controlled for its whole life. A controlled caller hands the
//! updated value back through [`ControlledState::sync`], typically on its
//! next render.

use std::fmt;

use tracing::{debug, trace, warn};

/// Change callback. Receives the value that was requested.
pub type OnChange<T> = Box<dyn FnMut(&T)>;

/// A value whose storage is owned either by the caller or by this state.
pub struct ControlledState<T> {
    /// Current value: the caller's last value when controlled, the local
    /// value otherwise.
    value: T,
    controlled: bool,
    on_change: Option<OnChange<T>>,
}

impl<T: Clone + PartialEq + fmt::Debug> ControlledState<T> {
    /// Build the state. `controlled` being `Some` makes it controlled;
    /// `default` seeds the local value otherwise and is ignored when
    /// controlled.
    #[must_use]
    pub fn new(controlled: Option<T>, default: T, on_change: Option<OnChange<T>>) -> Self {
        let is_controlled = controlled.is_some();
        debug!(controlled = is_controlled, "controlled state created");
        Self {
            value: controlled.unwrap_or(default),
            controlled: is_controlled,
            on_change,
        }
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// True if the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Request a new value.
    ///
    /// A value equal to the current one is dropped: nothing is stored and
    /// `on_change` is not called. Otherwise `on_change` fires, and the value
    /// is stored only in uncontrolled mode.
    pub fn set_value(&mut self, value: T) {
        if value == self.value {
            trace!(?value, "set_value: unchanged, skipped");
            return;
        }

        if self.controlled {
            debug!(?value, "set_value: forwarded to owner");
        } else {
            debug!(?value, "set_value: stored locally");
            self.value = value.clone();
        }

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&value);
        }
    }

    /// Accept the caller's current controlled value.
    ///
    /// Only meaningful in controlled mode, where `Some(value)` replaces the
    /// stored value without calling `on_change`. The mode never changes:
    /// `None` on a controlled state and `Some` on an uncontrolled one are
    /// ignored with a warning.
    pub fn sync(&mut self, controlled: Option<T>) {
        match (self.controlled, controlled) {
            (true, Some(value)) => {
                trace!(?value, "sync: controlled value updated");
                self.value = value;
            }
            (true, None) => {
                warn!("state is changing from controlled to uncontrolled; ignoring");
            }
            (false, Some(_)) => {
                warn!("state is changing from uncontrolled to controlled; ignoring");
            }
            (false, None) => {}
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ControlledState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledState")
            .field("value", &self.value)
            .field("controlled", &self.controlled)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    /// A callback that records every value it receives.
    fn recorder() -> (Rc<RefCell<Vec<i32>>>, OnChange<i32>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, Box::new(move |v: &i32| sink.borrow_mut().push(*v)))
    }

    // ── Uncontrolled ─────────────────────────────────────────────────────

    #[test]
    fn uncontrolled_starts_at_default() {
        let state = ControlledState::new(None, 3, None);
        assert!(!state.is_controlled());
        assert_eq!(*state.value(), 3);
    }

    #[test]
    fn uncontrolled_set_stores_and_notifies() {
        let (calls, on_change) = recorder();
        let mut state = ControlledState::new(None, 3, Some(on_change));
        state.set_value(7);
        assert_eq!(*state.value(), 7);
        assert_eq!(*calls.borrow(), vec![7]);
    }

    #[test]
    fn equal_value_is_skipped() {
        let (calls, on_change) = recorder();
        let mut state = ControlledState::new(None, 3, Some(on_change));
        state.set_value(3);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn set_without_callback_still_stores() {
        let mut state = ControlledState::new(None, 3, None);
        state.set_value(4);
        assert_eq!(*state.value(), 4);
    }

    #[test]
    fn uncontrolled_ignores_sync() {
        let mut state = ControlledState::new(None, 3, None);
        state.sync(Some(9));
        assert_eq!(*state.value(), 3);
        assert!(!state.is_controlled());
    }

    // ── Controlled ───────────────────────────────────────────────────────

    #[test]
    fn controlled_ignores_default() {
        let state = ControlledState::new(Some(1), 3, None);
        assert!(state.is_controlled());
        assert_eq!(*state.value(), 1);
    }

    #[test]
    fn controlled_set_notifies_without_storing() {
        let (calls, on_change) = recorder();
        let mut state = ControlledState::new(Some(1), 3, Some(on_change));
        state.set_value(5);
        assert_eq!(*state.value(), 1);
        assert_eq!(*calls.borrow(), vec![5]);
    }

    #[test]
    fn controlled_repeated_request_notifies_each_time() {
        // The owner hasn't synced yet, so 5 still differs from the stored 1.
        let (calls, on_change) = recorder();
        let mut state = ControlledState::new(Some(1), 3, Some(on_change));
        state.set_value(5);
        state.set_value(5);
        assert_eq!(*calls.borrow(), vec![5, 5]);
    }

    #[test]
    fn controlled_sync_replaces_value_silently() {
        let (calls, on_change) = recorder();
        let mut state = ControlledState::new(Some(1), 3, Some(on_change));
        state.sync(Some(8));
        assert_eq!(*state.value(), 8);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn controlled_stays_controlled_after_none() {
        let mut state = ControlledState::new(Some(1), 3, None);
        state.sync(None);
        assert!(state.is_controlled());
        assert_eq!(*state.value(), 1);
    }

    #[test]
    fn debug_hides_callback() {
        let (_, on_change) = recorder();
        let state = ControlledState::new(None, 3, Some(on_change));
        assert_eq!(
            format!("{state:?}"),
            "ControlledState { value: 3, controlled: false, on_change: true }"
        );
    }
}
