//! Local state — a value cell owned entirely by the widget.
//!
//! No callbacks, no equality checks. Every `set` writes.

/// A value owned by the widget itself, like a pointer-drag flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalState<T> {
    value: T,
}

impl<T> LocalState<T> {
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self { value: initial }
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Overwrite the stored value unconditionally.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_value() {
        assert!(!*LocalState::new(false).get());
    }

    #[test]
    fn set_overwrites() {
        let mut state = LocalState::new(false);
        state.set(true);
        assert!(*state.get());
        state.set(true);
        assert!(*state.get());
        state.set(false);
        assert!(!*state.get());
    }
}
