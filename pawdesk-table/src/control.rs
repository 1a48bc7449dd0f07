//! Controlled and uncontrolled values.
//!
//! A table value is either owned by the parent ([`Control::Controlled`]) or
//! seeded once and then owned by the table ([`Control::Uncontrolled`]). The
//! choice is made once at construction.

/// How a value is owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control<V> {
    /// The parent owns the value. Requested changes are only reported; the
    /// value moves when the parent calls the matching `sync_*` method.
    Controlled(V),
    /// The table owns the value, starting from the given one.
    Uncontrolled(V),
}

impl<V: Default> Default for Control<V> {
    fn default() -> Self {
        Control::Uncontrolled(V::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Controlled,
    Uncontrolled,
}

/// A resolved [`Control`].
#[derive(Debug, Clone)]
pub(crate) struct Managed<V> {
    mode: ControlMode,
    value: V,
}

impl<V: Clone + PartialEq> Managed<V> {
    pub(crate) fn new(control: Control<V>) -> Self {
        match control {
            Control::Controlled(value) => Self {
                mode: ControlMode::Controlled,
                value,
            },
            Control::Uncontrolled(value) => Self {
                mode: ControlMode::Uncontrolled,
                value,
            },
        }
    }

    pub(crate) fn mode(&self) -> ControlMode {
        self.mode
    }

    pub(crate) fn get(&self) -> &V {
        &self.value
    }

    /// Request a new value. Stored only when uncontrolled.
    ///
    /// Returns `true` if `next` differs from the current value.
    pub(crate) fn request(&mut self, next: V) -> bool {
        if next == self.value {
            return false;
        }
        if self.mode == ControlMode::Uncontrolled {
            self.value = next;
        }
        true
    }

    /// Accept a value from the parent. Ignored when uncontrolled.
    pub(crate) fn sync(&mut self, value: V) -> bool {
        match self.mode {
            ControlMode::Controlled => {
                self.value = value;
                true
            }
            ControlMode::Uncontrolled => false,
        }
    }

    /// Overwrite the value regardless of mode, for invariant repair.
    pub(crate) fn repair(&mut self, value: V) {
        self.value = value;
    }
}
