//! Controlled / uncontrolled ownership of a piece of state.

/// Who owns a value: the caller (`External`) or the instance (`Internal`).
///
/// Resolved once from an optional prop and an optional default, then read
/// and written uniformly. Writes to `External` are dropped; the caller is
/// expected to learn about the proposed change through a callback and feed
/// the new prop back in with [`Ownership::sync_prop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ownership<V> {
    /// Controlled by the caller; read-only here
    External(V),
    /// Owned by this instance
    Internal(V),
}

impl<V: Default> Ownership<V> {
    /// Resolve ownership from a prop and a default.
    ///
    /// A present prop wins and the default is ignored.
    pub fn resolve(prop: Option<V>, default: Option<V>) -> Self {
        match prop {
            Some(value) => Ownership::External(value),
            None => Ownership::Internal(default.unwrap_or_default()),
        }
    }

    /// Apply a new external prop.
    ///
    /// `Some` takes (or keeps) control. `None` hands control back to the
    /// instance, which continues from the last controlled value.
    pub fn sync_prop(&mut self, prop: Option<V>) {
        match prop {
            Some(value) => *self = Ownership::External(value),
            None => {
                if let Ownership::External(last) = self {
                    let last = std::mem::take(last);
                    *self = Ownership::Internal(last);
                }
            }
        }
    }
}

impl<V> Ownership<V> {
    /// Current value, whoever owns it
    pub fn read(&self) -> &V {
        match self {
            Ownership::External(value) | Ownership::Internal(value) => value,
        }
    }

    /// Write a new value. Returns `false` when the write was dropped
    /// because the value is externally owned.
    pub fn write(&mut self, next: V) -> bool {
        match self {
            Ownership::External(_) => false,
            Ownership::Internal(value) => {
                *value = next;
                true
            }
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Ownership::External(_))
    }
}
