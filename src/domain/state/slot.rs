//! A single replaceable piece of state.

/// A state slice with a getter and two setters: full replacement and a
/// pure updater of the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSlot<V> {
    value: V,
}

impl<V> StateSlot<V> {
    pub fn new(initial: V) -> Self {
        Self { value: initial }
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    /// Replace the value
    pub fn set(&mut self, next: V) {
        self.value = next;
    }

    /// Replace the value with `updater(previous)`
    pub fn update(&mut self, updater: impl FnOnce(&V) -> V) {
        self.value = updater(&self.value);
    }
}
