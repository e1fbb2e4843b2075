//! Shared state handles.
//!
//! ## Usage
//!
//! A host typically owns one controller per control but consults it from
//! more than one hook (input handling, rendering, programmatic updates).
//! `State<T>` wraps the controller in `Arc<RwLock<T>>` so every hook holds
//! the same instance; access goes through `with`, `with_mut`, `get`, and
//! `set`.

use std::sync::Arc;

use parking_lot::RwLock;

/// A cloneable handle to shared mutable state.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Wraps a value in a shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Executes a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Executes a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Gets a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replaces the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_mutation() {
        let count = State::new(0usize);
        let alias = count.clone();

        alias.with_mut(|c| *c += 1);
        assert_eq!(count.get(), 1);

        count.set(10);
        assert_eq!(alias.get(), 10);
    }

    #[test]
    fn test_with_returns_closure_result() {
        let label = State::new(String::from("low"));
        let len = label.with(|s| s.len());
        assert_eq!(len, 3);
    }
}
