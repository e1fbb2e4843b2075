//! Identity-comparable callback handles.
//!
//! ## Usage
//!
//! Store a `Callback` or `CallbackWith<T>` in a control's args and invoke it
//! when the control publishes a change. Handles compare by identity
//! (`Arc::ptr_eq`), so args structs stay cheaply comparable without forcing
//! deep closure comparisons.

use std::sync::Arc;

/// A comparable callback handle for `Fn()`.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback")
    }
}

/// A comparable callback handle for `Fn(T) -> R`.
///
/// This is the shape used by value-change notifications.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_callback_invocation() {
        let hits = Arc::new(AtomicI32::new(0));
        let captured = Arc::clone(&hits);
        let cb = Callback::new(move || {
            captured.fetch_add(1, Ordering::SeqCst);
        });

        cb.call();
        cb.call();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_with_argument() {
        let last = Arc::new(AtomicI32::new(0));
        let captured = Arc::clone(&last);
        let cb: CallbackWith<i32> = CallbackWith::new(move |v| {
            captured.store(v, Ordering::SeqCst);
        });

        cb.call(42);
        assert_eq!(last.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_identity_comparison() {
        let a = Callback::new(|| {});
        let b = a.clone();
        let c = Callback::new(|| {});

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
