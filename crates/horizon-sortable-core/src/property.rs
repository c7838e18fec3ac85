//! A lock-guarded value that knows when a write changed it.
//!
//! [`Property`] is the storage half of a reactive value; the owner pairs it
//! with a [`Signal`](crate::Signal) and emits only when a write reports a
//! change.
//!
//! ```
//! use horizon_sortable_core::Property;
//!
//! let order = Property::new(vec!["a", "b"]);
//! assert!(!order.set(vec!["a", "b"]));
//! assert_eq!(order.update(|o| o.iter().rev().copied().collect()), Some(vec!["b", "a"]));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value with change detection on write.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T> Property<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Reads the value in place.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone> Property<T> {
    /// A clone of the value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Stores `value` unless it equals the current one. Returns `true` on
    /// change.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }

    /// Computes the next value from the current one under a single write
    /// lock. Returns the stored value if it changed.
    pub fn update<F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> T,
    {
        let mut current = self.value.write();
        let next = f(&current);
        if *current == next {
            return None;
        }
        *current = next.clone();
        Some(next)
    }
}

impl<T: Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.value.read()).finish()
    }
}
