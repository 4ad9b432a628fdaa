//! Non-owning handles for reference-counted values.
//!
//! A `WeakHandle<T>` points at an object managed by `Rc<T>` without keeping
//! it alive. Resolving the handle yields the object while at least one
//! strong owner still exists, and `None` afterwards, deterministically and
//! without error. A handle can also be created pointing at nothing, which
//! resolves to `None` from the start.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use weakseq_handle::WeakHandle;
//!
//! let owner = Rc::new("listener");
//! let handle = WeakHandle::new(&owner);
//! assert!(handle.resolve().is_some());
//!
//! drop(owner);
//! assert!(handle.resolve().is_none());
//! assert!(handle.is_expired());
//! ```
//!
//! # Size
//!
//! | Type | Layout |
//! |------|--------|
//! | `WeakHandle<T>` | one machine word (the weak pointer) |
//!
//! An empty handle carries a dangling sentinel rather than an allocation, so
//! `WeakHandle::empty()` never touches the heap.
//!
//! # Gotchas
//!
//! - **No resurrection**: once the last `Rc` is gone the object is gone.
//!   A handle never extends a lifetime.
//! - **Immutable**: a handle cannot be re-pointed. Replacing it means
//!   constructing a new one.

#![no_std]

extern crate alloc;

use alloc::rc::{Rc, Weak};
use core::fmt;

/// A non-owning handle to an `Rc`-managed value.
///
/// Resolves to the value while strong owners exist elsewhere, to `None`
/// afterwards. See [crate-level docs](crate) for examples.
pub struct WeakHandle<T> {
    inner: Weak<T>,
}

static_assertions::assert_eq_size!(WeakHandle<u64>, usize);
static_assertions::assert_eq_size!(WeakHandle<[u8; 3]>, usize);

impl<T> WeakHandle<T> {
    /// Creates a handle to the value owned by `value`.
    ///
    /// The handle does not contribute to the strong count; dropping every
    /// `Rc` clone elsewhere expires the handle.
    pub fn new(value: &Rc<T>) -> Self {
        WeakHandle {
            inner: Rc::downgrade(value),
        }
    }

    /// Creates a handle to nothing. Resolves to `None`, always.
    pub const fn empty() -> Self {
        WeakHandle { inner: Weak::new() }
    }

    /// Returns the referent if it is still alive.
    ///
    /// The returned `Rc` is a fresh strong owner: holding on to it keeps
    /// the value alive for as long as the caller needs it. Resolving an
    /// expired or empty handle returns `None`; this is never an error.
    pub fn resolve(&self) -> Option<Rc<T>> {
        self.inner.upgrade()
    }

    /// Whether the referent has been deallocated (or never existed).
    pub fn is_expired(&self) -> bool {
        self.inner.strong_count() == 0
    }

    /// Whether this handle currently refers to the same object as `value`.
    ///
    /// Liveness is checked before the pointer comparison: a handle whose
    /// referent has been freed never matches, even if the allocator has
    /// reused the address for `value`.
    pub fn refers_to(&self, value: &Rc<T>) -> bool {
        self.resolve().is_some_and(|live| Rc::ptr_eq(&live, value))
    }
}

// Manual Clone/Default/Debug to avoid T: Clone/Default/Debug bounds.

impl<T> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        WeakHandle {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for WeakHandle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_expired() {
            f.write_str("WeakHandle(<expired>)")
        } else {
            f.write_str("WeakHandle(live)")
        }
    }
}

impl<T> From<&Rc<T>> for WeakHandle<T> {
    fn from(value: &Rc<T>) -> Self {
        WeakHandle::new(value)
    }
}

impl<T> From<Option<&Rc<T>>> for WeakHandle<T> {
    fn from(value: Option<&Rc<T>>) -> Self {
        match value {
            Some(value) => WeakHandle::new(value),
            None => WeakHandle::empty(),
        }
    }
}

impl<T> From<Rc<T>> for WeakHandle<T> {
    fn from(value: Rc<T>) -> Self {
        WeakHandle::new(&value)
    }
}
