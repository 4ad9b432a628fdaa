//! Borrowed range views over a sequence.
//!
//! A `WeakSlice` shares the parent's handles rather than copying them, so
//! it observes exactly the liveness the parent would at resolution time.
//! Indices are parent-absolute: the view produced by `seq.slice(2..4)`
//! answers `get(2)` and `get(3)`, mirroring the convention used by
//! [`WeakSequence::set_range`]. Equality, however, is positional: two
//! views with equal content at different absolute origins compare equal.

use alloc::rc::Rc;
use core::fmt;

use weakseq_handle::WeakHandle;

use crate::error::Error;
use crate::iter::{Iter, Slots};
use crate::seq::{WeakSequence, slots_eq};

/// A contiguous, parent-absolute view over a sequence's handles.
pub struct WeakSlice<'a, T> {
    slots: &'a [WeakHandle<T>],
    start: usize,
}

impl<'a, T> WeakSlice<'a, T> {
    pub(crate) fn new(slots: &'a [WeakHandle<T>], start: usize) -> Self {
        WeakSlice { slots, start }
    }

    /// First index this view answers.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index this view answers.
    pub fn end(&self) -> usize {
        self.start + self.slots.len()
    }

    /// Number of slots in the view, including expired ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn handles(&self) -> &[WeakHandle<T>] {
        self.slots
    }

    /// Resolves the slot at parent-absolute `index`.
    ///
    /// Valid indices run `start()..end()`; anything else is
    /// [`Error::IndexOutOfRange`] (reporting `end()` as the length bound).
    /// As everywhere, expiry is a `None`, never an error.
    pub fn get(&self, index: usize) -> Result<Option<Rc<T>>, Error> {
        match index
            .checked_sub(self.start)
            .filter(|&relative| relative < self.slots.len())
        {
            Some(relative) => Ok(self.slots[relative].resolve()),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.end(),
            }),
        }
    }

    /// Resolves the first slot of the view; `None` when empty or expired.
    pub fn first(&self) -> Option<Rc<T>> {
        self.slots.first().and_then(WeakHandle::resolve)
    }

    /// Resolves the last slot of the view; `None` when empty or expired.
    pub fn last(&self) -> Option<Rc<T>> {
        self.slots.last().and_then(WeakHandle::resolve)
    }

    /// Parent-absolute position of the first slot whose live referent is
    /// the same object as `value`.
    pub fn index_of(&self, value: &Rc<T>) -> Option<usize> {
        self.slots
            .iter()
            .position(|handle| handle.refers_to(value))
            .map(|relative| self.start + relative)
    }

    /// Iterates the view's currently-live values, skipping expired slots.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.slots)
    }

    /// Iterates every slot of the view as an `Option`.
    pub fn slots(&self) -> Slots<'a, T> {
        Slots::new(self.slots)
    }

    /// Materializes the view as an independent sequence.
    ///
    /// Each slot gets a fresh handle bound to the same current resolution,
    /// so the result equals the view positionwise at creation time.
    pub fn to_sequence(&self) -> WeakSequence<T> {
        self.slots.iter().cloned().collect()
    }
}

// A view is just a borrow plus an offset; copying it copies nothing else.
impl<T> Clone for WeakSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WeakSlice<'_, T> {}

impl<T> PartialEq for WeakSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        slots_eq(self.slots, other.slots)
    }
}

impl<T> PartialEq<WeakSequence<T>> for WeakSlice<'_, T> {
    fn eq(&self, other: &WeakSequence<T>) -> bool {
        slots_eq(self.slots, other.handles())
    }
}

impl<T: fmt::Debug> fmt::Debug for WeakSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots()).finish()
    }
}

impl<'a, T> IntoIterator for WeakSlice<'a, T> {
    type Item = Rc<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self.slots)
    }
}
