//! Iterators over a sequence's handles.
//!
//! [`Iter`] yields only the currently-live values, in slot order; an expired
//! slot is skipped entirely, so iterating k slots of which m are live yields
//! exactly m values. [`Slots`] yields every slot as an `Option`, preserving
//! the absent positions. Both borrow the sequence, have no side effects on
//! it, and can be restarted by asking for a fresh iterator.

use alloc::rc::Rc;
use core::iter::FusedIterator;
use core::slice;

use weakseq_handle::WeakHandle;

/// Iterator over the live values of a sequence or slice.
pub struct Iter<'a, T> {
    handles: slice::Iter<'a, WeakHandle<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(handles: &'a [WeakHandle<T>]) -> Self {
        Iter {
            handles: handles.iter(),
        }
    }
}

impl<T> Iterator for Iter<'_, T> {
    type Item = Rc<T>;

    fn next(&mut self) -> Option<Rc<T>> {
        self.handles.by_ref().find_map(WeakHandle::resolve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between none and all of the remaining slots may be live.
        (0, Some(self.handles.len()))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            handles: self.handles.clone(),
        }
    }
}

/// Iterator over every slot of a sequence or slice, resolved at visit time.
///
/// Unlike [`Iter`], absent positions are reported as `None` rather than
/// skipped, so the iteration length always equals the slot count.
pub struct Slots<'a, T> {
    handles: slice::Iter<'a, WeakHandle<T>>,
}

impl<'a, T> Slots<'a, T> {
    pub(crate) fn new(handles: &'a [WeakHandle<T>]) -> Self {
        Slots {
            handles: handles.iter(),
        }
    }
}

impl<T> Iterator for Slots<'_, T> {
    type Item = Option<Rc<T>>;

    fn next(&mut self) -> Option<Option<Rc<T>>> {
        self.handles.next().map(WeakHandle::resolve)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}

impl<T> DoubleEndedIterator for Slots<'_, T> {
    fn next_back(&mut self) -> Option<Option<Rc<T>>> {
        self.handles.next_back().map(WeakHandle::resolve)
    }
}

impl<T> FusedIterator for Slots<'_, T> {}

impl<T> Clone for Slots<'_, T> {
    fn clone(&self) -> Self {
        Slots {
            handles: self.handles.clone(),
        }
    }
}
