//! The weak-referencing sequence container.
//!
//! `WeakSequence<T>` keeps an ordered run of [`WeakHandle`]s. Slots never
//! move except through explicit mutation, and the reported length counts
//! expired slots until they are explicitly replaced or removed: absence is
//! a value a slot resolves to, not a removal event. There is no compaction
//! pass, ever: pruning on read would shift positions underneath the caller.
//!
//! The backing store is an [`EcoVec`], a reference-counted copy-on-write
//! vector: cloning a sequence shares the handle buffer, and the first
//! mutation after a clone copies it. Mutating one copy therefore never
//! alters another's slots, while both keep observing the same external
//! liveness until one of them replaces a handle.

use alloc::rc::Rc;
use core::fmt;
use core::ops::{AddAssign, Range};

use ecow::EcoVec;
use smallvec::SmallVec;

use weakseq_handle::WeakHandle;

use crate::error::Error;
use crate::iter::{Iter, Slots};
use crate::slice::WeakSlice;

/// An ordered sequence of weakly-referenced values.
///
/// Elements are held through non-owning handles: the sequence never extends
/// a referent's lifetime, and a slot observably becomes absent the moment
/// the last strong owner elsewhere releases it. Positions and length are
/// stable against expiry; only explicit mutation changes them.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use weakseq_core::WeakSequence;
///
/// let listener = Rc::new("on_save");
/// let mut seq = WeakSequence::new();
/// seq.push(&listener);
///
/// assert_eq!(seq.len(), 1);
/// assert!(seq.get(0).unwrap().is_some());
///
/// drop(listener);
/// assert_eq!(seq.len(), 1); // the slot stays
/// assert!(seq.get(0).unwrap().is_none()); // but resolves to absent
/// ```
pub struct WeakSequence<T> {
    slots: EcoVec<WeakHandle<T>>,
}

impl<T> WeakSequence<T> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        WeakSequence {
            slots: EcoVec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` handles.
    pub fn with_capacity(capacity: usize) -> Self {
        WeakSequence {
            slots: EcoVec::with_capacity(capacity),
        }
    }

    /// Number of slots, including currently-expired ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn handles(&self) -> &[WeakHandle<T>] {
        &self.slots
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.slots.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }

    // Insertion points may sit one past the end.
    fn check_insertion(&self, index: usize) -> Result<(), Error> {
        if index > self.slots.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), Error> {
        let len = self.slots.len();
        if range.start > range.end {
            return Err(Error::IndexOutOfRange {
                index: range.start,
                len,
            });
        }
        if range.end > len {
            return Err(Error::IndexOutOfRange {
                index: range.end,
                len,
            });
        }
        Ok(())
    }

    /// Resolves the slot at `index`.
    ///
    /// Returns the live value or `None` if the referent has expired (or the
    /// slot was filled with an absent handle). Expiry is never an error;
    /// only an index outside `[0, len)` is.
    pub fn get(&self, index: usize) -> Result<Option<Rc<T>>, Error> {
        self.check_index(index)?;
        Ok(self.slots[index].resolve())
    }

    /// Borrows a view over the slots in `range`.
    ///
    /// The view shares this sequence's handles, so it observes the same
    /// liveness at resolution time. Its indices are parent-absolute: a
    /// slice over `2..4` answers `get(2)` and `get(3)`. See [`WeakSlice`].
    pub fn slice(&self, range: Range<usize>) -> Result<WeakSlice<'_, T>, Error> {
        self.check_range(&range)?;
        Ok(WeakSlice::new(
            &self.slots[range.start..range.end],
            range.start,
        ))
    }

    /// Replaces the handle at `index` with a fresh one for `value`.
    ///
    /// Pass `None::<&Rc<T>>` (or [`WeakHandle::empty()`]) to blank the
    /// slot. Other slots are untouched.
    pub fn set(&mut self, index: usize, value: impl Into<WeakHandle<T>>) -> Result<(), Error> {
        self.check_index(index)?;
        self.slots.make_mut()[index] = value.into();
        Ok(())
    }

    /// Replaces the handles in `range` with fresh handles for `values`,
    /// one-to-one, in order.
    ///
    /// This is a fixed-width replace, not a splice: the length never
    /// changes, and a value count different from the range length fails
    /// with [`Error::RangeLengthMismatch`] before anything is written.
    pub fn set_range<I>(&mut self, range: Range<usize>, values: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<WeakHandle<T>>,
    {
        self.check_range(&range)?;
        let incoming: SmallVec<[WeakHandle<T>; 8]> =
            values.into_iter().map(Into::into).collect();
        let expected = range.end - range.start;
        if incoming.len() != expected {
            return Err(Error::RangeLengthMismatch {
                expected,
                actual: incoming.len(),
            });
        }
        let slots = self.slots.make_mut();
        for (slot, handle) in slots[range.start..range.end].iter_mut().zip(incoming) {
            *slot = handle;
        }
        Ok(())
    }

    /// Appends one handle at the end. Never fails.
    pub fn push(&mut self, value: impl Into<WeakHandle<T>>) {
        self.slots.push(value.into());
    }

    /// Inserts a handle at `index`, shifting later slots right by one.
    /// `index` may equal `len` (append position).
    pub fn insert(&mut self, index: usize, value: impl Into<WeakHandle<T>>) -> Result<(), Error> {
        self.check_insertion(index)?;
        self.splice(index..index, core::iter::once(value.into()));
        Ok(())
    }

    /// Inserts a handle per value starting at `index`, preserving the
    /// relative order of `values`; later slots shift right by the inserted
    /// length.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<WeakHandle<T>>,
    {
        self.check_insertion(index)?;
        self.splice(index..index, values.into_iter().map(Into::into));
        Ok(())
    }

    /// Removes the handles in `range` and inserts fresh handles for
    /// `values` in their place. A true splice: the length changes by the
    /// difference between the two counts.
    pub fn replace_range<I>(&mut self, range: Range<usize>, values: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<WeakHandle<T>>,
    {
        self.check_range(&range)?;
        self.splice(range, values.into_iter().map(Into::into));
        Ok(())
    }

    /// Removes the slot at `index`, shifting later slots left by one.
    ///
    /// Returns what the removed slot resolved to at removal time.
    pub fn remove(&mut self, index: usize) -> Result<Option<Rc<T>>, Error> {
        self.check_index(index)?;
        let removed = self.slots[index].resolve();
        self.splice(index..index + 1, core::iter::empty());
        Ok(removed)
    }

    /// Drops every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    // All length-changing edits funnel through here. Rebuilding keeps the
    // checked-then-mutate contract trivially: by this point the range is
    // known valid and the replacement iterator cannot fail.
    fn splice<I>(&mut self, range: Range<usize>, replacement: I)
    where
        I: Iterator<Item = WeakHandle<T>>,
    {
        let mut slots = EcoVec::with_capacity(self.slots.len());
        for handle in &self.slots[..range.start] {
            slots.push(handle.clone());
        }
        let mut inserted = 0usize;
        for handle in replacement {
            slots.push(handle);
            inserted += 1;
        }
        for handle in &self.slots[range.end..] {
            slots.push(handle.clone());
        }
        tracing::trace!(
            start = range.start,
            removed = range.end - range.start,
            inserted,
            "spliced handle range"
        );
        self.slots = slots;
    }

    /// Resolves the first slot; `None` when empty or expired.
    pub fn first(&self) -> Option<Rc<T>> {
        self.slots.first().and_then(WeakHandle::resolve)
    }

    /// Resolves the last slot; `None` when empty or expired.
    pub fn last(&self) -> Option<Rc<T>> {
        self.slots.last().and_then(WeakHandle::resolve)
    }

    /// Appends every currently-live value of `other` as a fresh handle.
    ///
    /// Expired slots are skipped, not carried over as absent placeholders,
    /// so the appended run can be shorter than `other.len()`. Returns the
    /// mutated sequence for chaining; `+=` does the same.
    pub fn append(&mut self, other: &WeakSequence<T>) -> &mut Self {
        for value in other.iter() {
            self.slots.push(WeakHandle::new(&value));
        }
        self
    }

    /// New sequence holding fresh handles for the values, in order, whose
    /// currently-live referent satisfies `predicate`.
    ///
    /// Expired slots never reach the predicate and never appear in the
    /// result, so the predicate runs at most once per live element.
    pub fn filter(&self, mut predicate: impl FnMut(&Rc<T>) -> bool) -> Self {
        let mut out = WeakSequence::new();
        for value in self.iter() {
            if predicate(&value) {
                out.slots.push(WeakHandle::new(&value));
            }
        }
        out
    }

    /// New sequence with the handles in reverse slot order.
    ///
    /// Liveness is untouched: each new handle resolves exactly as its
    /// original does, absent slots included.
    pub fn reversed(&self) -> Self {
        let mut slots = EcoVec::with_capacity(self.slots.len());
        for handle in self.slots.iter().rev() {
            slots.push(handle.clone());
        }
        WeakSequence { slots }
    }

    /// Position of the first slot whose live referent is the same object
    /// as `value` (by `Rc::ptr_eq`). Expired slots never match.
    pub fn index_of(&self, value: &Rc<T>) -> Option<usize> {
        self.slots.iter().position(|handle| handle.refers_to(value))
    }

    /// Iterates the currently-live values in slot order, skipping expired
    /// slots entirely. Restartable: each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots)
    }

    /// Iterates every slot as an `Option`, preserving absent positions.
    pub fn slots(&self) -> Slots<'_, T> {
        Slots::new(&self.slots)
    }
}

// --- Construction from existing values ---

impl<T> Default for WeakSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<&[Rc<T>]> for WeakSequence<T> {
    fn from(values: &[Rc<T>]) -> Self {
        values.iter().collect()
    }
}

impl<T, A: Into<WeakHandle<T>>> FromIterator<A> for WeakSequence<T> {
    fn from_iter<I: IntoIterator<Item = A>>(values: I) -> Self {
        let mut seq = WeakSequence::new();
        seq.extend(values);
        seq
    }
}

impl<T, A: Into<WeakHandle<T>>> Extend<A> for WeakSequence<T> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, values: I) {
        for value in values {
            self.slots.push(value.into());
        }
    }
}

// --- Concatenation operators ---

impl<T> AddAssign<&WeakSequence<T>> for WeakSequence<T> {
    fn add_assign(&mut self, rhs: &WeakSequence<T>) {
        self.append(rhs);
    }
}

impl<T> AddAssign<&[Rc<T>]> for WeakSequence<T> {
    fn add_assign(&mut self, rhs: &[Rc<T>]) {
        self.extend(rhs.iter());
    }
}

// --- Value semantics ---

// Manual Clone to avoid a T: Clone bound. The backing EcoVec is shared on
// clone and copied on first mutation, so the two sequences' slots are
// independent from the caller's point of view.
impl<T> Clone for WeakSequence<T> {
    fn clone(&self) -> Self {
        WeakSequence {
            slots: self.slots.clone(),
        }
    }
}

// --- Comparison ---

// Positionwise: both sides must be simultaneously absent or simultaneously
// live and the same object. Used for every sequence/slice combination.
pub(crate) fn slots_eq<T>(a: &[WeakHandle<T>], b: &[WeakHandle<T>]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| match (x.resolve(), y.resolve()) {
            (Some(x), Some(y)) => Rc::ptr_eq(&x, &y),
            (None, None) => true,
            _ => false,
        })
}

// No Eq: equality depends on liveness at comparison time, which external
// owners can change between two calls.
impl<T> PartialEq for WeakSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        slots_eq(&self.slots, &other.slots)
    }
}

impl<T> PartialEq<WeakSlice<'_, T>> for WeakSequence<T> {
    fn eq(&self, other: &WeakSlice<'_, T>) -> bool {
        slots_eq(&self.slots, other.handles())
    }
}

impl<T: fmt::Debug> fmt::Debug for WeakSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots()).finish()
    }
}

impl<'a, T> IntoIterator for &'a WeakSequence<T> {
    type Item = Rc<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;

    use super::WeakSequence;

    #[test]
    fn clone_is_independent_after_mutation() {
        crate::test_utils::init_test_logging();
        let a = Rc::new(1);
        let b = Rc::new(2);
        let mut original: WeakSequence<i32> = [&a, &b].into_iter().collect();
        let mut copy = original.clone();

        copy.set(0, None::<&Rc<i32>>).unwrap();
        assert!(original.get(0).unwrap().is_some());
        assert!(copy.get(0).unwrap().is_none());

        original.push(&b);
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn clone_observes_shared_liveness() {
        let a = Rc::new(1);
        let original: WeakSequence<i32> = [&a].into_iter().collect();
        let copy = original.clone();
        drop(a);
        // Neither copy retained the referent.
        assert!(original.get(0).unwrap().is_none());
        assert!(copy.get(0).unwrap().is_none());
    }

    #[test]
    fn splice_keeps_surrounding_slots() {
        let values: vec::Vec<Rc<i32>> = (0..5).map(Rc::new).collect();
        let mut seq: WeakSequence<i32> = values.iter().collect();
        seq.replace_range(1..4, [&values[0]]).unwrap();

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.index_of(&values[0]), Some(0));
        assert_eq!(seq.index_of(&values[4]), Some(2));
    }

    #[test]
    fn reversed_preserves_absent_slots() {
        let a = Rc::new(1);
        let mut seq = WeakSequence::new();
        seq.push(&a);
        seq.push(None::<&Rc<i32>>);
        let rev = seq.reversed();

        assert!(rev.get(0).unwrap().is_none());
        assert!(rev.get(1).unwrap().is_some());
        // The source is untouched.
        assert!(seq.get(0).unwrap().is_some());
    }
}
