//! Weakseq - an ordered sequence that never keeps its elements alive
//!
//! # Overview
//!
//! A [`WeakSequence`] looks and feels like an array, but each slot holds a
//! non-owning handle to an `Rc`-managed value. The moment the last strong
//! owner elsewhere releases a value, the corresponding slot observably
//! becomes absent; the sequence never extends a lifetime. Common use cases
//! include:
//!
//! - Observer and listener registries that must not leak subscribers
//! - Caches of callbacks keyed by position
//! - Any roster of externally-owned objects where staleness should show up
//!   as absence rather than dangling state
//!
//! Slots are stable: expiry changes what a slot resolves to, never how many
//! slots there are or where they sit. Nothing is pruned behind the caller's
//! back; an expired slot stays (and counts) until explicitly replaced or
//! removed.
//!
//! # Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use weakseq::WeakSequence;
//!
//! let on_save = Rc::new("save handler");
//! let on_load = Rc::new("load handler");
//!
//! let mut listeners = WeakSequence::new();
//! listeners.push(&on_save);
//! listeners.push(&on_load);
//! assert_eq!(listeners.len(), 2);
//!
//! // The registry never keeps a listener alive.
//! drop(on_load);
//! assert_eq!(listeners.len(), 2); // the slot remains...
//! assert!(listeners.get(1).unwrap().is_none()); // ...but resolves to absent
//!
//! // Iteration visits only the survivors.
//! let live: Vec<_> = listeners.iter().collect();
//! assert_eq!(live.len(), 1);
//! assert_eq!(*live[0], "save handler");
//! ```
//!
//! # Liveness is external
//!
//! Two reads of the same slot may legitimately differ with no mutation of
//! the sequence in between: whoever owns the referent may have dropped it.
//! Callers that need check-then-use atomicity should capture the resolved
//! `Rc` once and work with that:
//!
//! ```
//! use std::rc::Rc;
//! use weakseq::WeakSequence;
//!
//! let value = Rc::new(42);
//! let mut seq = WeakSequence::new();
//! seq.push(&value);
//!
//! if let Some(captured) = seq.get(0).unwrap() {
//!     // `captured` is a fresh strong owner; it stays valid here even if
//!     // every other owner goes away.
//!     assert_eq!(*captured, 42);
//! }
//! ```
//!
//! # Value semantics
//!
//! Cloning a sequence is cheap (the handle buffer is copy-on-write) and the
//! clone is independent: mutating one side's slots never alters the
//! other's. Both keep observing the same external liveness, because the
//! handles refer to the same objects:
//!
//! ```
//! use std::rc::Rc;
//! use weakseq::{WeakSequence, weak_seq};
//!
//! let a = Rc::new(1);
//! let original: WeakSequence<i32> = weak_seq![&a];
//! let mut copy = original.clone();
//!
//! copy.set(0, None::<&Rc<i32>>).unwrap();
//! assert!(original.get(0).unwrap().is_some());
//! assert!(copy.get(0).unwrap().is_none());
//! ```

// Re-export the public API from weakseq_core
pub use weakseq_core::{Error, WeakHandle, WeakSequence, WeakSlice, weak_seq};

// The per-slot and live-only iterator types, for signatures that need to
// name them.
pub use weakseq_core::iter::{Iter, Slots};
