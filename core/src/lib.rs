#![cfg_attr(not(test), no_std)]

//! Ordered sequence containers over non-owning references.
//!
//! The central type is [`WeakSequence`], an array-like container whose
//! slots hold [`WeakHandle`]s instead of owned values. A slot resolves to
//! its referent while strong owners exist elsewhere and to absent
//! afterwards; length and slot positions are unaffected by expiry. See the
//! `weakseq` facade crate for a guided tour.

extern crate alloc;

pub mod error;
pub mod iter;
mod macros;
pub mod seq;
pub mod slice;

pub use error::Error;
pub use seq::WeakSequence;
pub use slice::WeakSlice;

// The handle primitive is part of the public vocabulary (`set`, `push` and
// friends accept anything convertible into one), so re-export it.
pub use weakseq_handle::WeakHandle;
