//! Error types for sequence indexing and range mutation.
//!
//! Only structural misuse is an error: an index or range that falls outside
//! the sequence, or a fixed-width replacement whose value count does not
//! match the target range. Resolving an expired slot is *not* an error;
//! absence is an ordinary return value. Every failure is checked before any
//! mutation is applied, so a sequence is never left partially modified.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index or range bound outside `[0, len)` (or `[0, len]` for
    /// insertion points). A reversed range reports its start bound here.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A fixed-width range replacement received the wrong number of values.
    /// The sequence length never changes through this operation.
    #[error("range replacement expects {expected} values, got {actual}")]
    RangeLengthMismatch { expected: usize, actual: usize },
}
