// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;
#[cfg(feature = "std")]
use std::error::Error as StdError;

/// An error produced by constructing or rewriting an [`Index`](crate::Index).
///
/// `Error` is a plain `enum` rather than a boxed trait object: every
/// operation in this crate is small and synchronous, and the caller almost
/// always wants to match on *which* thing went wrong (an out-of-bounds
/// integer and an unsupported `as_subindex` configuration call for very
/// different recovery).
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A raw value could not be classified as an integer, slice, ellipsis,
    /// or tuple thereof.
    BadIndex {
        /// Human-readable description of the offending value.
        what: &'static str,
    },
    /// A [`Slice`](crate::Slice) was constructed with `step == 0`.
    BadStep,
    /// A [`Tuple`](crate::Tuple) was constructed with more than one
    /// [`Ellipsis`](crate::Ellipsis).
    BadEllipsis,
    /// An [`Integer`](crate::Integer) index fell outside `[-n, n)` for the
    /// axis length `n`.
    OutOfBounds {
        /// The index as given (before normalization).
        index: i64,
        /// The length of the axis it was checked against.
        axis_len: usize,
    },
    /// A [`Tuple`](crate::Tuple) had more scalar/slice positions than the
    /// shape had axes.
    TooManyIndices {
        /// Number of non-ellipsis positions in the tuple.
        num_indices: usize,
        /// Number of axes in the shape.
        ndim: usize,
    },
    /// [`Slice::len`](crate::Slice::len) was called on a slice whose length
    /// depends on an axis length that wasn't given.
    NoLength,
    /// [`Slice::as_subindex`](crate::Slice::as_subindex) was asked for a
    /// configuration outside its supported subset.
    NotImplemented {
        /// What part of the configuration isn't supported.
        reason: &'static str,
    },
    /// A shape-accepting operation was handed an [`Index`](crate::Index)
    /// value instead of a plain shape.
    TypeError {
        /// Human-readable description of what was expected.
        what: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadIndex { what } => write!(f, "not a valid index: {}", what),
            Error::BadStep => write!(f, "slice step cannot be zero"),
            Error::BadEllipsis => write!(f, "an index can have at most one ellipsis"),
            Error::OutOfBounds { index, axis_len } => write!(
                f,
                "index {} is out of bounds for axis of length {}",
                index, axis_len
            ),
            Error::TooManyIndices { num_indices, ndim } => write!(
                f,
                "too many indices: {} indices given for an array with {} dimensions",
                num_indices, ndim
            ),
            Error::NoLength => write!(f, "cannot determine length of slice without an axis length"),
            Error::NotImplemented { reason } => {
                write!(f, "as_subindex is not implemented for this case: {}", reason)
            }
            Error::TypeError { what } => write!(f, "expected a shape, got {}", what),
        }
    }
}

#[cfg(feature = "std")]
impl StdError for Error {}

/// Convenience alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
