// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A symbolic algebra of n-dimensional array indices.
//!
//! This crate models the four things a single numpy/Python-style subscript
//! can be — an [`Integer`], a [`Slice`], an [`Ellipsis`], or a [`Tuple`] of
//! those — and the operations that rewrite them against a concrete array
//! shape, without ever touching array storage itself. There is no
//! broadcasting, no fancy (array/boolean) indexing, and no I/O; see the
//! module docs for the full scope.
//!
//! ```
//! use ndindex::ndindex;
//!
//! let idx = ndindex!(1i64, ..).unwrap();
//! let reduced = idx.reduce(Some([3usize, 4])).unwrap();
//! assert_eq!(idx.newshape([3usize, 4]).unwrap(), reduced.newshape([3usize, 4]).unwrap());
//! ```
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in
//! your `Cargo.toml`.
//!
//! - `std`
//!   - Enabled by default.
//!   - Uses the `std` library and implements [`std::error::Error`] for
//!     [`Error`].
//!   - Disable to use this crate in `#![no_std]` environments; `alloc` is
//!     still required.
//! - `serde`
//!   - Disabled by default.
//!   - Adds `Serialize`/`Deserialize` impls for every public type, mirroring
//!     the optional `serde` support of the array crate this one is derived
//!     from.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod ellipsis;
mod error;
mod gcd;
mod index;
mod integer;
mod macros;
mod shape;
mod slice;
mod tuple;

pub use crate::ellipsis::Ellipsis;
pub use crate::error::{Error, Result};
pub use crate::index::{ndindex, Index, IntoIndexVariant};
pub use crate::integer::Integer;
pub use crate::shape::{IntoShape, Shape};
pub use crate::slice::Slice;
pub use crate::tuple::Tuple;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec::Vec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_and_newshape_agree_on_scalar_after_expand() {
        let idx = ndindex!(1i64, ..).unwrap();
        let shape = [3usize, 4];
        let reduced = idx.reduce(Some(shape)).unwrap();
        assert_eq!(idx.newshape(shape).unwrap(), reduced.newshape(shape).unwrap());
    }

    #[test]
    fn dispatcher_reexported_at_crate_root() {
        assert_eq!(ndindex(3i64), Index::Integer(Integer::new(3i64).unwrap()));
    }
}
