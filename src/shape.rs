// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Array shapes, and conversion of bare integers/slices/arrays into them.

use alloc::vec::Vec;
use core::ops::{Deref, Index as StdIndex};

/// A finite ordered sequence of non-negative axis lengths.
///
/// A bare `usize` is treated as a one-element shape (axis length `n`), the
/// same convention the rest of this crate (and numpy's `ndindex`) uses for
/// `shape` arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Number of axes (dimensionality).
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Axis lengths as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Total number of elements an array of this shape would hold.
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }
}

impl Deref for Shape {
    type Target = [usize];
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl StdIndex<usize> for Shape {
    type Output = usize;
    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Shape(iter.into_iter().collect())
    }
}

/// Conversion of a "shape-like" Rust value into a [`Shape`].
///
/// Modeled on the teacher crate's `IntoDimension` (`src/dimension/conversion.rs`):
/// a bare integer is a one-element shape, and slices/`Vec`s/arrays of
/// `usize` are themselves shapes.
pub trait IntoShape {
    /// Converts `self` into a [`Shape`].
    fn into_shape(self) -> Shape;
}

impl IntoShape for Shape {
    fn into_shape(self) -> Shape {
        self
    }
}

impl IntoShape for &Shape {
    fn into_shape(self) -> Shape {
        self.clone()
    }
}

impl IntoShape for usize {
    fn into_shape(self) -> Shape {
        Shape(alloc::vec![self])
    }
}

impl IntoShape for &[usize] {
    fn into_shape(self) -> Shape {
        Shape(self.to_vec())
    }
}

impl IntoShape for Vec<usize> {
    fn into_shape(self) -> Shape {
        Shape(self)
    }
}

macro_rules! impl_into_shape_for_array {
    ($($n:expr),*) => {
        $(
            impl IntoShape for [usize; $n] {
                fn into_shape(self) -> Shape {
                    Shape(self.to_vec())
                }
            }
            impl IntoShape for &[usize; $n] {
                fn into_shape(self) -> Shape {
                    Shape(self.to_vec())
                }
            }
        )*
    };
}
impl_into_shape_for_array!(0, 1, 2, 3, 4, 5, 6, 7, 8);
