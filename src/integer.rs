// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::shape::IntoShape;

/// Coerces any integer-like value to `i64` exactly once.
///
/// This is the single point through which every raw integer passed to this
/// crate is converted; rewriters downstream only ever see already-coerced
/// `i64`s. See the "Integer coercion point" design note.
pub(crate) fn coerce_int<T: ToPrimitive>(value: T) -> Result<i64> {
    value
        .to_i64()
        .ok_or(Error::BadIndex { what: "integer does not fit in i64" })
}

/// An index that selects a single position on one axis.
///
/// `Integer(3)` behaves like numpy's `a[3]`: it drops the indexed axis from
/// the result shape (see [`Integer::newshape`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer {
    value: i64,
}

impl Integer {
    /// Constructs an `Integer`, coercing `value` to `i64` exactly once.
    pub fn new<T: ToPrimitive>(value: T) -> Result<Self> {
        Ok(Integer { value: coerce_int(value)? })
    }

    /// The underlying integer, exactly as stored (possibly negative).
    pub fn raw(&self) -> i64 {
        self.value
    }

    /// Normalizes this index against an axis of length `n`, failing with
    /// [`Error::OutOfBounds`] if it doesn't satisfy `-n <= i < n`.
    ///
    /// The result is always in `[0, n)`.
    pub fn reduce(&self, axis_len: usize) -> Result<Integer> {
        let n = axis_len as i64;
        let normalized = if self.value < 0 { self.value + n } else { self.value };
        if normalized < 0 || normalized >= n {
            return Err(Error::OutOfBounds { index: self.value, axis_len });
        }
        Ok(Integer { value: normalized })
    }

    /// `newshape` of an `Integer` always drops the indexed axis: an integer
    /// index selects one element, so the axis disappears from the result.
    pub fn newshape(&self, shape: impl IntoShape) -> Result<crate::shape::Shape> {
        let shape = shape.into_shape();
        let axis_len = *shape.first().ok_or(Error::OutOfBounds {
            index: self.value,
            axis_len: 0,
        })?;
        self.reduce(axis_len)?;
        Ok(shape.as_slice()[1..].to_vec().into_iter().collect())
    }
}

impl From<Integer> for i64 {
    fn from(i: Integer) -> i64 {
        i.value
    }
}

macro_rules! impl_try_from_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Integer {
                type Error = Error;
                fn try_from(value: $t) -> Result<Integer> {
                    Integer::new(value)
                }
            }
        )*
    };
}
impl_try_from_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_negative_and_positive() {
        let i = Integer::new(-1i64).unwrap();
        assert_eq!(i.reduce(5).unwrap().raw(), 4);

        let i = Integer::new(3i64).unwrap();
        assert_eq!(i.reduce(5).unwrap().raw(), 3);
    }

    #[test]
    fn reduce_out_of_bounds() {
        let i = Integer::new(5i64).unwrap();
        assert_eq!(i.reduce(5), Err(Error::OutOfBounds { index: 5, axis_len: 5 }));

        let i = Integer::new(-6i64).unwrap();
        assert_eq!(i.reduce(5), Err(Error::OutOfBounds { index: -6, axis_len: 5 }));
    }

    #[test]
    fn newshape_drops_axis() {
        let i = Integer::new(1i64).unwrap();
        assert_eq!(i.newshape([3usize, 4, 5]).unwrap().as_slice(), &[4, 5]);
    }
}
