// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::ellipsis::Ellipsis;
use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::shape::{IntoShape, Shape};
use crate::slice::Slice;
use crate::tuple::Tuple;

/// The result of classifying a raw value with [`ndindex`]: one of the four
/// closed variants this crate's index algebra supports.
///
/// Unlike numpy's fancy indexing, there is no fifth "array of indices" or
/// "array of bools" case — see the crate-level docs for what's out of scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Index {
    /// Selects a single position on one axis, dropping that axis.
    Integer(Integer),
    /// Selects a strided half-open range on one axis.
    Slice(Slice),
    /// Expands to zero or more full-axis slices.
    Ellipsis(Ellipsis),
    /// A heterogeneous sequence of the above, indexing multiple axes at once.
    Tuple(Tuple),
}

impl Index {
    /// Rewrites this index to a canonical, minimal form.
    ///
    /// Without a `shape`, only axis-independent simplifications apply. With
    /// one, the index becomes fully self-contained: safe to replay against
    /// any array of that exact shape without re-checking bounds.
    pub fn reduce(&self, shape: Option<impl IntoShape>) -> Result<Index> {
        match self {
            Index::Integer(i) => match shape {
                Some(shape) => {
                    let shape = shape.into_shape();
                    let axis_len = *shape
                        .as_slice()
                        .get(0)
                        .ok_or(Error::TooManyIndices { num_indices: 1, ndim: shape.ndim() })?;
                    Ok(Index::Integer(i.reduce(axis_len)?))
                }
                None => Ok(Index::Integer(*i)),
            },
            Index::Slice(s) => match shape {
                Some(shape) => Ok(Index::Slice(s.reduce(shape, 0)?)),
                None => Ok(Index::Slice(s.reduce_no_shape())),
            },
            Index::Ellipsis(e) => Ok(Index::Ellipsis(*e)),
            Index::Tuple(t) => t.reduce(shape),
        }
    }

    /// The shape of `array[self]` given `array`'s own shape.
    pub fn newshape(&self, shape: impl IntoShape) -> Result<Shape> {
        match self {
            Index::Integer(i) => i.newshape(shape),
            Index::Slice(s) => s.newshape(shape),
            Index::Ellipsis(_) => Ok(shape.into_shape()),
            Index::Tuple(t) => t.newshape(shape),
        }
    }

    /// Expands this index into an ellipsis-free [`Tuple`] with exactly one
    /// entry per axis of `shape`.
    pub fn expand(&self, shape: impl IntoShape) -> Result<Tuple> {
        match self {
            Index::Tuple(t) => t.expand(shape),
            other => Tuple::new(vec![other.clone()])?.expand(shape),
        }
    }

    /// `true` for `Index::Tuple(t)` where `t.has_ellipsis()`, `true` for a
    /// bare `Index::Ellipsis`, `false` otherwise.
    pub fn has_ellipsis(&self) -> bool {
        match self {
            Index::Ellipsis(_) => true,
            Index::Tuple(t) => t.has_ellipsis(),
            _ => false,
        }
    }
}

/// Infallible conversions into one of `Index`'s four variants, used by
/// [`ndindex`] and the [`crate::ndindex!`] macro. Integers and ranges always
/// succeed; use [`Integer::new`]/[`Slice::new`] directly if the source value
/// might not fit in `i64`.
pub trait IntoIndexVariant {
    /// Converts `self` into an `Index`.
    fn into_index_variant(self) -> Index;
}

impl IntoIndexVariant for Index {
    fn into_index_variant(self) -> Index {
        self
    }
}
impl IntoIndexVariant for Integer {
    fn into_index_variant(self) -> Index {
        Index::Integer(self)
    }
}
impl IntoIndexVariant for Slice {
    fn into_index_variant(self) -> Index {
        Index::Slice(self)
    }
}
impl IntoIndexVariant for Ellipsis {
    fn into_index_variant(self) -> Index {
        Index::Ellipsis(self)
    }
}
impl IntoIndexVariant for Tuple {
    fn into_index_variant(self) -> Index {
        Index::Tuple(self)
    }
}

macro_rules! impl_into_index_variant_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoIndexVariant for $t {
                fn into_index_variant(self) -> Index {
                    Index::Integer(Integer::new(self).expect("primitive integer always fits"))
                }
            }
        )*
    };
}
impl_into_index_variant_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoIndexVariant for Range<i64> {
    fn into_index_variant(self) -> Index {
        Slice::new(Some(self.start), Some(self.end), None::<i64>).expect("fits by construction")
    }
}
impl IntoIndexVariant for RangeFrom<i64> {
    fn into_index_variant(self) -> Index {
        Slice::new(Some(self.start), None::<i64>, None::<i64>).expect("fits by construction")
    }
}
impl IntoIndexVariant for RangeTo<i64> {
    fn into_index_variant(self) -> Index {
        Slice::new(None::<i64>, Some(self.end), None::<i64>).expect("fits by construction")
    }
}
impl IntoIndexVariant for RangeFull {
    fn into_index_variant(self) -> Index {
        Index::Slice(Slice::full())
    }
}

/// Classifies a raw value as one of this crate's four index variants.
///
/// This is the dispatcher every concrete constructor (`Integer::new`,
/// `Slice::new`, a bare `Ellipsis`, `Tuple::new`) ultimately funnels into;
/// calling it directly is convenient when the shape of the raw value is
/// generic or only known dynamically.
pub fn ndindex(raw: impl IntoIndexVariant) -> Index {
    raw.into_index_variant()
}
