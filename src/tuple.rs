// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;

use crate::ellipsis::Ellipsis;
use crate::error::{Error, Result};
use crate::index::Index;
use crate::shape::{IntoShape, Shape};
use crate::slice::Slice;

/// A heterogeneous sequence of [`Integer`](crate::Integer)s,
/// [`Slice`](crate::Slice)s, and at most one [`Ellipsis`], indexing several
/// axes of an array at once.
///
/// A `Tuple` shorter than an array's dimensionality implicitly pads the
/// remaining trailing axes with full slices, the same convention numpy
/// uses for `a[0, 1]` on a 3-d array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple {
    args: Vec<Index>,
}

impl Tuple {
    /// Constructs a `Tuple`, rejecting more than one [`Ellipsis`] among
    /// `args`.
    pub fn new(args: Vec<Index>) -> Result<Tuple> {
        if args.iter().filter(|a| matches!(a, Index::Ellipsis(_))).count() > 1 {
            return Err(Error::BadEllipsis);
        }
        Ok(Tuple { args })
    }

    fn from_parts(args: Vec<Index>) -> Tuple {
        Tuple { args }
    }

    /// The tuple's elements, in order.
    pub fn args(&self) -> &[Index] {
        &self.args
    }

    /// Whether any element is an [`Ellipsis`].
    pub fn has_ellipsis(&self) -> bool {
        self.args.iter().any(|a| matches!(a, Index::Ellipsis(_)))
    }

    /// The position of the (at most one) [`Ellipsis`], if present.
    pub fn ellipsis_index(&self) -> Option<usize> {
        self.args.iter().position(|a| matches!(a, Index::Ellipsis(_)))
    }

    /// Splits `args` into the entries before and after the ellipsis (if
    /// any).
    fn split(&self) -> (&[Index], Option<&[Index]>) {
        match self.ellipsis_index() {
            Some(e) => (&self.args[..e], Some(&self.args[e + 1..])),
            None => (&self.args[..], None),
        }
    }

    /// Rewrites this tuple to a canonical, minimal form.
    ///
    /// Without a `shape`, each [`Slice`] element is rewritten via
    /// [`Slice::reduce_no_shape`] and the rest are left as-is — the
    /// `Ellipsis` can't safely be touched without knowing how many axes it
    /// would expand to. With a `shape`, every element is fully reduced
    /// against its resolved axis, a trailing zero-width `Ellipsis` is
    /// dropped, and trailing full-axis slices are dropped back to the
    /// implicit padding they came from. Either way, a `Tuple` that reduces
    /// to exactly one element is returned as that element directly, never
    /// wrapped.
    pub fn reduce(&self, shape: Option<impl IntoShape>) -> Result<Index> {
        let shape = match shape {
            Some(shape) => shape.into_shape(),
            None => return self.reduce_no_shape(),
        };
        let ndim = shape.ndim();

        let (front, back) = self.split();
        let k = front.len();
        let m = back.map_or(0, |b| b.len());
        if k + m > ndim {
            return Err(Error::TooManyIndices { num_indices: k + m, ndim });
        }

        let mut front: Vec<Index> = front
            .iter()
            .enumerate()
            .map(|(axis, arg)| reduce_one(arg, &shape, axis))
            .collect::<Result<_>>()?;

        let has_ellipsis = back.is_some();
        let mut back: Vec<Index> = match back {
            Some(back) => back
                .iter()
                .enumerate()
                .map(|(j, arg)| reduce_one(arg, &shape, ndim - m + j))
                .collect::<Result<_>>()?,
            None => Vec::new(),
        };

        // Drop full-axis slices adjacent to the ellipsis on either side:
        // they're no-ops its implicit span can absorb. `front`'s tail sits
        // immediately before the ellipsis; `back`'s tail is the tuple's own
        // trailing edge.
        while let Some(Index::Slice(s)) = front.last() {
            let axis = front.len() - 1;
            if is_full_axis_slice(s, shape[axis] as i64) {
                front.pop();
            } else {
                break;
            }
        }
        if has_ellipsis {
            while let Some(Index::Slice(s)) = back.last() {
                let axis = ndim - m + back.len() - 1;
                if is_full_axis_slice(s, shape[axis] as i64) {
                    back.pop();
                } else {
                    break;
                }
            }
        }

        // A zero-width ellipsis (its span was already 0 before any of the
        // above trimming) that's become trailing now that `back` emptied
        // out is pure noise and gets dropped; one that still has real
        // content after it, or still expands to a nonzero span, stays as an
        // explicit placeholder.
        let width = ndim - (k + m);
        let keep_ellipsis = has_ellipsis && !(back.is_empty() && width == 0);

        let mut result = front;
        if keep_ellipsis {
            result.push(Index::Ellipsis(Ellipsis));
        }
        result.extend(back);

        match result.len() {
            1 => Ok(result.into_iter().next().unwrap()),
            _ => Ok(Index::Tuple(Tuple::from_parts(result))),
        }
    }

    fn reduce_no_shape(&self) -> Result<Index> {
        let args: Vec<Index> = self
            .args
            .iter()
            .map(|a| match a {
                Index::Slice(s) => Index::Slice(s.reduce_no_shape()),
                other => other.clone(),
            })
            .collect();
        match args.len() {
            1 => Ok(args.into_iter().next().unwrap()),
            _ => Ok(Index::Tuple(Tuple::from_parts(args))),
        }
    }

    /// Expands this tuple into an ellipsis-free form with exactly one
    /// entry per axis of `shape`: the `Ellipsis` (or the implicit trailing
    /// padding, if there's no `Ellipsis`) is replaced by explicit
    /// full-axis [`Slice`]s, and every element is fully reduced.
    pub fn expand(&self, shape: impl IntoShape) -> Result<Tuple> {
        let shape = shape.into_shape();
        let ndim = shape.ndim();
        let (front, back) = self.split();
        let k = front.len();
        let m = back.map_or(0, |b| b.len());
        if k + m > ndim {
            return Err(Error::TooManyIndices { num_indices: k + m, ndim });
        }

        let mut out = Vec::with_capacity(ndim);
        for (axis, arg) in front.iter().enumerate() {
            out.push(reduce_one(arg, &shape, axis)?);
        }
        let width = ndim - k - m;
        for axis in k..k + width {
            out.push(Index::Slice(Slice::full().reduce(&shape, axis)?));
        }
        if let Some(back) = back {
            for (j, arg) in back.iter().enumerate() {
                out.push(reduce_one(arg, &shape, ndim - m + j)?);
            }
        }
        Ok(Tuple::from_parts(out))
    }

    /// The shape of `array[self]` given `array`'s own shape: every
    /// [`Integer`](crate::Integer) entry drops its axis, every [`Slice`]
    /// entry replaces it with the slice's reduced length.
    pub fn newshape(&self, shape: impl IntoShape) -> Result<Shape> {
        let expanded = self.expand(shape)?;
        let mut out = Vec::new();
        for arg in expanded.args() {
            match arg {
                Index::Integer(_) => {}
                Index::Slice(s) => out.push(s.len().expect("reduced slice always has a length")),
                Index::Ellipsis(_) | Index::Tuple(_) => {
                    unreachable!("expand() never leaves an ellipsis or nested tuple")
                }
            }
        }
        Ok(out.into_iter().collect())
    }
}

fn reduce_one(arg: &Index, shape: &Shape, axis: usize) -> Result<Index> {
    let axis_len = *shape
        .as_slice()
        .get(axis)
        .ok_or(Error::TooManyIndices { num_indices: axis + 1, ndim: shape.ndim() })?;
    match arg {
        Index::Integer(i) => Ok(Index::Integer(i.reduce(axis_len)?)),
        Index::Slice(s) => Ok(Index::Slice(s.reduce(shape, axis)?)),
        Index::Ellipsis(_) => Err(Error::BadEllipsis),
        Index::Tuple(_) => Err(Error::BadIndex { what: "nested Tuple" }),
    }
}

fn is_full_axis_slice(s: &Slice, axis_len: i64) -> bool {
    s.raw_parts() == (Some(0), Some(axis_len), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;

    fn int(v: i64) -> Index {
        Index::Integer(Integer::new(v).unwrap())
    }

    #[test]
    fn rejects_two_ellipses() {
        let err = Tuple::new(vec![
            Index::Ellipsis(Ellipsis),
            Index::Ellipsis(Ellipsis),
        ])
        .unwrap_err();
        assert_eq!(err, Error::BadEllipsis);
    }

    #[test]
    fn reduce_drops_singleton_wrapper() {
        let t = Tuple::new(vec![int(1)]).unwrap();
        assert_eq!(t.reduce(None::<Shape>).unwrap(), int(1));
    }

    #[test]
    fn reduce_no_shape_leaves_ellipsis() {
        let t = Tuple::new(vec![int(0), Index::Ellipsis(Ellipsis)]).unwrap();
        let reduced = t.reduce(None::<Shape>).unwrap();
        assert_eq!(
            reduced,
            Index::Tuple(Tuple::from_parts(vec![int(0), Index::Ellipsis(Ellipsis)]))
        );
    }

    #[test]
    fn reduce_drops_trailing_ellipsis_with_shape() {
        let t = Tuple::new(vec![int(0), Index::Ellipsis(Ellipsis)]).unwrap();
        let reduced = t.reduce(Some([3usize])).unwrap();
        assert_eq!(reduced, int(0));
    }

    #[test]
    fn reduce_drops_trailing_full_slice() {
        let t = Tuple::new(vec![
            Index::Slice(Slice::full()),
            int(1),
        ])
        .unwrap();
        // second axis full-slice dropped would matter only if it were
        // trailing; here the trailing element is an Integer so nothing
        // is dropped.
        let reduced = t.reduce(Some([4usize, 5])).unwrap();
        assert!(matches!(reduced, Index::Tuple(_)));
    }

    #[test]
    fn reduce_drops_trailing_full_axis() {
        let t = Tuple::new(vec![int(1), Index::Slice(Slice::full())]).unwrap();
        let reduced = t.reduce(Some([4usize, 5])).unwrap();
        assert_eq!(reduced, int(1));
    }

    #[test]
    fn expand_fills_all_axes() {
        let t = Tuple::new(vec![int(1), Index::Ellipsis(Ellipsis)]).unwrap();
        let expanded = t.expand([3usize, 4, 5]).unwrap();
        assert_eq!(expanded.args().len(), 3);
        assert!(!expanded.has_ellipsis());
    }

    #[test]
    fn expand_on_empty_tuple_pads_fully() {
        let t = Tuple::new(vec![]).unwrap();
        let expanded = t.expand([2usize, 3]).unwrap();
        assert_eq!(expanded.args().len(), 2);
    }

    #[test]
    fn newshape_drops_integer_axes() {
        let t = Tuple::new(vec![int(1), Index::Slice(Slice::full())]).unwrap();
        assert_eq!(t.newshape([3usize, 4]).unwrap().as_slice(), &[4]);
    }

    #[test]
    fn too_many_indices() {
        let t = Tuple::new(vec![int(0), int(0), int(0)]).unwrap();
        assert_eq!(
            t.reduce(Some([2usize, 2])),
            Err(Error::TooManyIndices { num_indices: 3, ndim: 2 })
        );
    }

    fn slice(start: i64, stop: i64) -> Index {
        Slice::new(Some(start), Some(stop), None::<i64>).unwrap()
    }

    #[test]
    fn reduce_drops_ellipsis_once_trailing_full_slice_is_absorbed() {
        let t = Tuple::new(vec![int(0), Index::Ellipsis(Ellipsis), slice(0, 3)]).unwrap();
        let reduced = t.reduce(Some([5usize, 3])).unwrap();
        assert_eq!(reduced, int(0));
    }

    #[test]
    fn reduce_keeps_ellipsis_after_absorbing_leading_full_slice() {
        let t = Tuple::new(vec![slice(0, 5), Index::Ellipsis(Ellipsis), int(0)]).unwrap();
        let reduced = t.reduce(Some([5usize, 3])).unwrap();
        assert_eq!(
            reduced,
            Index::Tuple(Tuple::from_parts(vec![Index::Ellipsis(Ellipsis), int(0)]))
        );
    }
}
