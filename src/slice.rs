// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::gcd::arith_seq_intersection;
use crate::index::Index;
use crate::integer::coerce_int;
use crate::shape::{IntoShape, Shape};

/// A half-open, strided range of axis positions: numpy/Python's `start:stop:step`.
///
/// Construction canonicalizes eagerly and cheaply (it never needs to know an
/// axis length): a zero step is rejected, a literally empty `start:stop`
/// collapses to the canonical empty slice `0:0:1`, and a `start:stop` that
/// denotes exactly one position collapses to an [`Integer`](crate::Integer).
/// Axis-dependent rewriting happens later, in [`Slice::reduce`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
}

impl Slice {
    /// Constructs a `Slice`, canonicalizing degenerate cases to an
    /// `Index::Integer` or the canonical empty slice where possible.
    ///
    /// `step` defaults to `1` when `None`; a `step` of `0` is
    /// [`Error::BadStep`].
    pub fn new<S, T, P>(start: Option<S>, stop: Option<T>, step: Option<P>) -> Result<Index>
    where
        S: ToPrimitive,
        T: ToPrimitive,
        P: ToPrimitive,
    {
        let start = start.map(coerce_int).transpose()?;
        let stop = stop.map(coerce_int).transpose()?;
        let step = step.map(coerce_int).transpose()?.unwrap_or(1);
        if step == 0 {
            return Err(Error::BadStep);
        }
        Ok(Self::canonicalize(start, stop, step))
    }

    /// The slice selecting every position of an axis, in order: `::1`.
    pub fn full() -> Slice {
        Slice { start: None, stop: None, step: 1 }
    }

    fn canonicalize(start: Option<i64>, stop: Option<i64>, step: i64) -> Index {
        if let (Some(s), Some(t)) = (start, stop) {
            let len = abstract_len(s, t, step);
            if len == 0 && ((step > 0 && s <= t) || (step < 0 && t <= s)) {
                return Index::Slice(Slice { start: Some(0), stop: Some(0), step: 1 });
            }
            if len == 1 {
                // `Integer::new` cannot fail here: `s` already fits in i64.
                return Index::Integer(crate::Integer::new(s).expect("in-range i64"));
            }
        }
        Index::Slice(Slice { start, stop, step })
    }

    /// Builds a `Slice` bypassing the `Integer`/canonical-empty collapse
    /// construction performs. Used internally by [`Slice::reduce`] and
    /// [`Slice::as_subindex`], which must always return a `Slice`.
    fn raw(start: Option<i64>, stop: Option<i64>, step: i64) -> Slice {
        Slice { start, stop, step }
    }

    /// The raw `start`, as given (possibly negative, possibly absent).
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// The raw `stop`, as given (possibly negative, possibly absent, or the
    /// `-1` "before the beginning" sentinel produced by [`Slice::reduce`]).
    pub fn stop(&self) -> Option<i64> {
        self.stop
    }

    /// The step. Never `0`.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// The `(start, stop, step)` triple exactly as it would be passed to an
    /// indexing operation.
    pub fn raw_parts(&self) -> (Option<i64>, Option<i64>, i64) {
        (self.start, self.stop, self.step)
    }

    /// The number of elements this slice selects, when that doesn't depend
    /// on an unknown axis length.
    ///
    /// Exact when both endpoints are explicit and share a sign consistent
    /// with `step`'s direction (see the design notes on `len`); conservatively
    /// [`Error::NoLength`] otherwise, even in some cases where a finite
    /// bound does in fact exist for every axis length (e.g. mixed-sign
    /// endpoints) — this crate does not attempt to prove those tighter
    /// bounds.
    pub fn len(&self) -> Result<usize> {
        let same_sign = |a: i64, b: i64| (a >= 0) == (b >= 0);
        let n = if self.step > 0 {
            let stop = self.stop.ok_or(Error::NoLength)?;
            let start = self.start.unwrap_or(0);
            if !same_sign(start, stop) {
                return Err(Error::NoLength);
            }
            abstract_len(start, stop, self.step)
        } else {
            let start = self.start.ok_or(Error::NoLength)?;
            let stop = self.stop.unwrap_or(-1);
            if !same_sign(start, stop) {
                return Err(Error::NoLength);
            }
            abstract_len(start, stop, self.step)
        };
        Ok(n as usize)
    }

    /// Is this slice empty for every possible axis length?
    pub fn is_empty(&self) -> bool {
        self.start == Some(0) && self.stop == Some(0) && self.step == 1
    }

    /// Rewrites this slice against no axis length: only the
    /// axis-size-independent simplifications apply.
    ///
    /// Defaults `start` to `0` when `step > 0` and it was unset, and
    /// collapses a literally empty `start == stop` range to the canonical
    /// empty slice. `stop` is left as given — including `None` — since this
    /// crate makes the conservative choice described in the design notes on
    /// the "reduce with no shape" open question.
    pub fn reduce_no_shape(&self) -> Slice {
        let mut start = self.start;
        let stop = self.stop;
        let step = self.step;
        if step > 0 && start.is_none() {
            start = Some(0);
        }
        if let (Some(s), Some(t)) = (start, stop) {
            if s == t {
                return Slice::raw(Some(0), Some(0), 1);
            }
        }
        Slice::raw(start, stop, step)
    }

    /// Rewrites this slice against an axis of length `n`: the slice's
    /// meaning becomes self-contained, independent of any array.
    ///
    /// The result always satisfies `start >= 0`, `stop.is_some()`, and
    /// `step.is_some()` (trivially true here since `step` is never
    /// optional). Always a `Slice`, never an `Integer`, even when it denotes
    /// exactly one position — dimensionality must be preserved so the result
    /// can still be used against an array of the given shape.
    pub fn reduce(&self, shape: impl IntoShape, axis: usize) -> Result<Slice> {
        let shape = shape.into_shape();
        let n = *shape
            .as_slice()
            .get(axis)
            .ok_or(Error::TooManyIndices { num_indices: axis + 1, ndim: shape.ndim() })? as i64;

        let norm = |v: i64| if v < 0 { v + n } else { v };
        let (start, stop) = if self.step > 0 {
            let start = self.start.map(norm).unwrap_or(0).clamp(0, n);
            let stop = self.stop.map(norm).unwrap_or(n).clamp(0, n);
            (start, stop)
        } else {
            let start = self.start.map(norm).unwrap_or(n - 1).clamp(-1, n - 1);
            let stop = self.stop.map(norm).unwrap_or(-1).clamp(-1, n - 1);
            (start, stop)
        };

        let empty = if self.step > 0 { start >= stop } else { start <= stop };
        if empty {
            return Ok(Slice::raw(Some(0), Some(0), 1));
        }

        let len = abstract_len(start, stop, self.step);
        if len == 1 {
            return Ok(Slice::raw(Some(start), Some(start + 1), 1));
        }
        let last = start + (len - 1) * self.step;
        Ok(Slice::raw(Some(start), Some(last + self.step), self.step))
    }

    /// The shape obtained by applying this slice to one axis of `shape`,
    /// i.e. `shape` with its first axis replaced by this slice's length on
    /// that axis.
    pub fn newshape(&self, shape: impl IntoShape) -> Result<Shape> {
        let shape = shape.into_shape();
        if shape.ndim() < 1 {
            return Err(Error::TooManyIndices { num_indices: 1, ndim: 0 });
        }
        let reduced = self.reduce(&shape, 0)?;
        let len = reduced.len().expect("reduce(shape) always has a known length");
        let mut out = alloc::vec::Vec::with_capacity(shape.ndim());
        out.push(len);
        out.extend_from_slice(&shape.as_slice()[1..]);
        Ok(out.into_iter().collect())
    }

    /// Finds a slice `t` such that, for an array `a` of any shape compatible
    /// with both slices, `a[self][t] == a[self.as_subindex(other)]`... no:
    /// precisely, such that indexing `other`'s *result* by `t` gives the
    /// same elements as indexing the original array by both `self` and
    /// `other` (the elements common to both).
    ///
    /// Only supports the bounded, ascending subset described in the design
    /// notes: both slices must already be reduced against some shape (a
    /// nonnegative, explicit `start`, an explicit `stop`, and a positive
    /// `step`). Anything else is [`Error::NotImplemented`].
    pub fn as_subindex(&self, other: &Slice) -> Result<Slice> {
        let bounded = |s: &Slice| -> Result<(i64, i64)> {
            if s.step <= 0 {
                return Err(Error::NotImplemented { reason: "step must be positive" });
            }
            let start = s.start.ok_or(Error::NotImplemented { reason: "start must be explicit" })?;
            let stop = s.stop.ok_or(Error::NotImplemented { reason: "stop must be explicit" })?;
            if start < 0 {
                return Err(Error::NotImplemented { reason: "start must be nonnegative" });
            }
            Ok((start, stop))
        };
        let (start1, stop1) = bounded(self)?;
        let (start2, stop2) = bounded(other)?;

        let len1 = abstract_len(start1, stop1, self.step);
        let len2 = abstract_len(start2, stop2, other.step);
        if len1 == 0 || len2 == 0 {
            return Ok(Slice::raw(Some(0), Some(0), 1));
        }
        let max1 = start1 + (len1 - 1) * self.step;
        let max2 = start2 + (len2 - 1) * other.step;

        match arith_seq_intersection(start1, max1, self.step, start2, max2, other.step) {
            None => Ok(Slice::raw(Some(0), Some(0), 1)),
            Some((first, last, common_step)) => {
                // Every element of the intersection is congruent to `start2`
                // modulo `other.step` by construction, so this divides evenly.
                let local_start = (first - start2) / other.step;
                let local_step = common_step / other.step;
                let count = (last - first) / common_step + 1;
                let local_stop = local_start + count * local_step;
                Ok(Slice::raw(Some(local_start), Some(local_stop), local_step))
            }
        }
    }
}

/// The length of the literal integer range `start..stop` stepping by `step`
/// (no axis-length normalization, no wraparound — just `range(start, stop,
/// step)` the way Python's builtin would compute it).
pub(crate) fn abstract_len(start: i64, stop: i64, step: i64) -> i64 {
    if step > 0 {
        if stop > start { (stop - start + step - 1) / step } else { 0 }
    } else {
        let step = -step;
        if start > stop { (start - stop + step - 1) / step } else { 0 }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{}", s)?;
        }
        write!(f, ":")?;
        if let Some(t) = self.stop {
            write!(f, "{}", t)?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(start: Option<i64>, stop: Option<i64>, step: i64) -> Slice {
        Slice::raw(start, stop, step)
    }

    #[test]
    fn zero_step_rejected() {
        assert_eq!(Slice::new(Some(0i64), Some(1i64), Some(0i64)), Err(Error::BadStep));
    }

    #[test]
    fn trivial_empty_collapses() {
        let idx = Slice::new(Some(3i64), Some(3i64), Some(1i64)).unwrap();
        assert_eq!(idx, Index::Slice(s(Some(0), Some(0), 1)));
    }

    #[test]
    fn single_element_collapses_to_integer() {
        let idx = Slice::new(Some(3i64), Some(4i64), Some(1i64)).unwrap();
        assert_eq!(idx, Index::Integer(crate::Integer::new(3i64).unwrap()));
    }

    #[test]
    fn fixed_point_stays_slice() {
        let idx = Slice::new(Some(3i64), Some(7i64), Some(2i64)).unwrap();
        assert_eq!(idx, Index::Slice(s(Some(3), Some(7), 2)));
    }

    #[test]
    fn reduce_full_axis() {
        let full = Slice::full();
        let reduced = full.reduce(5usize, 0).unwrap();
        assert_eq!(reduced, s(Some(0), Some(5), 1));
        assert_eq!(reduced.len().unwrap(), 5);
    }

    #[test]
    fn reduce_negative_step_no_stop() {
        let sl = s(None, None, -1);
        let reduced = sl.reduce(2usize, 0).unwrap();
        assert_eq!(reduced, s(Some(1), Some(-1), -1));
    }

    #[test]
    fn reduce_wraparound_empty() {
        let sl = s(Some(-3), Some(1), 1);
        let reduced = sl.reduce(5usize, 0).unwrap();
        assert!(reduced.is_empty());
    }

    #[test]
    fn reduce_start_always_nonnegative() {
        let sl = s(Some(-10), None, -1);
        let reduced = sl.reduce(2usize, 0).unwrap();
        assert!(reduced.start().unwrap() >= 0);
    }

    #[test]
    fn len_same_sign_exact() {
        assert_eq!(s(Some(3), Some(7), 2).len().unwrap(), 2);
    }

    #[test]
    fn len_open_ended_has_no_length() {
        assert_eq!(s(Some(3), None, 1).len(), Err(Error::NoLength));
    }

    #[test]
    fn len_mixed_sign_conservatively_has_no_length() {
        assert_eq!(s(Some(-3), Some(1), 1).len(), Err(Error::NoLength));
    }

    #[test]
    fn as_subindex_matches_spec_example() {
        let a = s(Some(1), Some(7), 2);
        let b = s(Some(0), Some(10), 1);
        assert_eq!(a.as_subindex(&b).unwrap(), s(Some(1), Some(7), 2));
    }

    #[test]
    fn as_subindex_disjoint_is_empty() {
        let a = s(Some(0), Some(10), 2);
        let b = s(Some(1), Some(11), 2);
        assert!(a.as_subindex(&b).unwrap().is_empty());
    }

    #[test]
    fn as_subindex_exhaustive_against_brute_force() {
        let axis: Vec<i64> = (0..12).collect();
        let eval = |sl: &Slice| -> Vec<i64> {
            let (start, stop, step) = sl.raw_parts();
            let (mut i, stop, step) = (start.unwrap(), stop.unwrap(), step);
            let mut out = vec![];
            while (step > 0 && i < stop) || (step < 0 && i > stop) {
                out.push(axis[i as usize]);
                i += step;
            }
            out
        };
        let candidates = [
            s(Some(0), Some(10), 1),
            s(Some(2), Some(9), 2),
            s(Some(1), Some(12), 3),
            s(Some(0), Some(12), 1),
        ];
        for a in &candidates {
            for b in &candidates {
                let t = a.as_subindex(b).unwrap();
                let a_vals: std::collections::BTreeSet<_> = eval(a).into_iter().collect();
                let b_vals = eval(b);
                let expect: Vec<i64> =
                    b_vals.iter().copied().filter(|v| a_vals.contains(v)).collect();
                let got: Vec<i64> = {
                    let (start, stop, step) = t.raw_parts();
                    let (mut i, stop, step) = (start.unwrap(), stop.unwrap(), step);
                    let mut out = vec![];
                    while (step > 0 && i < stop) || (step < 0 && i > stop) {
                        out.push(b_vals[i as usize]);
                        i += step;
                    }
                    out
                };
                assert_eq!(got, expect, "a={:?} b={:?}", a, b);
            }
        }
    }
}
