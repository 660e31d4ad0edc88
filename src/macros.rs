// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Builds an [`Index`](crate::Index) from a mix of integers, ranges, and
/// [`Ellipsis`](crate::Ellipsis), the way `a[1, 2..5, .., 0]` would read in
/// Python.
///
/// A single argument is returned as-is (an `Integer`, a `Slice`, or
/// `Ellipsis`); more than one is wrapped in a [`Tuple`](crate::Tuple).
///
/// ```
/// use ndindex::{ndindex, Ellipsis};
///
/// let idx = ndindex!(1i64, 2i64..5, Ellipsis, 0i64).unwrap();
/// assert!(idx.has_ellipsis());
/// ```
#[macro_export]
macro_rules! ndindex {
    ($x:expr $(,)?) => {
        Ok::<$crate::Index, $crate::Error>($crate::IntoIndexVariant::into_index_variant($x))
    };
    ($($x:expr),+ $(,)?) => {{
        let args: $crate::__private::Vec<$crate::Index> = $crate::__private::Vec::from([
            $($crate::IntoIndexVariant::into_index_variant($x)),+
        ]);
        $crate::Tuple::new(args).map($crate::Index::Tuple)
    }};
}
