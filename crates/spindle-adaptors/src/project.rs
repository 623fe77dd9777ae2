// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Projections over ranges of pairs and of pointers.
//!
//! [`range_of_first`] and [`range_of_second`] select one half of each
//! pair-like element; they work on owned tuples (such as the elements of a
//! zipped range) and on references to tuples. [`range_with_deref`] looks
//! through a range of smart pointers to the values they point at.

use crate::transform::{TransformedRange, transform};
use spindle_core::cursor::{Cursor, ReferenceOf};
use spindle_core::range::Range;
use std::ops::Deref;

/// An element with two named halves.
pub trait Pair {
    type First;
    type Second;

    fn into_first(self) -> Self::First;

    fn into_second(self) -> Self::Second;
}

impl<A, B> Pair for (A, B) {
    type First = A;
    type Second = B;

    #[inline]
    fn into_first(self) -> A {
        self.0
    }

    #[inline]
    fn into_second(self) -> B {
        self.1
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;
    type Second = &'a B;

    #[inline]
    fn into_first(self) -> &'a A {
        &self.0
    }

    #[inline]
    fn into_second(self) -> &'a B {
        &self.1
    }
}

/// Projection selecting the first half of each element.
pub type FirstProjection<R> =
    fn(ReferenceOf<<R as Range>::Cursor>) -> <ReferenceOf<<R as Range>::Cursor> as Pair>::First;

/// Projection selecting the second half of each element.
pub type SecondProjection<R> =
    fn(ReferenceOf<<R as Range>::Cursor>) -> <ReferenceOf<<R as Range>::Cursor> as Pair>::Second;

/// The first halves of the pairs in `range`.
///
/// ```rust
/// use spindle_adaptors::project::range_of_first;
/// use spindle_core::range::RangeFacade;
///
/// let scores = vec![("ada", 3), ("bob", 5)];
/// let names: Vec<_> = range_of_first(&scores).iter().copied().collect();
/// assert_eq!(names, vec!["ada", "bob"]);
/// ```
#[inline]
pub fn range_of_first<R>(range: R) -> TransformedRange<R, FirstProjection<R>>
where
    R: Range,
    ReferenceOf<R::Cursor>: Pair,
{
    let project: FirstProjection<R> = <ReferenceOf<R::Cursor> as Pair>::into_first;
    transform(range, project)
}

/// The second halves of the pairs in `range`.
#[inline]
pub fn range_of_second<R>(range: R) -> TransformedRange<R, SecondProjection<R>>
where
    R: Range,
    ReferenceOf<R::Cursor>: Pair,
{
    let project: SecondProjection<R> = <ReferenceOf<R::Cursor> as Pair>::into_second;
    transform(range, project)
}

#[inline]
fn deref_pointer<P>(pointer: &P) -> &P::Target
where
    P: Deref,
{
    pointer
}

/// The pointees of a range of smart pointers.
///
/// ```rust
/// use spindle_adaptors::project::range_with_deref;
/// use spindle_core::range::RangeFacade;
///
/// let boxed = vec![Box::new(1), Box::new(2)];
/// let total: i32 = range_with_deref(&boxed).iter().sum();
/// assert_eq!(total, 3);
/// ```
#[inline]
pub fn range_with_deref<'a, R, P>(range: R) -> TransformedRange<R, fn(&'a P) -> &'a P::Target>
where
    R: Range,
    R::Cursor: Cursor<Reference = &'a P>,
    P: Deref + 'a,
    P::Target: 'a,
{
    let project: fn(&'a P) -> &'a P::Target = deref_pointer::<P>;
    transform(range, project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zip::zip;
    use spindle_core::cursor::index::index_range;
    use spindle_core::range::RangeFacade;
    use std::rc::Rc;

    #[test]
    fn test_halves_of_tuple_references() {
        let edges = vec![(1, 'a'), (2, 'b'), (3, 'c')];
        let firsts = range_of_first(&edges);
        let seconds = range_of_second(&edges);
        assert_eq!(firsts.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seconds.iter().copied().collect::<String>(), "abc");
        assert_eq!(firsts.size(), 3);
        assert_eq!(*seconds.at(1), 'b');
    }

    #[test]
    fn test_halves_of_zipped_range() {
        let names = ["x", "y"];
        let zipped = zip((index_range(0_u8, 2), &names));
        assert_eq!(range_of_first(zipped).iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(
            range_of_second(zipped).iter().copied().collect::<Vec<_>>(),
            vec!["x", "y"]
        );
    }

    #[test]
    fn test_first_refers_into_storage() {
        let pairs = [(10, 20)];
        let first = range_of_first(&pairs).front();
        assert!(std::ptr::eq(first, &pairs[0].0));
    }

    #[test]
    fn test_deref_boxes_and_strings() {
        let words = vec![String::from("spin"), String::from("dle")];
        let joined: String = range_with_deref(&words).iter().collect();
        assert_eq!(joined, "spindle");

        let shared = vec![Rc::new(4), Rc::new(8)];
        let pointees = range_with_deref(&shared);
        assert_eq!(pointees.iter().rev().copied().collect::<Vec<_>>(), vec![8, 4]);
        assert!(std::ptr::eq(pointees.front(), &*shared[0]));
    }
}
