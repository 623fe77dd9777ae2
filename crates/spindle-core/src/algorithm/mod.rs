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

//! # Category-Dispatched Algorithms
//!
//! Generic algorithms that pick their strategy from the cursor's category
//! at compile time. Each category marker implements [`Traversal`] for the
//! cursors that can honor it; random-access cursors jump and measure in
//! constant time and search by bisection, everything else walks.
//!
//! ```rust
//! use spindle_core::algorithm::{distance, lower_bound};
//! use spindle_core::range::RangeFacade;
//!
//! let sorted = [1, 3, 3, 5, 8, 13];
//! let range = &sorted;
//!
//! let found = lower_bound(range.begin(), range.end(), &5);
//! assert_eq!(distance(&range.begin(), &found), 3);
//! ```

use crate::category::{Bidirectional, Category, Forward, Input, RandomAccess, Tier};
use crate::cursor::{BidirectionalCursor, CategoryOf, Cursor, RandomAccessCursor};
use crate::facade::IteratorFacade;

/// Movement and measurement strategies for one category.
pub trait Traversal<C: Cursor> {
    /// Moves `cursor` by `n` positions.
    ///
    /// Below bidirectional, `n` must not be negative.
    fn advance_by(cursor: &mut C, n: isize);

    /// Number of increments from `first` to `last`.
    ///
    /// Below random-access, `last` must be reachable from `first`.
    fn distance(first: &C, last: &C) -> isize;

    /// The first position in `[first, last)` for which `pred` is `false`,
    /// given that `pred` is `true` for a prefix of the range and `false`
    /// for the rest.
    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(C::Reference) -> bool;
}

#[inline]
fn step_forward<C: Cursor>(cursor: &mut C, n: isize) {
    debug_assert!(n >= 0, "called `advance_by` backwards on a forward-only cursor");
    for _ in 0..n {
        cursor.increment();
    }
}

#[inline]
fn count_steps<C: Cursor + Clone>(first: &C, last: &C) -> isize {
    let mut cursor = first.clone();
    let mut steps = 0;
    while !cursor.is_equal(last) {
        cursor.increment();
        steps += 1;
    }
    steps
}

#[inline]
fn scan<C: Cursor, P>(mut first: C, last: C, mut pred: P) -> C
where
    P: FnMut(C::Reference) -> bool,
{
    while !first.is_equal(&last) && pred(first.dereference()) {
        first.increment();
    }
    first
}

impl<C> Traversal<C> for Input
where
    C: Cursor + Clone,
{
    #[inline]
    fn advance_by(cursor: &mut C, n: isize) {
        step_forward(cursor, n);
    }

    #[inline]
    fn distance(first: &C, last: &C) -> isize {
        count_steps(first, last)
    }

    #[inline]
    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(C::Reference) -> bool,
    {
        scan(first, last, pred)
    }
}

impl<C> Traversal<C> for Forward
where
    C: Cursor + Clone,
{
    #[inline]
    fn advance_by(cursor: &mut C, n: isize) {
        step_forward(cursor, n);
    }

    #[inline]
    fn distance(first: &C, last: &C) -> isize {
        count_steps(first, last)
    }

    #[inline]
    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(C::Reference) -> bool,
    {
        scan(first, last, pred)
    }
}

impl<C> Traversal<C> for Bidirectional
where
    C: BidirectionalCursor + Clone,
{
    #[inline]
    fn advance_by(cursor: &mut C, n: isize) {
        if n >= 0 {
            step_forward(cursor, n);
        } else {
            for _ in n..0 {
                cursor.decrement();
            }
        }
    }

    #[inline]
    fn distance(first: &C, last: &C) -> isize {
        count_steps(first, last)
    }

    #[inline]
    fn partition_point<P>(first: C, last: C, pred: P) -> C
    where
        P: FnMut(C::Reference) -> bool,
    {
        scan(first, last, pred)
    }
}

impl<C> Traversal<C> for RandomAccess
where
    C: RandomAccessCursor + Clone,
{
    #[inline]
    fn advance_by(cursor: &mut C, n: isize) {
        cursor.advance(n);
    }

    #[inline]
    fn distance(first: &C, last: &C) -> isize {
        first.distance_to(last)
    }

    fn partition_point<P>(mut first: C, last: C, mut pred: P) -> C
    where
        P: FnMut(C::Reference) -> bool,
    {
        let mut count = first.distance_to(&last);
        debug_assert!(count >= 0, "called `partition_point` with `last` before `first`");

        while count > 0 {
            let half = count >> 1;
            let mut mid = first.clone();
            mid.advance(half);
            if pred(mid.dereference()) {
                mid.increment();
                first = mid;
                count -= half + 1;
            } else {
                count = half;
            }
        }
        first
    }
}

/// Number of increments from `first` to `last`.
#[inline]
pub fn distance<C>(first: &IteratorFacade<C>, last: &IteratorFacade<C>) -> isize
where
    C: Cursor,
    CategoryOf<C>: Traversal<C>,
{
    <CategoryOf<C> as Traversal<C>>::distance(first.cursor(), last.cursor())
}

/// Moves `it` by `n` positions.
///
/// # Panics
///
/// In debug builds, panics if `n` is negative and the cursor cannot move
/// backwards.
#[inline]
pub fn advance_by<C>(it: &mut IteratorFacade<C>, n: isize)
where
    C: Cursor,
    CategoryOf<C>: Traversal<C>,
{
    debug_assert!(
        n >= 0 || <CategoryOf<C> as Category>::TIER.satisfies(Tier::Bidirectional),
        "called `advance_by` backwards on a {} cursor",
        <CategoryOf<C> as Category>::TIER
    );
    <CategoryOf<C> as Traversal<C>>::advance_by(it.cursor_mut(), n);
}

/// First position in `[first, last)` for which `pred` is `false`.
///
/// The range must be partitioned by `pred`: all `true` elements first.
#[inline]
pub fn partition_point<C, P>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
    pred: P,
) -> IteratorFacade<C>
where
    C: Cursor,
    CategoryOf<C>: Traversal<C>,
    P: FnMut(C::Reference) -> bool,
{
    IteratorFacade::new(<CategoryOf<C> as Traversal<C>>::partition_point(
        first.into_cursor(),
        last.into_cursor(),
        pred,
    ))
}

/// First position in the sorted range `[first, last)` whose element is not
/// less than `value`.
///
/// # Panics
///
/// In debug builds, panics if the range is not sorted.
#[inline]
pub fn lower_bound<C, V>(
    first: IteratorFacade<C>,
    last: IteratorFacade<C>,
    value: V,
) -> IteratorFacade<C>
where
    C: Cursor + Clone,
    CategoryOf<C>: Traversal<C>,
    C::Reference: PartialOrd<V>,
    C::Reference: PartialOrd,
{
    debug_assert!(
        is_sorted(&first, &last),
        "called `lower_bound` on a range that is not sorted"
    );
    partition_point(first, last, |element| element < value)
}

/// Returns `true` if no element in `[first, last)` is less than its
/// predecessor.
pub fn is_sorted<C>(first: &IteratorFacade<C>, last: &IteratorFacade<C>) -> bool
where
    C: Cursor + Clone,
    C::Reference: PartialOrd,
{
    let mut cursor = first.cursor().clone();
    let last = last.cursor();
    if cursor.is_equal(last) {
        return true;
    }
    let mut previous = cursor.dereference();
    cursor.increment();
    while !cursor.is_equal(last) {
        let current = cursor.dereference();
        if current < previous {
            return false;
        }
        previous = current;
        cursor.increment();
    }
    true
}
