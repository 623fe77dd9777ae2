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

//! Bit-index helpers: the positions of the set bits of an integer, as a
//! filtered index range, and the inverse mapping from a position to a
//! single-bit mask.
//!
//! ```rust
//! use spindle_adaptors::bitset::{bit_index_to_set, set_bit_indices};
//!
//! let flags = 0b1010_0110_u8;
//! let positions: Vec<u32> = set_bit_indices(flags).into_iter().collect();
//! assert_eq!(positions, vec![1, 2, 5, 7]);
//!
//! let rebuilt = positions.iter().fold(0_u8, |acc, &i| acc | bit_index_to_set::<u8>(i));
//! assert_eq!(rebuilt, flags);
//! ```

use crate::filter::{FilteredRange, filter};
use num_traits::PrimInt;
use spindle_core::cursor::index::{IndexCursor, index_range};
use spindle_core::range::IteratorRange;

/// Number of bits in `T`.
#[inline]
fn bit_width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

/// The indices of the set bits of `bits`, lowest first.
///
/// A bidirectional range over `0..bit width`; reverse it for highest first.
pub fn set_bit_indices<T>(
    bits: T,
) -> FilteredRange<IteratorRange<IndexCursor<u32>>, impl Fn(&u32) -> bool + Clone + Copy>
where
    T: PrimInt,
{
    filter(index_range(0, bit_width::<T>()), move |index: &u32| {
        bits & bit_index_to_set::<T>(*index) != T::zero()
    })
}

/// The integer with only bit `index` set.
///
/// # Panics
///
/// In debug builds, panics if `index` is not below the bit width of `T`.
#[inline]
pub fn bit_index_to_set<T>(index: u32) -> T
where
    T: PrimInt,
{
    debug_assert!(
        index < bit_width::<T>(),
        "bit index {} out of range for a {}-bit integer",
        index,
        bit_width::<T>()
    );
    T::one() << index as usize
}
