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

//! # Stride
//!
//! Walks memory with a fixed byte stride: every `n`th element of a slice,
//! or one field of every record in a slice of structs. The cursor is a
//! random-access pointer walker that remembers the region it was built
//! over; dereferencing outside that region panics instead of reading
//! foreign memory.
//!
//! ```rust
//! use spindle_adaptors::stride::StrideRange;
//! use spindle_adaptors::strided_field;
//! use spindle_core::range::RangeFacade;
//!
//! let samples = [0, 10, 20, 30, 40, 50, 60];
//! let every_third = StrideRange::every_nth(&samples, 3);
//! assert_eq!(every_third.iter().copied().collect::<Vec<_>>(), vec![0, 30, 60]);
//!
//! struct Vertex {
//!     position: [f32; 3],
//!     weight: f32,
//! }
//! let mesh = [
//!     Vertex { position: [0.0; 3], weight: 0.5 },
//!     Vertex { position: [1.0; 3], weight: 0.25 },
//! ];
//! let weights = strided_field!(&mesh, Vertex, weight).unwrap();
//! assert_eq!(weights.iter().sum::<f32>(), 0.75);
//! ```

use spindle_core::category::RandomAccess;
use spindle_core::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use spindle_core::impl_range_traits;
use spindle_core::range::Range;
use std::fmt;
use std::marker::PhantomData;
use std::mem::{align_of, size_of};

/// Why a strided view could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrideError {
    /// A step of zero elements or zero bytes.
    ZeroStride,
    /// The element type has no size, so positions cannot be told apart.
    ZeroSizedElement,
    /// The field would extend past the end of its record.
    FieldOutsideRecord {
        offset: usize,
        field_size: usize,
        record_size: usize,
    },
    /// The field offset or the record alignment does not suit the field
    /// type's alignment.
    Misaligned { offset: usize, alignment: usize },
}

impl fmt::Display for StrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrideError::ZeroStride => write!(f, "Stride must be non-zero"),
            StrideError::ZeroSizedElement => {
                write!(f, "Cannot stride over a zero-sized element type")
            }
            StrideError::FieldOutsideRecord {
                offset,
                field_size,
                record_size,
            } => write!(
                f,
                "Field of {} bytes at offset {} does not fit in a record of {} bytes",
                field_size, offset, record_size
            ),
            StrideError::Misaligned { offset, alignment } => write!(
                f,
                "Field at offset {} is not aligned to {} bytes",
                offset, alignment
            ),
        }
    }
}

impl std::error::Error for StrideError {}

/// Random-access cursor stepping `stride` bytes at a time.
///
/// Dereferencing checks that the position lies in `[low, high)`, the
/// region the cursor was built over.
pub struct StrideCursor<'a, T> {
    ptr: *const u8,
    stride: isize,
    low: *const u8,
    high: *const u8,
    _marker: PhantomData<&'a T>,
}

// SAFETY: a stride cursor only hands out `&'a T`, like a shared slice
// iterator does.
unsafe impl<T: Sync> Send for StrideCursor<'_, T> {}
unsafe impl<T: Sync> Sync for StrideCursor<'_, T> {}

impl<T> Clone for StrideCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StrideCursor<'_, T> {}

impl<T> fmt::Debug for StrideCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrideCursor")
            .field("ptr", &self.ptr)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

impl<'a, T> StrideCursor<'a, T> {
    /// The current address.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.cast()
    }

    /// The step in bytes.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    fn in_region(&self) -> bool {
        let address = self.ptr as usize;
        self.low as usize <= address && address < self.high as usize
    }
}

impl<'a, T> Cursor for StrideCursor<'a, T> {
    type Reference = &'a T;
    type Category = RandomAccess;

    #[inline]
    fn dereference(&self) -> &'a T {
        assert!(
            self.in_region(),
            "dereferenced a stride cursor outside the region it was built over"
        );
        // SAFETY: every constructor places the cursor on a lattice of
        // properly aligned `T`s inside `[low, high)`, borrowed for `'a`,
        // and moves keep it on that lattice.
        unsafe { &*self.ptr.cast::<T>() }
    }

    #[inline]
    fn is_equal(&self, other: &Self) -> bool {
        std::ptr::eq(self.ptr, other.ptr)
    }

    #[inline]
    fn increment(&mut self) {
        self.ptr = self.ptr.wrapping_offset(self.stride);
    }

    #[inline]
    fn referent_address(reference: &&'a T) -> Option<*const u8> {
        Some((*reference as *const T).cast())
    }
}

impl<T> BidirectionalCursor for StrideCursor<'_, T> {
    #[inline]
    fn decrement(&mut self) {
        self.ptr = self.ptr.wrapping_offset(-self.stride);
    }
}

impl<T> RandomAccessCursor for StrideCursor<'_, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(self.stride.wrapping_mul(n));
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        (other.ptr as isize).wrapping_sub(self.ptr as isize) / self.stride
    }
}

/// A strided view over borrowed memory.
pub struct StrideRange<'a, T> {
    begin: StrideCursor<'a, T>,
    end: StrideCursor<'a, T>,
}

impl<T> Clone for StrideRange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StrideRange<'_, T> {}

impl<T> fmt::Debug for StrideRange<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrideRange")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, T> StrideRange<'a, T> {
    /// Every `n`th element of `items`, starting with the first.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or `T` is zero-sized; see
    /// [`try_every_nth`](Self::try_every_nth).
    pub fn every_nth(items: &'a [T], n: usize) -> Self {
        match Self::try_every_nth(items, n) {
            Ok(range) => range,
            Err(e) => panic!("cannot build strided view: {e}"),
        }
    }

    /// Every `n`th element of `items`, starting with the first.
    pub fn try_every_nth(items: &'a [T], n: usize) -> Result<Self, StrideError> {
        if size_of::<T>() == 0 {
            return Err(StrideError::ZeroSizedElement);
        }
        if n == 0 {
            return Err(StrideError::ZeroStride);
        }

        // Steps at least as long as the slice all visit the first element
        // only; capping keeps the byte arithmetic in range.
        let n = n.min(items.len().max(1));
        let count = items.len().div_ceil(n);
        let stride = (n * size_of::<T>()) as isize;
        let low = items.as_ptr().cast::<u8>();
        let high = low.wrapping_add(items.len() * size_of::<T>());
        let end = low.wrapping_offset(stride * count as isize);
        Ok(Self::from_region(low, end, stride, low, high))
    }

    /// The field at byte `offset` of every record in `records`.
    ///
    /// `field` only pins the field type; pass a closure projecting the
    /// field, such as `|v: &Vertex| &v.weight`. The [`strided_field!`]
    /// macro supplies both the offset and the projection.
    ///
    /// # Safety
    ///
    /// The `size_of::<T>()` bytes at `offset` in every record must hold a
    /// valid, initialized `T` for as long as `records` is borrowed, for
    /// example because they are a field of type `T`.
    ///
    /// [`strided_field!`]: crate::strided_field
    pub unsafe fn from_field_offset<R>(
        records: &'a [R],
        offset: usize,
        _field: fn(&R) -> &T,
    ) -> Result<Self, StrideError> {
        let record_size = size_of::<R>();
        let field_size = size_of::<T>();
        if field_size == 0 {
            return Err(StrideError::ZeroSizedElement);
        }
        if record_size == 0 {
            return Err(StrideError::ZeroStride);
        }
        if offset.checked_add(field_size).is_none_or(|end| end > record_size) {
            return Err(StrideError::FieldOutsideRecord {
                offset,
                field_size,
                record_size,
            });
        }
        let alignment = align_of::<T>();
        if offset % alignment != 0 || align_of::<R>() % alignment != 0 {
            return Err(StrideError::Misaligned { offset, alignment });
        }

        let low = records.as_ptr().cast::<u8>();
        let high = low.wrapping_add(records.len() * record_size);
        let first = low.wrapping_add(offset);
        let last = high.wrapping_add(offset);
        Ok(Self::from_region(first, last, record_size as isize, low, high))
    }

    /// The elements at `first`, `first + stride_bytes`, ... up to but
    /// excluding `last`.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first` in whole strides. Every
    /// address visited before `last` must hold a valid `T`, properly
    /// aligned, that stays alive and unmodified for `'a`.
    ///
    /// # Panics
    ///
    /// Panics if `stride_bytes` is zero.
    pub unsafe fn from_raw_parts(first: *const T, last: *const T, stride_bytes: isize) -> Self {
        assert!(stride_bytes != 0, "stride must be non-zero");
        let (first, last) = (first.cast::<u8>(), last.cast::<u8>());
        let (low, high) = if stride_bytes > 0 {
            (first, last)
        } else {
            (last.wrapping_add(1), first.wrapping_add(1))
        };
        Self::from_region(first, last, stride_bytes, low, high)
    }

    #[inline]
    fn from_region(
        first: *const u8,
        last: *const u8,
        stride: isize,
        low: *const u8,
        high: *const u8,
    ) -> Self {
        let cursor = |ptr| StrideCursor {
            ptr,
            stride,
            low,
            high,
            _marker: PhantomData,
        };
        Self {
            begin: cursor(first),
            end: cursor(last),
        }
    }
}

impl<'a, T> Range for StrideRange<'a, T> {
    type Cursor = StrideCursor<'a, T>;

    #[inline]
    fn begin_cursor(&self) -> StrideCursor<'a, T> {
        self.begin
    }

    #[inline]
    fn end_cursor(&self) -> StrideCursor<'a, T> {
        self.end
    }
}

impl_range_traits!(['a, T] StrideRange<'a, T>);

/// One field of every record in a slice, as a [`StrideRange`].
///
/// `strided_field!(records, Record, field)` borrows `records: &[Record]`
/// and evaluates to `Result<StrideRange<'_, FieldType>, StrideError>`.
#[macro_export]
macro_rules! strided_field {
    ($records:expr, $record:ty, $field:ident) => {{
        let records: &[$record] = $records;
        // SAFETY: `offset_of!` locates a field of `$record` and the
        // projection pins the element type to that field's type.
        unsafe {
            $crate::stride::StrideRange::from_field_offset(
                records,
                ::core::mem::offset_of!($record, $field),
                |record: &$record| &record.$field,
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::facade::IteratorFacade;
    use spindle_core::range::RangeFacade;

    #[derive(Debug)]
    struct Particle {
        mass: f64,
        charge: i32,
        #[allow(dead_code)]
        tag: u8,
    }

    fn particles() -> Vec<Particle> {
        (0..4)
            .map(|i| Particle {
                mass: i as f64 * 1.5,
                charge: i - 2,
                tag: b'p',
            })
            .collect()
    }

    #[test]
    fn test_every_nth() {
        let data: Vec<u16> = (0..10).collect();
        let thirds = StrideRange::every_nth(&data, 3);
        assert_eq!(thirds.size(), 4);
        assert_eq!(thirds.iter().copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(thirds.iter().rev().copied().collect::<Vec<_>>(), vec![9, 6, 3, 0]);
        assert_eq!(*thirds.at(2), 6);
    }

    #[test]
    fn test_every_nth_edge_cases() {
        let data = [1, 2, 3];
        assert_eq!(StrideRange::every_nth(&data, 1).size(), 3);
        assert_eq!(StrideRange::every_nth(&data, 3).size(), 1);
        assert_eq!(
            StrideRange::every_nth(&data, usize::MAX).iter().copied().collect::<Vec<_>>(),
            vec![1]
        );
        let empty: [u64; 0] = [];
        assert!(StrideRange::every_nth(&empty, 2).is_empty());
    }

    #[test]
    fn test_layout_errors() {
        let data = [1_u32, 2];
        assert_eq!(
            StrideRange::try_every_nth(&data, 0).unwrap_err(),
            StrideError::ZeroStride
        );
        let units = [(), ()];
        assert_eq!(
            StrideRange::try_every_nth(&units, 1).unwrap_err(),
            StrideError::ZeroSizedElement
        );

        let pairs = [[0_u32; 2]; 3];
        let outside = unsafe { StrideRange::from_field_offset(&pairs, 8, |p: &[u32; 2]| &p[0]) };
        assert_eq!(
            outside.unwrap_err(),
            StrideError::FieldOutsideRecord {
                offset: 8,
                field_size: 4,
                record_size: 8
            }
        );
        let misaligned = unsafe { StrideRange::from_field_offset(&pairs, 2, |p: &[u32; 2]| &p[0]) };
        assert_eq!(
            misaligned.unwrap_err(),
            StrideError::Misaligned {
                offset: 2,
                alignment: 4
            }
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StrideError::ZeroStride.to_string(), "Stride must be non-zero");
        assert_eq!(
            StrideError::FieldOutsideRecord {
                offset: 6,
                field_size: 4,
                record_size: 8
            }
            .to_string(),
            "Field of 4 bytes at offset 6 does not fit in a record of 8 bytes"
        );
    }

    #[test]
    #[should_panic(expected = "cannot build strided view")]
    fn test_every_nth_panics_on_zero() {
        let data = [1, 2, 3];
        let _ = StrideRange::every_nth(&data, 0);
    }

    #[test]
    fn test_strided_field() {
        let cloud = particles();
        let charges = strided_field!(&cloud, Particle, charge).unwrap();
        assert_eq!(charges.iter().copied().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);

        let masses = strided_field!(&cloud, Particle, mass).unwrap();
        assert_eq!(masses.size(), 4);
        assert_eq!(*masses.at(3), 4.5);
        assert!(std::ptr::eq(masses.front(), &cloud[0].mass));
    }

    #[test]
    fn test_raw_parts_descending() {
        let data = [10_i32, 20, 30, 40, 50];
        let first = &data[4] as *const i32;
        let last = data.as_ptr().wrapping_sub(1);
        let backwards = unsafe { StrideRange::from_raw_parts(first, last, -(size_of::<i32>() as isize)) };
        assert_eq!(backwards.size(), 5);
        assert_eq!(backwards.iter().copied().collect::<Vec<_>>(), vec![50, 40, 30, 20, 10]);
    }

    #[test]
    #[should_panic(expected = "outside the region")]
    fn test_dereference_outside_region_panics() {
        let data = [1_u8, 2, 3, 4];
        let pairs = StrideRange::every_nth(&data, 2);
        let _ = pairs.end().get();
    }

    #[test]
    fn test_random_access_arithmetic() {
        let data: Vec<i64> = (0..20).collect();
        let fives = StrideRange::every_nth(&data, 5);
        let it: IteratorFacade<_> = fives.begin() + 3;
        assert_eq!(*it.get(), 15);
        assert_eq!(it - fives.begin(), 3);
        assert!(fives.begin() < it);
        assert_eq!(*it.at(-1), 10);
    }
}
