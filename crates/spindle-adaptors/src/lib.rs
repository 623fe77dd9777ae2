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

//! # Spindle Adaptors
//!
//! Lazy range adaptors over the `spindle_core` facades. Each adaptor is a
//! cursor plus a range type and a factory function; adaptors take their
//! input ranges by value (pass `&vec` or an `IteratorRange` to keep a view)
//! and compose freely, since every adaptor range is itself a `Range`.
//!
//! The category of an adapted range is derived from its inputs: a
//! transform over a random-access range is random access, a filter caps at
//! bidirectional, a zip is the weakest of its components.
//!
//! ## Modules
//!
//! - `transform`: apply a function on dereference.
//! - `filter`: skip elements failing a predicate.
//! - `zip`: lockstep tuples of up to six ranges, and `enumerate`.
//! - `concat`: two ranges back to back (`concat_ranges!` for more).
//! - `nested`: the row-major Cartesian product of up to four ranges.
//! - `adjacent`: sliding windows, linear or wrapping around.
//! - `circular`: a range repeated for a number of laps.
//! - `reversed`: a bidirectional range back to front.
//! - `cached`: memoize the last dereference.
//! - `stride`: every `n`th element, or one field of every record.
//! - `project`: the halves of pairs, and the pointees of smart pointers.
//! - `bitset`: the indices of the set bits of an integer.
//!
//! ## Example
//!
//! ```rust
//! use spindle_adaptors::adjacent::adjacent;
//! use spindle_adaptors::filter::filter;
//! use spindle_adaptors::transform::transform;
//! use spindle_core::range::RangeFacade;
//!
//! let readings = [3, 8, 2, 9, 4];
//! let deltas = transform(adjacent::<2, _>(&readings), |w| w[1] - w[0]);
//! let rises = filter(deltas, |d: &i32| *d > 0);
//! assert_eq!(rises.iter().collect::<Vec<_>>(), vec![5, 7]);
//! ```

pub mod adjacent;
pub mod bitset;
pub mod cached;
pub mod circular;
pub mod concat;
pub mod filter;
pub mod nested;
pub mod project;
pub mod reversed;
pub mod stride;
pub mod transform;
pub mod zip;
