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

//! # Spindle Core
//!
//! The two primitives the spindle adaptors are built on. A type author
//! implements a handful of cursor operations and receives a complete
//! iterator; a range author implements a begin/end pair and receives the
//! complete range surface. Everything is resolved statically: categories
//! are types, operators are gated by trait bounds, and no call goes
//! through a vtable.
//!
//! ## Modules
//!
//! - `category`: capability tiers (`Input`, `Output`, `Forward`,
//!   `Bidirectional`, `RandomAccess`) as sealed marker types, with a
//!   type-level least-permissive meet (`LeastPermissive`,
//!   `least_permissive!`).
//! - `cursor`: the primitive traits (`Cursor`, `BidirectionalCursor`,
//!   `RandomAccessCursor`, `ForwardCursor`), heterogeneous comparison
//!   dispatch (`interoperable_cursors!`), and the built-in cursors over
//!   integers (`IndexCursor`), slices and deques.
//! - `facade`: `IteratorFacade<C>`, the full operator surface synthesized
//!   from a cursor.
//! - `range`: the `Range` trait, the blanket `RangeFacade` surface,
//!   `IteratorRange`, `alias`, and the std iterator bridge `RangeIter`.
//! - `algorithm`: `distance`, `advance_by`, `partition_point` and
//!   `lower_bound`, dispatched on category.
//!
//! ## Example
//!
//! ```rust
//! use spindle_core::category::Bidirectional;
//! use spindle_core::cursor::{BidirectionalCursor, Cursor};
//! use spindle_core::range::{IteratorRange, RangeFacade};
//!
//! /// Powers of two, walked by shifting.
//! #[derive(Clone)]
//! struct Powers(u32);
//!
//! impl Cursor for Powers {
//!     type Reference = u64;
//!     type Category = Bidirectional;
//!     fn dereference(&self) -> u64 { 1 << self.0 }
//!     fn is_equal(&self, other: &Self) -> bool { self.0 == other.0 }
//!     fn increment(&mut self) { self.0 += 1; }
//! }
//!
//! impl BidirectionalCursor for Powers {
//!     fn decrement(&mut self) { self.0 -= 1; }
//! }
//!
//! let powers = IteratorRange::new(Powers(0), Powers(5));
//! assert_eq!(powers.iter().collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
//! assert_eq!(powers.iter().rev().next(), Some(16));
//!
//! let mut it = powers.begin();
//! it.inc().inc();
//! assert_eq!(it.get(), 4);
//! assert_eq!(it.post_dec().get(), 4);
//! assert_eq!(it.get(), 2);
//! ```

pub mod algorithm;
pub mod category;
pub mod cursor;
pub mod facade;
pub mod range;

pub use cursor::index::index_range;
