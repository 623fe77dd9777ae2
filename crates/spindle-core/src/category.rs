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

//! # Capability Tiers
//!
//! Type-level iterator categories. Every cursor declares one of the marker
//! types below as its `Category`; generic code reads the tier from the type,
//! never from a runtime flag. The markers form the permissiveness order
//!
//! ```text
//! RandomAccess ⊇ Bidirectional ⊇ Forward ⊇ { Input | Output }
//! ```
//!
//! and [`Category::Min`] computes the least permissive of two tiers at
//! compile time, which is how adaptors wrapping several cursors derive
//! their own category.
//!
//! ## Usage
//!
//! ```rust
//! use spindle_core::category::{Bidirectional, Category, Forward, LeastPermissive, RandomAccess, Tier};
//! use spindle_core::least_permissive;
//!
//! type Zipped = LeastPermissive<RandomAccess, Forward>;
//! assert_eq!(<Zipped as Category>::TIER, Tier::Forward);
//!
//! type Filtered = least_permissive!(RandomAccess, RandomAccess, Bidirectional);
//! assert_eq!(<Filtered as Category>::TIER, Tier::Bidirectional);
//! ```

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Runtime mirror of a category, for diagnostics and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Input,
    Output,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Tier {
    #[inline]
    const fn rank(self) -> u8 {
        match self {
            Tier::Input | Tier::Output => 0,
            Tier::Forward => 1,
            Tier::Bidirectional => 2,
            Tier::RandomAccess => 3,
        }
    }

    /// Returns `true` if a cursor of this tier may be used where `required`
    /// is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spindle_core::category::Tier;
    /// assert!(Tier::RandomAccess.satisfies(Tier::Forward));
    /// assert!(!Tier::Forward.satisfies(Tier::Bidirectional));
    /// assert!(!Tier::Output.satisfies(Tier::Input));
    /// ```
    #[inline]
    pub const fn satisfies(self, required: Tier) -> bool {
        match (self, required) {
            (Tier::Input, Tier::Input) | (Tier::Output, Tier::Output) => true,
            (Tier::Input | Tier::Output, _) => false,
            (_, Tier::Output) => false,
            _ => self.rank() >= required.rank(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Input => "input",
            Tier::Output => "output",
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random access",
        };
        f.write_str(name)
    }
}

/// A capability tier marker.
///
/// This trait is sealed; the five markers in this module are the only
/// implementors.
pub trait Category: sealed::Sealed + Copy + Default + fmt::Debug + 'static {
    /// The runtime mirror of this tier.
    const TIER: Tier;

    /// The least permissive of `Self` and `Other`.
    ///
    /// Mixing `Input` with `Output` has no meaningful meet; the left-hand
    /// side wins.
    type Min<Other: Category>: Category;

    #[doc(hidden)]
    type CapForward: Category;

    #[doc(hidden)]
    type CapBidirectional: Category;
}

/// Tiers that guarantee multi-pass traversal.
pub trait MultiPass: Category {}

/// Single-pass reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Input;

/// Single-pass writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Output;

/// Multi-pass, forward only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Multi-pass in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time jumps and distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

impl sealed::Sealed for Input {}
impl sealed::Sealed for Output {}
impl sealed::Sealed for Forward {}
impl sealed::Sealed for Bidirectional {}
impl sealed::Sealed for RandomAccess {}

impl Category for Input {
    const TIER: Tier = Tier::Input;
    type Min<Other: Category> = Input;
    type CapForward = Input;
    type CapBidirectional = Input;
}

impl Category for Output {
    const TIER: Tier = Tier::Output;
    type Min<Other: Category> = Output;
    type CapForward = Output;
    type CapBidirectional = Output;
}

impl Category for Forward {
    const TIER: Tier = Tier::Forward;
    type Min<Other: Category> = Other::CapForward;
    type CapForward = Forward;
    type CapBidirectional = Forward;
}

impl Category for Bidirectional {
    const TIER: Tier = Tier::Bidirectional;
    type Min<Other: Category> = Other::CapBidirectional;
    type CapForward = Forward;
    type CapBidirectional = Bidirectional;
}

impl Category for RandomAccess {
    const TIER: Tier = Tier::RandomAccess;
    type Min<Other: Category> = Other;
    type CapForward = Forward;
    type CapBidirectional = Bidirectional;
}

impl MultiPass for Forward {}
impl MultiPass for Bidirectional {}
impl MultiPass for RandomAccess {}

/// The least permissive of two tiers.
pub type LeastPermissive<A, B> = <A as Category>::Min<B>;

/// The least permissive of any number of tiers.
///
/// Expands to nested [`LeastPermissive`] applications.
#[macro_export]
macro_rules! least_permissive {
    ($only:ty $(,)?) => { $only };
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $crate::category::LeastPermissive<$first, $crate::least_permissive!($($rest),+)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_of<C: Category>() -> Tier {
        C::TIER
    }

    #[test]
    fn test_min_with_random_access_is_identity() {
        assert_eq!(tier_of::<LeastPermissive<RandomAccess, Input>>(), Tier::Input);
        assert_eq!(tier_of::<LeastPermissive<RandomAccess, Forward>>(), Tier::Forward);
        assert_eq!(
            tier_of::<LeastPermissive<RandomAccess, RandomAccess>>(),
            Tier::RandomAccess
        );
    }

    #[test]
    fn test_min_is_symmetric_for_ordered_tiers() {
        assert_eq!(
            tier_of::<LeastPermissive<Bidirectional, Forward>>(),
            tier_of::<LeastPermissive<Forward, Bidirectional>>()
        );
        assert_eq!(
            tier_of::<LeastPermissive<Input, Bidirectional>>(),
            tier_of::<LeastPermissive<Bidirectional, Input>>()
        );
        assert_eq!(
            tier_of::<LeastPermissive<RandomAccess, Bidirectional>>(),
            Tier::Bidirectional
        );
    }

    #[test]
    fn test_macro_folds_all_arguments() {
        type One = least_permissive!(Forward);
        type Three = least_permissive!(RandomAccess, Bidirectional, RandomAccess);
        type Four = least_permissive!(RandomAccess, Bidirectional, Input, Forward);

        assert_eq!(tier_of::<One>(), Tier::Forward);
        assert_eq!(tier_of::<Three>(), Tier::Bidirectional);
        assert_eq!(tier_of::<Four>(), Tier::Input);
    }

    #[test]
    fn test_satisfies_order() {
        assert!(Tier::RandomAccess.satisfies(Tier::Input));
        assert!(Tier::Bidirectional.satisfies(Tier::Forward));
        assert!(Tier::Forward.satisfies(Tier::Forward));
        assert!(!Tier::Forward.satisfies(Tier::RandomAccess));
        assert!(!Tier::Input.satisfies(Tier::Output));
        assert!(!Tier::RandomAccess.satisfies(Tier::Output));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tier::RandomAccess.to_string(), "random access");
        assert_eq!(Tier::Input.to_string(), "input");
    }
}
