//! The numeric Type of Edge weights and Path lengths

use std::fmt::Debug;
use std::hash::Hash;

/// A Type that can be used as the weight of an Edge and the total Cost of a Path.
///
/// Implemented for all primitive integer Types. Signed Types are allowed so that Graphs from
/// external sources can be searched directly, but negative values are a contract violation
/// that is reported when validation is enabled (see [`SearchConfig`](crate::SearchConfig)).
///
/// Floating point Types are not supported, since they lack a total order.
pub trait Cost: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// The neutral element, also the Cost of the trivial Path.
    const ZERO: Self;

    /// Adds two Costs, returning `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Adds two Costs, clamping at the maximum value of `Self`.
    fn saturating_add(self, rhs: Self) -> Self;

    /// `true` if the value is below [`ZERO`](Cost::ZERO)
    fn is_negative(self) -> bool;

    /// Converts a grid distance into a Cost, saturating at the maximum value of `Self`.
    fn from_distance(distance: u64) -> Self;
}

macro_rules! impl_unsigned_cost {
    ($($type:ty),+) => {$(
        impl Cost for $type {
            const ZERO: Self = 0;
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$type>::checked_add(self, rhs)
            }
            fn saturating_add(self, rhs: Self) -> Self {
                <$type>::saturating_add(self, rhs)
            }
            fn is_negative(self) -> bool {
                false
            }
            fn from_distance(distance: u64) -> Self {
                <$type>::try_from(distance).unwrap_or(<$type>::MAX)
            }
        }
    )+}
}

macro_rules! impl_signed_cost {
    ($($type:ty),+) => {$(
        impl Cost for $type {
            const ZERO: Self = 0;
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$type>::checked_add(self, rhs)
            }
            fn saturating_add(self, rhs: Self) -> Self {
                <$type>::saturating_add(self, rhs)
            }
            fn is_negative(self) -> bool {
                self < 0
            }
            fn from_distance(distance: u64) -> Self {
                <$type>::try_from(distance).unwrap_or(<$type>::MAX)
            }
        }
    )+}
}

impl_unsigned_cost!(u8, u16, u32, u64, usize);
impl_signed_cost!(i8, i16, i32, i64, isize);
