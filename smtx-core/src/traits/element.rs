//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements and written in the text format.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Zero entries are detected by comparison with `ZERO`
/// - Display + FromStr: Written to and read from the text format
///
/// Arithmetic goes through the `checked_*` methods so that integer
/// overflow surfaces as an error rather than a panic.
pub trait MatrixElement: Copy + PartialEq + Debug + Display + FromStr {
    /// The additive identity, never stored
    const ZERO: Self;

    /// Whether this value would be elided from storage
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Wider type that products are summed in before narrowing back
    type Accumulator: Copy;

    const ACCUMULATOR_ZERO: Self::Accumulator;

    /// `acc + a * b` in the accumulator type
    fn checked_mul_add(acc: Self::Accumulator, a: Self, b: Self) -> Option<Self::Accumulator>;

    /// Convert an accumulated sum back, `None` if it does not fit
    fn narrow(acc: Self::Accumulator) -> Option<Self>;
}

macro_rules! impl_integer_element {
    ($($ty:ty => $acc:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                type Accumulator = $acc;

                const ACCUMULATOR_ZERO: $acc = 0;

                fn checked_mul_add(acc: $acc, a: Self, b: Self) -> Option<$acc> {
                    <$acc>::from(a)
                        .checked_mul(<$acc>::from(b))
                        .and_then(|product| acc.checked_add(product))
                }

                fn narrow(acc: $acc) -> Option<Self> {
                    <$ty>::try_from(acc).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

// Floats saturate to infinity instead of overflowing
macro_rules! impl_float_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0.0;

                type Accumulator = $ty;

                const ACCUMULATOR_ZERO: $ty = 0.0;

                fn checked_mul_add(acc: $ty, a: Self, b: Self) -> Option<$ty> {
                    Some(acc + a * b)
                }

                fn narrow(acc: $ty) -> Option<Self> {
                    Some(acc)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_integer_element!(i32 => i64, i64 => i128);
impl_float_element!(f32, f64);
