//! Matrix element type constraints
//!
//! Only signed integer types can be stored: subtraction needs negation,
//! and all arithmetic is checked so overflow surfaces as an error.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Signed integer stored in a [`SparseMatrix`](crate::SparseMatrix)
///
/// `Display` and `FromStr` carry values through the text format.
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + Sized {
    /// The additive identity, never stored in a matrix
    const ZERO: Self;

    /// Checked addition, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Checked multiplication, `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Checked negation, `None` for the minimum value
    fn checked_neg(self) -> Option<Self>;

    /// Wider integer that sums of products are accumulated in
    type Accumulator: Copy + Eq + Debug;

    /// Zero of the accumulator type
    const ACCUMULATOR_ZERO: Self::Accumulator;

    /// Add `a * b` to `acc`, `None` if the accumulator overflows
    fn mul_accumulate(acc: Self::Accumulator, a: Self, b: Self) -> Option<Self::Accumulator>;

    /// Convert an accumulated value back, `None` if it does not fit
    fn narrow(acc: Self::Accumulator) -> Option<Self>;

    /// Whether this value is zero
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $acc:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                type Accumulator = $acc;

                const ACCUMULATOR_ZERO: $acc = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }

                fn mul_accumulate(acc: $acc, a: Self, b: Self) -> Option<$acc> {
                    <$acc>::checked_mul(a as $acc, b as $acc).and_then(|product| <$acc>::checked_add(acc, product))
                }

                fn narrow(acc: $acc) -> Option<Self> {
                    <$ty>::try_from(acc).ok()
                }
            }
        )*
    };
}

// i128 has no wider primitive, so its accumulator can still overflow
impl_matrix_element!(i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128);
