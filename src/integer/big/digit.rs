//! # Digits
//!
//! The fixed width unit that magnitudes are built from.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::{PrimInt, Unsigned};

/// An unsigned machine integer used as a single digit of a big integer.
///
/// The value of a digit sequence `d` is `sum_i d[i] * 2^(WIDTH * i)`. Digits are at most 64 bits
/// wide, such that a product of two digits fits in a native integer.
pub trait Digit: PrimInt + Unsigned + Hash + Default + Debug + Display + Send + Sync + 'static {
    /// Number of bits in a digit.
    const WIDTH: u32;

    /// `self + rhs + carry`, as the low digit and the outgoing carry.
    fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool);
    /// `self - rhs - borrow`, as the low digit and the outgoing borrow.
    fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);
    /// `self * rhs + carry`, as the low digit and the high digit.
    ///
    /// The result always fits: `(2^w - 1)^2 + 2^w - 1 < 2^(2w)`.
    fn mul_with_carry(self, rhs: Self, carry: Self) -> (Self, Self);

    /// The lowest `WIDTH` bits of a native integer.
    fn truncate(value: u128) -> Self;
    /// Lossless conversion to the widest native integer.
    fn widen(self) -> u128;
}

macro_rules! digit {
    ($digit:ty, $double:ty) => {
        impl Digit for $digit {
            const WIDTH: u32 = <$digit>::BITS;

            #[inline]
            fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, first) = self.overflowing_add(rhs);
                let (sum, second) = sum.overflowing_add(carry as $digit);
                (sum, first || second)
            }

            #[inline]
            fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (difference, first) = self.overflowing_sub(rhs);
                let (difference, second) = difference.overflowing_sub(borrow as $digit);
                (difference, first || second)
            }

            #[inline]
            fn mul_with_carry(self, rhs: Self, carry: Self) -> (Self, Self) {
                let wide = self as $double * rhs as $double + carry as $double;
                (wide as $digit, (wide >> Self::WIDTH) as $digit)
            }

            #[inline]
            fn truncate(value: u128) -> Self {
                (value & <$digit>::MAX as u128) as $digit
            }

            #[inline]
            fn widen(self) -> u128 {
                self as u128
            }
        }
    }
}

digit!(u8, u16);
digit!(u16, u32);
digit!(u32, u64);
digit!(u64, u128);

#[cfg(test)]
mod test {
    use crate::integer::big::digit::Digit;

    #[test]
    fn add_with_carry() {
        assert_eq!(0xFF_u8.add_with_carry(1, false), (0, true));
        assert_eq!(0xFF_u8.add_with_carry(0xFF, true), (0xFF, true));
        assert_eq!(3_u8.add_with_carry(4, true), (8, false));
        assert_eq!(u64::MAX.add_with_carry(0, true), (0, true));
    }

    #[test]
    fn sub_with_borrow() {
        assert_eq!(0_u8.sub_with_borrow(1, false), (0xFF, true));
        assert_eq!(0_u8.sub_with_borrow(0, true), (0xFF, true));
        assert_eq!(5_u16.sub_with_borrow(2, true), (2, false));
    }

    #[test]
    fn mul_with_carry() {
        assert_eq!(0xFF_u8.mul_with_carry(0xFF, 0xFF), (0x00, 0xFF));
        assert_eq!(128_u8.mul_with_carry(2, 0), (0, 1));
        assert_eq!(u64::MAX.mul_with_carry(2, 1), (u64::MAX, 1));
    }

    #[test]
    fn truncate() {
        assert_eq!(u8::truncate(0x1234), 0x34);
        assert_eq!(u32::truncate(u128::MAX), u32::MAX);
        assert_eq!(<u8 as Digit>::WIDTH, 8);
        assert_eq!(0xAB_u8.widen(), 0xAB);
    }
}
