//! # Signed integers
//!
//! A sign together with an unsigned magnitude. All digit arithmetic is done by [`Unsigned`]; this
//! type only decides which magnitude operation to apply and what the sign of the result is.
//!
//! Zero has a single representation, with a positive sign. Every operation that can produce zero
//! restores that.
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::mem;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

use num::{One, ToPrimitive, Zero};

use crate::integer::big::digit::Digit;
use crate::integer::big::unsigned::{write_digits, Unsigned};
use crate::sign::Sign;
use crate::traits::Step;


/// A big signed integer type.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signed<D> {
    sign: Sign,
    magnitude: Unsigned<D>,
}

impl<D: Digit> Signed<D> {
    /// Create a value from a sign and the absolute value.
    ///
    /// A zero magnitude always gets a positive sign.
    pub fn from_parts(sign: Sign, magnitude: Unsigned<D>) -> Self {
        let mut value = Self { sign, magnitude };
        value.canonicalize();

        value
    }

    /// Split into a sign and the absolute value.
    pub fn into_parts(self) -> (Sign, Unsigned<D>) {
        (self.sign, self.magnitude)
    }

    /// Sign of the value, positive for zero.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Absolute value.
    pub fn magnitude(&self) -> &Unsigned<D> {
        &self.magnitude
    }

    /// Absolute value, as an owned magnitude.
    pub fn abs(&self) -> Unsigned<D> {
        self.magnitude.clone()
    }

    /// Whether `x >= 0`.
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Whether `x < 0`.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Value as a native integer, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude.to_u128()?;
        match self.sign {
            Sign::Positive => i128::try_from(magnitude).ok(),
            Sign::Negative if magnitude == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Negative => i128::try_from(magnitude).ok().map(Neg::neg),
        }
    }

    /// Add a value given by its parts.
    ///
    /// With differing signs, the smaller magnitude is subtracted from the larger one, so the
    /// magnitude subtraction never underflows.
    fn add_parts(&mut self, sign: Sign, magnitude: &Unsigned<D>) {
        if self.sign == sign {
            self.magnitude += magnitude;
            return;
        }

        match self.magnitude.cmp(magnitude) {
            Ordering::Less => {
                let smaller = mem::replace(&mut self.magnitude, magnitude.clone());
                self.magnitude -= &smaller;
                self.sign = sign;
            }
            Ordering::Equal => self.set_zero(),
            Ordering::Greater => self.magnitude -= magnitude,
        }
    }

    fn canonicalize(&mut self) {
        if self.magnitude.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

impl<D: Digit> Default for Signed<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Digit> PartialOrd for Signed<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Ord for Signed<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            // Larger magnitude is more negative
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
            // Zero is positive, so any negative value is smaller than any positive value
            (left, right) => left.cmp(&right),
        }
    }
}

impl<'a, D: Digit> AddAssign<&'a Signed<D>> for Signed<D> {
    fn add_assign(&mut self, rhs: &'a Signed<D>) {
        self.add_parts(rhs.sign, &rhs.magnitude);
    }
}

impl<'a, D: Digit> SubAssign<&'a Signed<D>> for Signed<D> {
    fn sub_assign(&mut self, rhs: &'a Signed<D>) {
        self.add_parts(-rhs.sign, &rhs.magnitude);
    }
}

impl<'a, D: Digit> MulAssign<&'a Signed<D>> for Signed<D> {
    fn mul_assign(&mut self, rhs: &'a Signed<D>) {
        self.sign *= rhs.sign;
        self.magnitude *= &rhs.magnitude;
        self.canonicalize();
    }
}

forward_binop!(Signed, Add, add, AddAssign, add_assign);
forward_binop!(Signed, Sub, sub, SubAssign, sub_assign);
forward_binop!(Signed, Mul, mul, MulAssign, mul_assign);

impl<D: Digit> Neg for Signed<D> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = -self.sign;
        }

        self
    }
}

impl<'a, D: Digit> Neg for &'a Signed<D> {
    type Output = Signed<D>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<D: Digit> Step for Signed<D> {
    fn increment(&mut self) {
        match self.sign {
            Sign::Positive => self.magnitude.increment(),
            Sign::Negative => {
                // Negative values have a nonzero magnitude
                self.magnitude.decrement();
                self.canonicalize();
            }
        }
    }

    fn decrement(&mut self) {
        match self.sign {
            Sign::Positive if self.magnitude.is_zero() => {
                self.sign = Sign::Negative;
                self.magnitude.set_one();
            }
            Sign::Positive => self.magnitude.decrement(),
            Sign::Negative => self.magnitude.increment(),
        }
    }
}

impl<D: Digit> From<Unsigned<D>> for Signed<D> {
    fn from(magnitude: Unsigned<D>) -> Self {
        Self { sign: Sign::Positive, magnitude }
    }
}

macro_rules! from_signed {
    ($($native:ty),+) => {
        $(
            impl<D: Digit> From<$native> for Signed<D> {
                fn from(value: $native) -> Self {
                    // Through the unsigned type, as the absolute value of MIN doesn't fit
                    Self {
                        sign: Sign::of(&value),
                        magnitude: Unsigned::from(value.unsigned_abs()),
                    }
                }
            }
        )+
    }
}

macro_rules! from_unsigned {
    ($($native:ty),+) => {
        $(
            impl<D: Digit> From<$native> for Signed<D> {
                fn from(value: $native) -> Self {
                    Self { sign: Sign::Positive, magnitude: Unsigned::from(value) }
                }
            }
        )+
    }
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);
with_native!(Signed, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<D: Digit> Zero for Signed<D> {
    fn zero() -> Self {
        Self { sign: Sign::Positive, magnitude: Unsigned::zero() }
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Positive;
        self.magnitude.set_zero();
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl<D: Digit> One for Signed<D> {
    fn one() -> Self {
        Self { sign: Sign::Positive, magnitude: Unsigned::one() }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}

impl<D: Digit> ToPrimitive for Signed<D> {
    fn to_i64(&self) -> Option<i64> {
        Signed::to_i128(self).and_then(|value| value.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        Signed::to_i128(self).and_then(|value| value.to_u64())
    }

    fn to_i128(&self) -> Option<i128> {
        Signed::to_i128(self)
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::Positive => self.magnitude.to_u128(),
            Sign::Negative => None,
        }
    }
}

impl<D: Digit> Sum for Signed<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut total, value| {
            total += &value;
            total
        })
    }
}

impl<D: Digit> Product for Signed<D> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |mut total, value| {
            total *= &value;
            total
        })
    }
}

/// Renders as `BigNum(<sign>, <digit0>, <digit1>, ...)`, least significant digit first.
///
/// Only meant for diagnostics.
impl<D: Digit> fmt::Debug for Signed<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum({}, ", self.sign)?;
        write_digits(f, self.magnitude.digits())?;
        f.write_str(")")
    }
}
