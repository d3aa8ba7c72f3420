//! # Unsigned magnitudes
//!
//! A non-negative integer of arbitrary size, stored as a sequence of digits with the least
//! significant digit first.
//!
//! The sequence is always normalized: it doesn't end in a zero digit, and the value zero is the
//! empty sequence. Every operation restores this before returning, which makes equality a
//! comparison of the digits and lets ordering look at the length first.
use std::cmp::{max, Ordering};
use std::fmt;
use std::iter::{Product, Sum};
use std::mem;
use std::ops::{AddAssign, MulAssign, SubAssign};

use itertools::Itertools;
use num::{One, ToPrimitive, Zero};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::error::{ArithmeticError, ArithmeticResult, Operation};
use crate::integer::big::digit::Digit;
use crate::integer::cmp_slice;
use crate::traits::Step;


// TODO(ENHANCEMENT): Generics over inline size
type Digits<D> = SmallVec<[D; 4]>;

/// A big unsigned integer type.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Unsigned<D> {
    low_to_high: Digits<D>,
}

impl<D: Digit> Unsigned<D> {
    /// The value zero.
    pub fn new() -> Self {
        Self { low_to_high: SmallVec::new() }
    }

    /// Create a value from its digits, least significant first.
    ///
    /// Trailing zero digits are removed.
    pub fn from_digits<I: IntoIterator<Item = D>>(low_to_high: I) -> Self {
        let mut value = Self { low_to_high: low_to_high.into_iter().collect() };
        value.normalize();

        value
    }

    /// Decompose a native integer into digits.
    fn from_u128(mut value: u128) -> Self {
        let mask = D::max_value().widen();

        let mut low_to_high = Digits::new();
        while value != 0 {
            low_to_high.push(D::truncate(value & mask));
            value >>= D::WIDTH;
        }

        Self { low_to_high }
    }

    /// Digits of the value, least significant first.
    ///
    /// Never ends in a zero digit.
    pub fn digits(&self) -> &[D] {
        &self.low_to_high
    }

    /// Number of digits needed to represent the value, zero for the value zero.
    pub fn len(&self) -> usize {
        self.low_to_high.len()
    }

    /// Whether the value is zero.
    pub fn is_empty(&self) -> bool {
        self.low_to_high.is_empty()
    }

    /// Value as a native integer, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.len() * D::WIDTH as usize > u128::BITS as usize {
            return None;
        }

        // The digits are at most 64 bits wide, so shifting never moves a set bit out
        let value = self.low_to_high.iter()
            .rev()
            .fold(0_u128, |total, digit| (total << D::WIDTH) | digit.widen());

        Some(value)
    }

    /// Subtract in place.
    ///
    /// # Errors
    ///
    /// If `rhs > self`. The value is not modified in that case.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> ArithmeticResult<()> {
        if *rhs > *self {
            debug!(
                minuend_digits = self.len(),
                subtrahend_digits = rhs.len(),
                "rejected subtraction of a larger magnitude"
            );
            return Err(ArithmeticError::Underflow { operation: Operation::Subtraction });
        }

        let mut borrow = false;
        for (left, &right) in self.low_to_high.iter_mut().zip(rhs.low_to_high.iter()) {
            (*left, borrow) = left.sub_with_borrow(right, borrow);
        }

        if borrow {
            let remaining = propagate_borrow(&mut self.low_to_high[rhs.len()..]);
            debug_assert!(!remaining, "rhs <= self, so the borrow is absorbed");
        }

        self.normalize();

        Ok(())
    }

    /// Subtract, if the result is not negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let mut result = self.clone();
        result.try_sub_assign(rhs).ok()?;

        Some(result)
    }

    /// Subtract one in place.
    ///
    /// # Errors
    ///
    /// If the value is zero. The value is not modified in that case.
    pub fn try_decrement(&mut self) -> ArithmeticResult<()> {
        if self.is_zero() {
            debug!("rejected decrement of zero");
            return Err(ArithmeticError::Underflow { operation: Operation::Decrement });
        }

        let remaining = propagate_borrow(&mut self.low_to_high);
        debug_assert!(!remaining, "a nonzero value absorbs the borrow");

        // 0x100 - 1 = 0xFF: the most significant digit can become zero
        self.normalize();

        Ok(())
    }

    /// The value minus one, if the value is not zero.
    pub fn checked_pred(&self) -> Option<Self> {
        let mut result = self.clone();
        result.try_decrement().ok()?;

        Some(result)
    }

    /// The value times a single digit, shifted up by `offset` digits.
    ///
    /// Result is a partial product of the schoolbook multiplication.
    fn scaled(&self, factor: D, offset: usize) -> Self {
        debug_assert!(!factor.is_zero());
        debug_assert!(!self.is_zero());

        let mut low_to_high = Digits::with_capacity(offset + self.len() + 1);
        low_to_high.resize(offset, D::zero());

        let mut carry = D::zero();
        for &digit in &self.low_to_high {
            let (low, high) = digit.mul_with_carry(factor, carry);
            low_to_high.push(low);
            carry = high;
        }
        if !carry.is_zero() {
            low_to_high.push(carry);
        }

        let result = Self { low_to_high };
        debug_assert!(result.is_normalized());

        result
    }

    fn normalize(&mut self) {
        while self.low_to_high.last().map_or(false, |digit| digit.is_zero()) {
            self.low_to_high.pop();
        }
    }

    fn is_normalized(&self) -> bool {
        self.low_to_high.last().map_or(true, |digit| !digit.is_zero())
    }
}

/// Add one to a little endian digit sequence, returning whether a carry is left.
fn propagate_carry<D: Digit>(low_to_high: &mut [D]) -> bool {
    for digit in low_to_high {
        let (sum, carry) = digit.add_with_carry(D::zero(), true);
        *digit = sum;
        if !carry {
            return false;
        }
    }

    true
}

/// Subtract one from a little endian digit sequence, returning whether a borrow is left.
fn propagate_borrow<D: Digit>(low_to_high: &mut [D]) -> bool {
    for digit in low_to_high {
        let (difference, borrow) = digit.sub_with_borrow(D::zero(), true);
        *digit = difference;
        if !borrow {
            return false;
        }
    }

    true
}

impl<D: Digit> Default for Unsigned<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digit> PartialOrd for Unsigned<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Ord for Unsigned<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slice(&self.low_to_high, &other.low_to_high)
    }
}

impl<'a, D: Digit> AddAssign<&'a Unsigned<D>> for Unsigned<D> {
    fn add_assign(&mut self, rhs: &'a Unsigned<D>) {
        let overlap = self.len().min(rhs.len());
        self.low_to_high.reserve(max(self.len(), rhs.len()) + 1 - self.len());

        let mut carry = false;
        for (left, &right) in self.low_to_high.iter_mut().zip(rhs.low_to_high.iter()) {
            (*left, carry) = left.add_with_carry(right, carry);
        }

        if rhs.len() > overlap {
            self.low_to_high.extend_from_slice(&rhs.low_to_high[overlap..]);
        }

        if carry && propagate_carry(&mut self.low_to_high[overlap..]) {
            self.low_to_high.push(D::one());
        }
    }
}

impl<'a, D: Digit> SubAssign<&'a Unsigned<D>> for Unsigned<D> {
    /// # Panics
    ///
    /// If `rhs > self`, see `try_sub_assign` for a fallible variant.
    fn sub_assign(&mut self, rhs: &'a Unsigned<D>) {
        if let Err(error) = self.try_sub_assign(rhs) {
            panic!("{}", error);
        }
    }
}

impl<'a, D: Digit> MulAssign<&'a Unsigned<D>> for Unsigned<D> {
    fn mul_assign(&mut self, rhs: &'a Unsigned<D>) {
        let left = mem::take(self);
        if left.is_zero() || rhs.is_zero() {
            return;
        }

        trace!(left_digits = left.len(), right_digits = rhs.len(), "schoolbook multiplication");

        self.low_to_high.reserve(left.len() + rhs.len() + 1);
        for (offset, &digit) in rhs.low_to_high.iter().enumerate() {
            if !digit.is_zero() {
                *self += &left.scaled(digit, offset);
            }
        }
    }
}

forward_binop!(Unsigned, Add, add, AddAssign, add_assign);
forward_binop!(Unsigned, Sub, sub, SubAssign, sub_assign);
forward_binop!(Unsigned, Mul, mul, MulAssign, mul_assign);

impl<D: Digit> Step for Unsigned<D> {
    fn increment(&mut self) {
        if propagate_carry(&mut self.low_to_high) {
            self.low_to_high.push(D::one());
        }
    }

    /// # Panics
    ///
    /// If the value is zero, see `try_decrement` for a fallible variant.
    fn decrement(&mut self) {
        if let Err(error) = self.try_decrement() {
            panic!("{}", error);
        }
    }
}

macro_rules! from_unsigned {
    ($($native:ty),+) => {
        $(
            impl<D: Digit> From<$native> for Unsigned<D> {
                fn from(value: $native) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )+
    }
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
with_native!(Unsigned, u8, u16, u32, u64, u128, usize);

impl<D: Digit> Zero for Unsigned<D> {
    fn zero() -> Self {
        Self::new()
    }

    fn set_zero(&mut self) {
        self.low_to_high.clear();
    }

    fn is_zero(&self) -> bool {
        self.low_to_high.is_empty()
    }
}

impl<D: Digit> One for Unsigned<D> {
    fn one() -> Self {
        Self { low_to_high: smallvec![D::one()] }
    }

    fn set_one(&mut self) {
        self.low_to_high.clear();
        self.low_to_high.push(D::one());
    }

    fn is_one(&self) -> bool {
        self.low_to_high[..] == [D::one()]
    }
}

impl<D: Digit> ToPrimitive for Unsigned<D> {
    fn to_i64(&self) -> Option<i64> {
        self.to_u128().and_then(|value| value.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|value| value.to_u64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|value| value.to_i128())
    }

    fn to_u128(&self) -> Option<u128> {
        Unsigned::to_u128(self)
    }
}

impl<D: Digit> Sum for Unsigned<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut total, value| {
            total += &value;
            total
        })
    }
}

impl<D: Digit> Product for Unsigned<D> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |mut total, value| {
            total *= &value;
            total
        })
    }
}

/// Digits in storage order, least significant first. Diagnostic only.
pub(crate) fn write_digits<D: Digit>(
    f: &mut fmt::Formatter<'_>,
    low_to_high: &[D],
) -> fmt::Result {
    if low_to_high.is_empty() {
        f.write_str("0")
    } else {
        write!(f, "{}", low_to_high.iter().format(", "))
    }
}

impl<D: Digit> fmt::Debug for Unsigned<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unsigned(")?;
        write_digits(f, &self.low_to_high)?;
        f.write_str(")")
    }
}
