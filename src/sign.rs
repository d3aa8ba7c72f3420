//! # Signs
//!
//! Sign of a sign-magnitude integer.
use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

/// Sign of a value.
///
/// There is no third variant for zero: the value zero has sign `Positive`. Existing `Sign` types,
/// such as the one in `num`, have a separate zero case, which would allow two representations of
/// the same integer once combined with a magnitude that can also be zero.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Debug)]
pub enum Sign {
    /// `x < 0`
    Negative,
    /// `x >= 0`
    Positive,
}

impl Sign {
    /// Sign of a native integer, with zero being positive.
    pub fn of<T: Default + PartialOrd>(value: &T) -> Self {
        if *value < T::default() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::sign::Sign;

    #[test]
    fn of() {
        assert_eq!(Sign::of(&-3_i32), Sign::Negative);
        assert_eq!(Sign::of(&0_i64), Sign::Positive);
        assert_eq!(Sign::of(&i128::MAX), Sign::Positive);
    }

    #[test]
    fn order() {
        assert!(Sign::Negative < Sign::Positive);
    }

    #[test]
    fn mul() {
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Positive, Sign::Negative);
    }
}
