//! # Arbitrary precision integers
//!
//! Sign-magnitude integers of unbounded width. An [`Unsigned`] magnitude stores a normalized
//! sequence of digits, least significant first; a [`Signed`] integer pairs such a magnitude with a
//! [`Sign`].
//!
//! The digit width is a type parameter, see [`Digit`]. The aliases [`BigUnsigned`] and
//! [`BigInteger`] use 64 bit digits.
//!
//! ```
//! use relp_bignum::BigInteger;
//!
//! let mut x = BigInteger::from(-1_i64);
//! x += BigInteger::from(1);
//! assert_eq!(x, 0);
//! assert!(x.is_positive());
//! ```
#[macro_use]
mod macros;

pub mod error;
pub mod integer;
pub mod sign;
pub mod traits;

pub use error::{ArithmeticError, ArithmeticResult, Operation};
pub use integer::big::{BigInteger, BigUnsigned, UnsignedDigit};
pub use integer::big::digit::Digit;
pub use integer::big::signed::Signed;
pub use integer::big::unsigned::Unsigned;
pub use sign::Sign;
pub use traits::Step;
