//! # Big integers
//!
//! An [`Unsigned`] magnitude does the digit arithmetic; a [`Signed`] integer only resolves signs
//! and delegates.
use crate::integer::big::signed::Signed;
use crate::integer::big::unsigned::Unsigned;

pub mod digit;
pub mod signed;
pub mod unsigned;

/// Digit width of the default big integer types.
pub type UnsignedDigit = u64;

/// Unsigned magnitude with the default digit width.
pub type BigUnsigned = Unsigned<UnsignedDigit>;
/// Signed integer with the default digit width.
pub type BigInteger = Signed<UnsignedDigit>;
