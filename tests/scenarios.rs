//! # Digit boundaries
//!
//! Carries and borrows that cross a digit, for narrow and for default digits.
use num::Zero;

use relp_bignum::{BigInteger, BigUnsigned, Sign, Signed, Step, Unsigned};

#[test]
fn carry_into_new_digit() {
    assert_eq!(Unsigned::<u8>::from(0xFF_u8) + Unsigned::from(1_u8), Unsigned::from(0x100_u16));
    assert_eq!(BigUnsigned::from(u64::MAX) + BigUnsigned::from(1_u8), BigUnsigned::from(1_u128 << 64));
}

#[test]
fn borrow_removes_digit() {
    let difference = Unsigned::<u8>::from(0x100_u16) - Unsigned::from(1_u8);
    assert_eq!(difference, Unsigned::from(0xFF_u8));
    assert_eq!(difference.len(), 1);

    let mut x = BigUnsigned::from(1_u128 << 64);
    x.decrement();
    assert_eq!(x.digits(), &[u64::MAX]);
}

#[test]
fn products() {
    assert_eq!(Unsigned::<u8>::from(256_u16) * Unsigned::from(256_u16), Unsigned::from(65536_u32));
    assert_eq!(Unsigned::<u8>::from(128_u8) * Unsigned::from(2_u8), Unsigned::from(256_u16));
    assert_eq!(
        BigUnsigned::from(u64::MAX) * BigUnsigned::from(u64::MAX),
        BigUnsigned::from(u64::MAX as u128 * u64::MAX as u128),
    );
}

#[test]
fn canonical_zero() {
    let zero = BigInteger::from(-1) + BigInteger::from(1);
    assert_eq!(zero, BigInteger::from(0));
    assert_eq!(zero.sign(), Sign::Positive);
    assert!(zero.is_zero());

    let zero = Signed::<u8>::from(-1) + Signed::from(1);
    assert_eq!(zero.sign(), Sign::Positive);
}

#[test]
fn wider_than_native() {
    // 2^256 - 1 squared, then the square subtracted back out
    let mut x = BigInteger::from(1);
    for _ in 0..256 {
        x *= 2;
    }
    x.decrement();
    let square = &x * &x;
    assert_eq!(square.magnitude().len(), 8);
    assert_eq!(&square - &square, 0);
    assert!(-square.clone() < -x.clone());
    assert!(square > x);
}
