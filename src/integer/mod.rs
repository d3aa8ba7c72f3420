//! # Integers
//!
//! Arbitrary precision, sign-magnitude.
use std::cmp::Ordering;

pub mod big;

/// Compare two normalized little endian digit sequences.
///
/// A longer sequence is larger, which is only valid because neither slice ends in a zero digit.
pub(crate) fn cmp_slice<D: Ord + num::Zero>(a: &[D], b: &[D]) -> Ordering {
    debug_assert!(a.last().map_or(true, |digit| !digit.is_zero()));
    debug_assert!(b.last().map_or(true, |digit| !digit.is_zero()));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::integer::cmp_slice;

    #[test]
    fn length_decides() {
        assert_eq!(cmp_slice::<u8>(&[], &[1]), Ordering::Less);
        assert_eq!(cmp_slice::<u8>(&[0xFF, 0xFF], &[0, 0, 1]), Ordering::Less);
        assert_eq!(cmp_slice::<u8>(&[0, 1], &[0xFF]), Ordering::Greater);
    }

    #[test]
    fn most_significant_first() {
        assert_eq!(cmp_slice::<u8>(&[0xFF, 1], &[0, 2]), Ordering::Less);
        assert_eq!(cmp_slice::<u8>(&[1, 2], &[0, 2]), Ordering::Greater);
        assert_eq!(cmp_slice::<u8>(&[3, 2], &[3, 2]), Ordering::Equal);
        assert_eq!(cmp_slice::<u8>(&[], &[]), Ordering::Equal);
    }
}
