//! Operator families derived from a small set of primitive operations.
//!
//! Each integer type implements equality, a total order and the compound assignment operators
//! taking their right-hand side by reference. The macros below derive the remaining forms from
//! those.

/// Derive the binary operator forms, owned and borrowed, from a compound assignment that takes
/// its right-hand side by reference.
macro_rules! forward_binop {
    ($t:ident, $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<D: $crate::integer::big::digit::Digit> ::std::ops::$imp_assign for $t<D> {
            fn $method_assign(&mut self, rhs: Self) {
                ::std::ops::$imp_assign::$method_assign(self, &rhs);
            }
        }

        impl<D: $crate::integer::big::digit::Digit> ::std::ops::$imp for $t<D> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                ::std::ops::$imp_assign::$method_assign(&mut self, &rhs);
                self
            }
        }

        impl<'a, D: $crate::integer::big::digit::Digit> ::std::ops::$imp<&'a $t<D>> for $t<D> {
            type Output = Self;

            fn $method(mut self, rhs: &'a $t<D>) -> Self::Output {
                ::std::ops::$imp_assign::$method_assign(&mut self, rhs);
                self
            }
        }

        impl<'a, D: $crate::integer::big::digit::Digit> ::std::ops::$imp<$t<D>> for &'a $t<D> {
            type Output = $t<D>;

            fn $method(self, rhs: $t<D>) -> Self::Output {
                let mut result = self.clone();
                ::std::ops::$imp_assign::$method_assign(&mut result, &rhs);
                result
            }
        }

        impl<'a, 'b, D: $crate::integer::big::digit::Digit> ::std::ops::$imp<&'b $t<D>> for &'a $t<D> {
            type Output = $t<D>;

            fn $method(self, rhs: &'b $t<D>) -> Self::Output {
                let mut result = self.clone();
                ::std::ops::$imp_assign::$method_assign(&mut result, rhs);
                result
            }
        }
    };
}

/// Comparison and arithmetic with native integers, through conversion into `$t<D>`.
///
/// Requires `From<$native>` for `$t<D>`.
macro_rules! with_native {
    ($t:ident, $($native:ty),+) => {
        $(
            impl<D: $crate::integer::big::digit::Digit> PartialEq<$native> for $t<D> {
                fn eq(&self, other: &$native) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl<D: $crate::integer::big::digit::Digit> PartialEq<$t<D>> for $native {
                fn eq(&self, other: &$t<D>) -> bool {
                    <$t<D> as PartialEq<$native>>::eq(other, self)
                }
            }

            impl<D: $crate::integer::big::digit::Digit> PartialOrd<$native> for $t<D> {
                fn partial_cmp(&self, other: &$native) -> Option<::std::cmp::Ordering> {
                    Some(Ord::cmp(self, &Self::from(*other)))
                }
            }

            impl<D: $crate::integer::big::digit::Digit> PartialOrd<$t<D>> for $native {
                fn partial_cmp(&self, other: &$t<D>) -> Option<::std::cmp::Ordering> {
                    <$t<D> as PartialOrd<$native>>::partial_cmp(other, self)
                        .map(::std::cmp::Ordering::reverse)
                }
            }

            with_native!(@arithmetic $t, $native, Add, add, AddAssign, add_assign);
            with_native!(@arithmetic $t, $native, Sub, sub, SubAssign, sub_assign);
            with_native!(@arithmetic $t, $native, Mul, mul, MulAssign, mul_assign);
        )+
    };
    (@arithmetic $t:ident, $native:ty, $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<D: $crate::integer::big::digit::Digit> ::std::ops::$imp_assign<$native> for $t<D> {
            fn $method_assign(&mut self, rhs: $native) {
                ::std::ops::$imp_assign::$method_assign(self, &Self::from(rhs));
            }
        }

        impl<D: $crate::integer::big::digit::Digit> ::std::ops::$imp<$native> for $t<D> {
            type Output = Self;

            fn $method(mut self, rhs: $native) -> Self::Output {
                ::std::ops::$imp_assign::$method_assign(&mut self, &Self::from(rhs));
                self
            }
        }
    };
}
