//! Semigroup trait for merging accumulated failures
//!
//! A Semigroup is a type with an associative binary operation. The validation
//! accumulator uses it to fold the errors of every failing check into one
//! value, in the order the checks were declared.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use faultline::Semigroup;
//!
//! let first = vec!["at least 6 characters"];
//! let second = vec!["at least one number"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["at least 6 characters", "at least one number"]
//! );
//!
//! let pair = (vec![1], "a".to_string()).combine((vec![2], "b".to_string()));
//! assert_eq!(pair, (vec![1, 2], "ab".to_string()));
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both operands by value: accumulated errors are moved into
/// the result rather than copied.
///
/// Implementations must keep the left operand's elements before the right
/// operand's ones when the type is ordered; the accumulator relies on this to
/// report errors in declaration order.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// ```
    /// use faultline::Semigroup;
    ///
    /// assert_eq!("ab".to_string().combine("c".to_string()), "abc");
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
