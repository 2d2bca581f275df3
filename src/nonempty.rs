//! Non-empty vector type
//!
//! `NonEmptyVec<T>` is the error channel of a failed validation: when a
//! [`Validated`](crate::validation::Validated) outcome is a failure, the type
//! itself guarantees there is at least one error to report.
//!
//! # Examples
//!
//! ```
//! use faultline::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("at least 6 characters", vec!["at least one number"]);
//! assert_eq!(errors.head(), &"at least 6 characters");
//! assert_eq!(errors.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// ```
/// use faultline::NonEmptyVec;
///
/// let nev = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(nev.last(), &3);
/// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a one-element vector.
    ///
    /// ```
    /// use faultline::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton("too short");
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// ```
    /// use faultline::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// All elements except the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; exists to satisfy clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Apply `f` to every element, keeping order.
    ///
    /// ```
    /// use faultline::NonEmptyVec;
    ///
    /// let codes = NonEmptyVec::new("E1", vec!["E2"]).map(|e| e.to_lowercase());
    /// assert_eq!(codes.into_vec(), vec!["e1", "e2"]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

// Concatenation, left elements first.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(items)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(42);
        assert_eq!(nev.head(), &42);
        assert_eq!(nev.tail(), &[] as &[i32]);
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);

        assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn test_last() {
        assert_eq!(NonEmptyVec::new(1, vec![2, 3]).last(), &3);
        assert_eq!(NonEmptyVec::singleton(7).last(), &7);
    }

    #[test]
    fn test_push() {
        let mut nev = NonEmptyVec::singleton("a");
        nev.push("b");
        assert_eq!(nev.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_map_keeps_order() {
        let nev = NonEmptyVec::new(1, vec![2, 3]).map(|x| x * 10);
        assert_eq!(nev.into_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_combine_concatenates() {
        let left = NonEmptyVec::new("e1", vec!["e2"]);
        let right = NonEmptyVec::singleton("e3");
        assert_eq!(left.combine(right).into_vec(), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_iter_and_into_iter() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(nev.iter().sum::<i32>(), 6);
        let collected: Vec<_> = nev.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_index() {
        let nev = NonEmptyVec::new('a', vec!['b']);
        assert_eq!(nev[0], 'a');
        assert_eq!(nev[1], 'b');
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nev = NonEmptyVec::singleton(42);
        let _ = nev[1];
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_sequence() {
        let nev = NonEmptyVec::new(1, vec![2]);
        let json = serde_json::to_string(&nev).unwrap();
        assert_eq!(json, "[1,2]");

        let back: NonEmptyVec<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nev);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_empty() {
        let result: Result<NonEmptyVec<i32>, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
