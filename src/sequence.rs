//! The [`Sequence`] view that every operator in this crate works on.
//!
//! A `Sequence<'a, T>` borrows an ordered slice of elements, or stands for an
//! **absent** source. Operators treat the absent view exactly like an empty
//! one unless their documentation says otherwise (`all` is the notable case),
//! and always hand back freshly allocated results.
//!
//! ```
//! use sequery::*;
//!
//! let numbers = vec![3, 1, 2];
//! let seq = from_slice(&numbers);
//! assert_eq!(seq.len(), 3);
//! assert!(!seq.is_absent());
//!
//! let missing: Sequence<'_, i32> = absent();
//! assert!(missing.is_absent());
//! assert!(missing.is_empty());
//! ```

use std::fmt;
use std::slice;

/// A borrowed, possibly-absent, ordered run of elements.
///
/// The view is `Copy` regardless of `T`, so it can be passed around freely
/// while the caller keeps ownership of the data.
pub struct Sequence<'a, T> {
    items: Option<&'a [T]>,
}

/// Borrow `items` as a present [`Sequence`].
#[must_use]
pub const fn from_slice<T>(items: &[T]) -> Sequence<'_, T> {
    Sequence::new(items)
}

/// The absent [`Sequence`].
#[must_use]
pub const fn absent<'a, T>() -> Sequence<'a, T> {
    Sequence::absent()
}

impl<'a, T> Sequence<'a, T> {
    /// Wrap a slice. An empty slice is present but empty.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items: Some(items) }
    }

    /// A view standing for a missing source.
    #[must_use]
    pub const fn absent() -> Self {
        Self { items: None }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.items.is_none()
    }

    /// Number of elements; `0` when absent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` for both absent and empty views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The underlying elements, or an empty slice when absent.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.items.unwrap_or(&[])
    }

    /// Borrowing iterator over the elements in order.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Copy the elements into an owned `Vec` (empty when absent).
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sequence<'_, T> {}

impl<T> Default for Sequence<'_, T> {
    /// Defaults to the absent view.
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items {
            Some(items) => f.debug_tuple("Sequence").field(&items).finish(),
            None => f.write_str("Sequence(<absent>)"),
        }
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Sequence<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items.as_slice())
    }
}

impl<'a, T> From<Option<&'a [T]>> for Sequence<'a, T> {
    fn from(items: Option<&'a [T]>) -> Self {
        Self { items }
    }
}

impl<'a, T> From<Option<&'a Vec<T>>> for Sequence<'a, T> {
    fn from(items: Option<&'a Vec<T>>) -> Self {
        Self {
            items: items.map(Vec::as_slice),
        }
    }
}

impl<'a, T> IntoIterator for Sequence<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
