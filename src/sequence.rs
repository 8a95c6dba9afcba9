use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

use crate::{error::Result, slice::IntoSlice, view::View};

/// Read-only random access to a finite ordered sequence.
///
/// This is the only capability a [`View`] needs from the data it reads
/// through. Both operations are expected to be O(1).
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a view over `self[slice]` without copying any element.
    ///
    /// ```
    /// use subseq::{IntoSlice, Sequence};
    ///
    /// let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// let odds = data.view((1..).step(2)).unwrap();
    /// assert_eq!(odds, [1, 3, 5, 7, 9]);
    /// ```
    fn view(&self, slice: impl IntoSlice) -> Result<View<'_, Self>> {
        View::new(self, slice)
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}
