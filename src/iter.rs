use core::iter::FusedIterator;

use crate::{sequence::Sequence, view::View};

/// Lazy iterator over the elements of a [`View`], in view order.
///
/// Created by [`View::iter`]. Each call walks the backing sequence afresh,
/// so iterating a view twice yields the same elements twice.
///
/// A backing sequence whose `get` returns `None` for a position below its own
/// `len` ends the iteration at that element, from either end. The iterator
/// then stays exhausted, even though `len()` promised more items.
pub struct Iter<'a, S: ?Sized> {
    view: View<'a, S>,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    pub(crate) fn new(view: View<'a, S>) -> Self {
        Iter {
            view,
            front: 0,
            back: view.len(),
        }
    }

    fn read(&mut self, offset: usize) -> Option<&'a S::Item> {
        let item = self.view.read(offset).ok();
        if item.is_none() {
            self.front = self.back;
        }
        item
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            view: self.view,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let offset = self.front;
        self.front += 1;
        self.read(offset)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.read(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{IntoSlice, Sequence};

    static DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn forward_and_backward() {
        let view = DIGITS.view((1..9).step(3)).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 4, 7]);
        assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), [7, 4, 1]);
    }

    #[test]
    fn meets_in_the_middle() {
        let view = DIGITS.view(..).unwrap();
        let mut iter = view.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.nth(6), Some(&7));
        assert_eq!(iter.next_back(), Some(&8));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn nth_past_the_end() {
        let view = DIGITS.view(..3).unwrap();
        let mut iter = view.iter();
        assert_eq!(iter.nth(usize::MAX), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn restartable() {
        let view = DIGITS.view((..).step(-4)).unwrap();
        let first: Vec<_> = view.iter().collect();
        let second: Vec<_> = view.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, [&9, &5, &1]);
    }

    /// Claims two more elements than it can produce.
    struct Overreporting(Vec<u8>);

    impl Sequence for Overreporting {
        type Item = u8;

        fn len(&self) -> usize {
            self.0.len() + 2
        }

        fn get(&self, index: usize) -> Option<&u8> {
            self.0.get(index)
        }
    }

    #[test]
    fn short_backing_ends_iteration() {
        let data = Overreporting(DIGITS[..4].to_vec());
        let view = data.view(..).unwrap();
        assert_eq!(view.iter().len(), 6);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);

        let mut backwards = view.iter();
        assert_eq!(backwards.next_back(), None);
        assert_eq!(backwards.len(), 0);
        assert_eq!(backwards.next(), None);
        assert_eq!(backwards.next_back(), None);
    }
}
