use alloc::vec::Vec;

use crate::{sequence::Sequence, view::View};

/// An owned copy of the elements a view yielded at one point in time.
///
/// Produced by [`View::deep_copy`]. Shares nothing with the sequence the
/// original view read through, and is itself a [`Sequence`], so it can be
/// viewed and sliced again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Snapshot<T> {
    items: Vec<T>,
}

impl<T> Snapshot<T> {
    /// A full-span view over the copied elements.
    pub fn as_view(&self) -> View<'_, Vec<T>> {
        View::full(&self.items)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for Snapshot<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Snapshot {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Sequence for Snapshot<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};
    use core::cell::RefCell;

    use super::*;
    use crate::IntoSlice;

    #[test]
    fn snapshot_can_be_resliced() {
        let data = vec![10, 20, 30, 40, 50];
        let snapshot = data.view((..).step(2)).unwrap().deep_copy();
        assert_eq!(snapshot.as_slice(), [10, 30, 50]);

        let tail = snapshot.view(1..).unwrap();
        assert_eq!(tail, [30, 50]);
        assert!(core::ptr::eq(tail.source(), &snapshot));
    }

    #[test]
    fn mutation_does_not_reach_the_original() {
        let data: Vec<RefCell<String>> = ["a", "b", "c"]
            .into_iter()
            .map(|s| RefCell::new(String::from(s)))
            .collect();
        let view = data.view(..2).unwrap();
        let snapshot = view.deep_copy();

        snapshot.as_view()[0].borrow_mut().push('!');
        assert_eq!(*view[0].borrow(), "a");
        assert_eq!(*snapshot.as_slice()[0].borrow(), "a!");

        data[1].borrow_mut().push('?');
        assert_eq!(*snapshot.as_slice()[1].borrow(), "b");
    }

    #[test]
    fn empty_view_copies_to_empty_snapshot() {
        let data = vec![1, 2, 3];
        let snapshot = data.view(3..).unwrap().deep_copy();
        assert!(snapshot.as_view().is_empty());
        assert_eq!(snapshot.into_vec(), Vec::<i32>::new());
    }
}
