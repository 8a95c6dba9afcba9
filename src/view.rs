//! The [`View`] type: a flattened, read-only window onto a backing sequence.

use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
};

use crate::{
    error::{Error, Result},
    index::{ToIndex, signed_len},
    iter::Iter,
    range::SliceRange,
    sequence::Sequence,
    slice::{IntoSlice, Slice},
    snapshot::Snapshot,
};

/// A lazy `source[start:stop:step]` that copies nothing.
///
/// A view always refers directly to its backing sequence: slicing a view
/// produces another view over the same backing sequence with a combined
/// range, never a view of a view. Views are `Copy`; copying one shares the
/// backing sequence.
///
/// ```
/// use subseq::{IntoSlice, View};
///
/// let data: Vec<i32> = (0..10).collect();
/// let view = View::new(&data, (3..8).step(2)).unwrap();
/// assert_eq!(view, [3, 5, 7]);
///
/// let reversed = view.slice((..).step(-1)).unwrap();
/// assert_eq!(reversed, [7, 5, 3]);
/// assert_eq!(reversed.to_string(), "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][7:1:-2]");
/// ```
pub struct View<'a, S: ?Sized> {
    source: &'a S,
    range: SliceRange,
}

static_assertions::assert_impl_all!(View<'static, [u8]>: Copy, Send, Sync);

impl<S: ?Sized> Clone for View<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for View<'_, S> {}

/// Anything a [`View`] can be built from.
///
/// Implemented for references to backing sequences and for views
/// themselves. Building from a view composes the two ranges and keeps the
/// view's backing sequence, so a `View` never wraps another `View`.
pub trait Source<'a> {
    type Backing: Sequence + ?Sized + 'a;

    fn into_view(self, slice: Slice) -> Result<View<'a, Self::Backing>>;
}

impl<'a, S: Sequence + ?Sized> Source<'a> for &'a S {
    type Backing = S;

    fn into_view(self, slice: Slice) -> Result<View<'a, S>> {
        let range = SliceRange::normalize(slice, self.len())?;
        tracing::trace!(%slice, %range, "created view");
        Ok(View {
            source: self,
            range,
        })
    }
}

impl<'a, S: Sequence + ?Sized> Source<'a> for View<'a, S> {
    type Backing = S;

    fn into_view(self, slice: Slice) -> Result<View<'a, S>> {
        let inner = SliceRange::normalize(slice, self.len())?;
        let range = self.range.compose(&inner);
        tracing::trace!(outer = %self.range, %inner, %range, "composed view");
        Ok(View {
            source: self.source,
            range,
        })
    }
}

impl<'a, S: Sequence + ?Sized> View<'a, S> {
    /// Creates a view of `source[slice]`.
    ///
    /// Fails with [`Error::ZeroStep`] for a zero step and with
    /// [`Error::InvalidIndexKind`] for a bound that does not fit in `isize`.
    pub fn new<Src>(source: Src, slice: impl IntoSlice) -> Result<Self>
    where
        Src: Source<'a, Backing = S>,
    {
        source.into_view(slice.into_slice()?)
    }

    /// A view of the whole of `source`, in order.
    pub fn full(source: &'a S) -> Self {
        View {
            source,
            range: SliceRange::full(source.len()),
        }
    }

    /// Slices this view. The result refers to the same backing sequence.
    pub fn slice(&self, slice: impl IntoSlice) -> Result<Self> {
        View::new(*self, slice)
    }

    /// The backing sequence this view reads through.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// The normalized range, in the backing sequence's index space.
    pub fn range(&self) -> SliceRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the element at `index`. Negative indices count from the end of
    /// the view.
    pub fn get<I: ToIndex>(&self, index: I) -> Result<&'a S::Item> {
        let index = index.to_index()?;
        let len = self.len();
        let offset = if index < 0 {
            index + signed_len(len)
        } else {
            index
        };
        match usize::try_from(offset) {
            Ok(offset) if offset < len => self.read(offset),
            _ => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Reads the `offset`-th element (`offset < len()`) from the backing
    /// sequence.
    pub(crate) fn read(&self, offset: usize) -> Result<&'a S::Item> {
        let position = self.range.position(offset);
        usize::try_from(position)
            .ok()
            .and_then(|position| self.source.get(position))
            .ok_or_else(|| Error::IndexOutOfRange {
                index: position,
                len: self.source.len(),
            })
    }

    pub fn first(&self) -> Option<&'a S::Item> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&'a S::Item> {
        self.get(-1).ok()
    }

    pub fn iter(&self) -> Iter<'a, S> {
        Iter::new(*self)
    }

    pub fn contains<T>(&self, value: &T) -> bool
    where
        S::Item: PartialEq<T>,
    {
        self.iter().any(|item| item == value)
    }

    /// Offset within the view of the first element equal to `value`.
    pub fn position<T>(&self, value: &T) -> Option<usize>
    where
        S::Item: PartialEq<T>,
    {
        self.iter().position(|item| item == value)
    }

    /// Number of elements equal to `value`.
    pub fn count<T>(&self, value: &T) -> usize
    where
        S::Item: PartialEq<T>,
    {
        self.iter().filter(|item| *item == value).count()
    }

    /// Collects references to the viewed elements.
    pub fn to_vec(&self) -> Vec<&'a S::Item> {
        self.iter().collect()
    }

    /// Clones every viewed element into a new, independently owned sequence.
    ///
    /// This is the only operation that breaks sharing with the backing
    /// sequence. Use [`Snapshot::as_view`] to view the copy.
    pub fn deep_copy(&self) -> Snapshot<S::Item>
    where
        S::Item: Clone,
    {
        Snapshot::from_iter(self.iter().cloned())
    }
}

impl<'a, S: Sequence + ?Sized> Index<usize> for View<'a, S> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &S::Item {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, S: Sequence + ?Sized> IntoIterator for View<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

impl<'a, S: Sequence + ?Sized> IntoIterator for &View<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

// --- Elementwise comparison ---

impl<S, R> PartialEq<View<'_, R>> for View<'_, S>
where
    S: Sequence + ?Sized,
    R: Sequence + ?Sized,
    S::Item: PartialEq<R::Item>,
{
    fn eq(&self, other: &View<'_, R>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<S> Eq for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: Eq,
{
}

impl<S, U> PartialEq<[U]> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<S, U, const N: usize> PartialEq<[U; N]> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<S, U> PartialEq<&[U]> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<S, U> PartialEq<Vec<U>> for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<S> Hash for View<'_, S>
where
    S: Sequence + ?Sized,
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

// --- Formatting ---

impl<S: fmt::Debug + ?Sized> fmt::Debug for View<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("source", &self.source)
            .field("range", &format_args!("{}", self.range))
            .finish()
    }
}

/// Renders as `source[start:stop:step]` with the normalized bounds spelled
/// out. On a negative step a stop of `-1` means "before index 0".
impl<S: fmt::Debug + ?Sized> fmt::Display for View<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.source, self.range)
    }
}
