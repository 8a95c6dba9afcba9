//! Slice arguments as supplied by callers, before normalization.

use core::{
    fmt,
    ops::{Range, RangeFrom, RangeFull, RangeTo},
};

use crate::{error::Result, index::ToIndex};

/// A `start:stop:step` selection whose fields may be omitted or negative.
///
/// Negative `start`/`stop` count from the end of whatever the slice is
/// applied to. Omitted fields take their direction-dependent defaults when
/// the slice is normalized against a concrete length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    /// `::`, the whole sequence in order.
    pub const FULL: Slice = Slice::new(None, None, None);

    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Slice { start, stop, step }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

/// Anything that can describe a slice: [`Slice`] itself and the native
/// range types over any primitive integer.
///
/// ```
/// use subseq::{IntoSlice, Slice};
///
/// assert_eq!((3..8).into_slice().unwrap(), Slice::new(Some(3), Some(8), None));
/// assert_eq!((..).step(-1).into_slice().unwrap(), Slice::new(None, None, Some(-1)));
/// ```
pub trait IntoSlice: Sized {
    fn into_slice(self) -> Result<Slice>;

    /// Attaches a step, overriding any step already present.
    fn step<I: ToIndex>(self, step: I) -> Stepped<Self, I> {
        Stepped { inner: self, step }
    }
}

impl IntoSlice for Slice {
    fn into_slice(self) -> Result<Slice> {
        Ok(self)
    }
}

impl<I: ToIndex> IntoSlice for Range<I> {
    fn into_slice(self) -> Result<Slice> {
        Ok(Slice::new(
            Some(self.start.to_index()?),
            Some(self.end.to_index()?),
            None,
        ))
    }
}

impl<I: ToIndex> IntoSlice for RangeFrom<I> {
    fn into_slice(self) -> Result<Slice> {
        Ok(Slice::new(Some(self.start.to_index()?), None, None))
    }
}

impl<I: ToIndex> IntoSlice for RangeTo<I> {
    fn into_slice(self) -> Result<Slice> {
        Ok(Slice::new(None, Some(self.end.to_index()?), None))
    }
}

impl IntoSlice for RangeFull {
    fn into_slice(self) -> Result<Slice> {
        Ok(Slice::FULL)
    }
}

/// A slice description with an explicit step. Built with [`IntoSlice::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepped<R, I> {
    inner: R,
    step: I,
}

impl<R: IntoSlice, I: ToIndex> IntoSlice for Stepped<R, I> {
    fn into_slice(self) -> Result<Slice> {
        let mut slice = self.inner.into_slice()?;
        slice.step = Some(self.step.to_index()?);
        Ok(slice)
    }
}
