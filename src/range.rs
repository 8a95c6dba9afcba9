//! Normalized range descriptors and the slice composition algebra.
//!
//! A [`SliceRange`] is always expressed in the index space of the backing
//! sequence. Its `stop` lies exactly on the step grid (`stop = start + len *
//! step`), so the length is an exact division and two ranges compose into a
//! single range without ever walking the elements.

use core::fmt;

use crate::{
    error::{Error, Result},
    index::signed_len,
    slice::Slice,
};

/// A fully resolved `start:stop:step` triple.
///
/// Invariants, established by [`SliceRange::normalize`] and preserved by
/// [`SliceRange::compose`]:
/// - `step != 0`
/// - `(stop - start) / step` is an exact, non-negative division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceRange {
    start: isize,
    stop: isize,
    step: isize,
}

static_assertions::assert_eq_size!(SliceRange, [isize; 3]);

impl SliceRange {
    /// The range `0:len:1`.
    pub fn full(len: usize) -> Self {
        SliceRange {
            start: 0,
            stop: signed_len(len),
            step: 1,
        }
    }

    /// Resolves omitted and negative fields of `slice` against `len`,
    /// clamping both bounds into the sequence.
    pub fn normalize(slice: Slice, len: usize) -> Result<Self> {
        let step = slice.step.unwrap_or(1);
        if step == 0 {
            tracing::debug!(%slice, "rejected zero step");
            return Err(Error::ZeroStep);
        }

        let len = signed_len(len);
        // A reversed walk may stop "before index 0", which is -1.
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = slice.start.map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = slice.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        Ok(Self::snapped(start as i128, stop as i128, step as i128, start))
    }

    /// Re-expresses `inner`, a range over the positions of `self`, as a
    /// single range over the backing sequence of `self`.
    ///
    /// The combined stop is clamped to the boundary of `self` that the
    /// combined walk approaches: `self.stop` when `inner` runs forward, and
    /// the position just before `self.start` when it runs backward.
    pub fn compose(&self, inner: &SliceRange) -> Self {
        let start = self.start as i128;
        let step = self.step as i128;

        let combined_step = step * inner.step as i128;
        let combined_start = start + inner.start as i128 * step;
        let reach = start + inner.stop as i128 * step;
        let boundary = if inner.step > 0 {
            self.stop as i128
        } else {
            start - step
        };
        let combined_stop = if combined_step < 0 {
            reach.max(boundary)
        } else {
            reach.min(boundary)
        };

        let composed = Self::snapped(combined_start, combined_stop, combined_step, self.start);
        debug_assert_eq!(composed.len(), inner.len());
        composed
    }

    pub fn start(&self) -> isize {
        self.start
    }

    pub fn stop(&self) -> isize {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step
    }

    pub fn len(&self) -> usize {
        ((self.stop - self.start) / self.step) as usize
    }

    /// True when the range selects nothing, i.e. `start == stop` or the
    /// bounds point against the direction of `step`.
    pub fn is_empty(&self) -> bool {
        self.stop == self.start || (self.stop > self.start) != (self.step >= 0)
    }

    /// Backing position of the `index`-th element. `index` must be `< len()`.
    #[inline]
    pub(crate) fn position(&self, index: usize) -> isize {
        debug_assert!(index < self.len());
        self.start + self.step * index as isize
    }

    /// Builds a range from wide intermediate values, moving `stop` onto the
    /// step grid.
    ///
    /// A range of at most one element does not depend on its step. When such
    /// a range cannot be stored as given it keeps only the sign of the step.
    /// An empty range whose start lies outside `isize` is re-anchored at
    /// `anchor`.
    fn snapped(start: i128, stop: i128, step: i128, anchor: isize) -> Self {
        let len = span_len(start, stop, step);
        let unit = if step < 0 { -1 } else { 1 };

        let Ok(start) = isize::try_from(start) else {
            debug_assert_eq!(len, 0);
            return SliceRange {
                start: anchor,
                stop: anchor,
                step: unit,
            };
        };

        let fit = |step: i128| -> Option<Self> {
            Some(SliceRange {
                start,
                stop: isize::try_from(start as i128 + len * step).ok()?,
                step: isize::try_from(step).ok()?,
            })
        };

        fit(step).or_else(|| fit(unit as i128)).unwrap_or(SliceRange {
            start,
            stop: start,
            step: unit,
        })
    }
}

/// Number of grid points `start, start + step, ...` strictly before `stop`.
fn span_len(start: i128, stop: i128, step: i128) -> i128 {
    if step > 0 && stop > start {
        (stop - start - 1) / step + 1
    } else if step < 0 && start > stop {
        (start - stop - 1) / -step + 1
    } else {
        0
    }
}

impl fmt::Display for SliceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}
