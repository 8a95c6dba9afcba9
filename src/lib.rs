//! Subseq - zero-copy strided views over sequences
//!
//! # Overview
//!
//! A [`View`] is `source[start:stop:step]` without the copy: a borrowed
//! reference to a backing sequence plus one normalized [`SliceRange`].
//! Slicing a view composes the ranges, so a view of a view of a view still
//! reads straight from the original sequence.
//!
//! # Quick Start
//!
//! ```
//! use subseq::{IntoSlice, Sequence, View};
//!
//! let data: Vec<u32> = (0..10).collect();
//!
//! let middle = data.view(3..8).unwrap();
//! assert_eq!(middle, [3, 4, 5, 6, 7]);
//! assert_eq!(middle.get(2), Ok(&5));
//! assert_eq!(middle.get(-1), Ok(&7));
//!
//! // Negative bounds count from the end, negative steps walk backwards.
//! let tail = View::new(&data, (-2..0).step(-3)).unwrap();
//! assert_eq!(tail, [8, 5, 2]);
//!
//! // Views of views collapse into one range over `data`.
//! let nested = middle.slice((..).step(-2)).unwrap().slice(1..).unwrap();
//! assert_eq!(nested, [5, 3]);
//! assert!(std::ptr::eq(nested.source(), &data));
//! ```
//!
//! # Slices
//!
//! Bounds are given as native ranges (`3..8`, `3..`, `..-1`, `..`) over any
//! primitive integer, optionally with [`IntoSlice::step`], or spelled out
//! with [`Slice`] when a field must be omitted independently.
//!
//! # Features
//!
//! - `std`: link the standard library (also enables `tracing/std`). The
//!   crate is `no_std` + `alloc` otherwise.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod error;
mod index;
mod iter;
mod range;
mod sequence;
mod slice;
mod snapshot;
mod view;

pub use error::{Error, Result};
pub use index::ToIndex;
pub use iter::Iter;
pub use range::SliceRange;
pub use sequence::Sequence;
pub use slice::{IntoSlice, Slice, Stepped};
pub use snapshot::Snapshot;
pub use view::{Source, View};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_composition() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
