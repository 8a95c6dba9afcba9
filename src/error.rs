//! Error types for view construction and indexed reads.

use alloc::string::String;

use thiserror::Error;

/// Errors produced while building or reading a [`View`](crate::View).
///
/// Every error is returned at the point of the offending call. A view is
/// either fully normalized or not constructed at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slice was given a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// A bound or index could not be represented as a machine index.
    #[error("`{value}` of type `{type_name}` is not a valid index")]
    InvalidIndexKind {
        type_name: &'static str,
        value: String,
    },

    /// A read fell outside the view or outside its backing sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
