//! Conversion of caller-supplied integers into signed machine indices.
//!
//! Every bound and position that crosses the public API goes through
//! [`ToIndex`] exactly once, so the rest of the crate only ever deals with
//! `isize`.

use alloc::string::ToString;

use crate::error::{Error, Result};

/// An integer that can be used as a slice bound or a view position.
///
/// Conversion fails with [`Error::InvalidIndexKind`] when the value does not
/// fit in `isize` (e.g. `u64::MAX`).
pub trait ToIndex: Copy {
    fn to_index(self) -> Result<isize>;
}

macro_rules! impl_to_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToIndex for $ty {
                #[inline]
                fn to_index(self) -> Result<isize> {
                    isize::try_from(self).map_err(|_| {
                        tracing::debug!(value = %self, "rejected index");
                        Error::InvalidIndexKind {
                            type_name: core::any::type_name::<$ty>(),
                            value: self.to_string(),
                        }
                    })
                }
            }
        )*
    };
}

impl_to_index!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Lengths past `isize::MAX` only occur for zero-sized element types; they
/// saturate, since such a sequence cannot be addressed past that point anyway.
#[inline]
pub(crate) fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}
