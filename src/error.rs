//! Error types for fglob operations.

use crate::ffi;
use std::fmt;
use std::os::raw::c_int;

/// Status code returned through the Fortran-facing C ABI.
pub type StatusCode = c_int;

pub const FGLOB_NOSPACE: StatusCode = -1;
pub const FGLOB_ABORTED: StatusCode = -2;
pub const FGLOB_INVALID_ARGUMENT: StatusCode = -3;
pub const FGLOB_INDEX_OUT_OF_RANGE: StatusCode = -4;
pub const FGLOB_NO_MATCH_SET: StatusCode = -5;
pub const FGLOB_BUFFER_TOO_SMALL: StatusCode = -6;
pub const FGLOB_INTERNAL_ERROR: StatusCode = -7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobError {
    /// Out of memory (GLOB_NOSPACE).
    NoSpace,

    /// Read error or operation aborted (GLOB_ABORTED).
    Aborted,

    /// The pattern contains an interior NUL byte.
    InvalidPattern,

    /// A length argument is negative or larger than its buffer.
    InvalidLength { length: i64, capacity: usize },

    /// A required pointer argument was null.
    NullPointer,

    /// Match index outside `[0, len)` of the active match set.
    IndexOutOfRange { index: i64, len: usize },

    /// No match set is alive: nothing was enumerated, or it was released.
    NoMatchSet,

    /// The output buffer cannot hold the whole path.
    BufferTooSmall { needed: usize, capacity: usize },

    /// A panic was caught at the C boundary.
    Internal,
}

impl fmt::Display for GlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobError::NoSpace => write!(f, "out of memory"),
            GlobError::Aborted => write!(f, "operation aborted or read error"),
            GlobError::InvalidPattern => write!(f, "pattern contains a NUL byte"),
            GlobError::InvalidLength { length, capacity } => {
                write!(f, "length {} is invalid for a buffer of {} bytes", length, capacity)
            }
            GlobError::NullPointer => write!(f, "null pointer argument"),
            GlobError::IndexOutOfRange { index, len } => {
                write!(f, "match index {} out of range for {} matches", index, len)
            }
            GlobError::NoMatchSet => write!(f, "no active match set"),
            GlobError::BufferTooSmall { needed, capacity } => {
                write!(f, "path needs {} bytes but buffer holds {}", needed, capacity)
            }
            GlobError::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for GlobError {}

impl GlobError {
    /// Maps a `glob(3)` return code. `Ok(false)` means the pattern matched nothing.
    pub(crate) fn from_code(code: c_int) -> Result<bool, Self> {
        match code {
            0 => Ok(true),
            ffi::GLOB_NOMATCH => Ok(false),
            ffi::GLOB_NOSPACE => Err(GlobError::NoSpace),
            ffi::GLOB_ABORTED => Err(GlobError::Aborted),
            _ => Err(GlobError::Aborted),
        }
    }

    /// Negative status reported to C and Fortran callers.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GlobError::NoSpace => FGLOB_NOSPACE,
            GlobError::Aborted => FGLOB_ABORTED,
            GlobError::InvalidPattern
            | GlobError::InvalidLength { .. }
            | GlobError::NullPointer => FGLOB_INVALID_ARGUMENT,
            GlobError::IndexOutOfRange { .. } => FGLOB_INDEX_OUT_OF_RANGE,
            GlobError::NoMatchSet => FGLOB_NO_MATCH_SET,
            GlobError::BufferTooSmall { .. } => FGLOB_BUFFER_TOO_SMALL,
            GlobError::Internal => FGLOB_INTERNAL_ERROR,
        }
    }
}
