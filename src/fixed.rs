//! Fixed-width string marshalling.
//!
//! Fortran character variables are blank-padded buffers with a separate
//! length and no terminator. This module is the single place where such a
//! buffer becomes a NUL-terminated pattern, and where a matched path is
//! copied back out into a caller buffer.

use crate::error::GlobError;
use std::ffi::{CStr, CString};
use std::os::raw::{c_int, c_uchar};
use std::slice;

/// A pattern taken from a fixed-width buffer plus an explicit length.
///
/// Exactly `length` bytes are copied. As with `strncpy`, the pattern ends at
/// the first NUL byte inside that region.
///
/// # Example
///
/// ```
/// use fglob::PatternRequest;
///
/// let request = PatternRequest::new(b"*.txt     ", 5)?;
/// assert_eq!(request.as_bytes(), b"*.txt");
///
/// // A shorter length truncates the pattern.
/// let request = PatternRequest::new(b"*.txt", 3)?;
/// assert_eq!(request.as_bytes(), b"*.t");
/// # Ok::<(), fglob::GlobError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRequest {
    pattern: CString,
}

impl PatternRequest {
    /// Copies `length` bytes of `buffer` into a terminated pattern.
    pub fn new(buffer: &[u8], length: usize) -> Result<Self, GlobError> {
        if length > buffer.len() {
            return Err(GlobError::InvalidLength {
                length: length as i64,
                capacity: buffer.len(),
            });
        }
        let region = &buffer[..length];
        let end = region.iter().position(|&b| b == 0).unwrap_or(region.len());
        let pattern = CString::new(&region[..end]).map_err(|_| GlobError::InvalidPattern)?;
        Ok(PatternRequest { pattern })
    }

    /// Builds a request from a caller-owned pointer and a C `int` length.
    ///
    /// # Safety
    ///
    /// If `buffer` is non-null it must be valid for reads of `length` bytes.
    pub unsafe fn from_raw(buffer: *const c_uchar, length: c_int) -> Result<Self, GlobError> {
        if length < 0 {
            return Err(GlobError::InvalidLength {
                length: i64::from(length),
                capacity: 0,
            });
        }
        if length == 0 {
            return Self::new(&[], 0);
        }
        if buffer.is_null() {
            return Err(GlobError::NullPointer);
        }
        let len = length as usize;
        Self::new(slice::from_raw_parts(buffer, len), len)
    }

    /// The pattern bytes, without terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.pattern.as_bytes()
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.pattern
    }

    /// Consumes the request, yielding the terminated pattern.
    pub fn into_cstring(self) -> CString {
        self.pattern
    }
}

/// Length of `buffer` without trailing blanks, like Fortran `len_trim`.
pub fn trimmed_len(buffer: &[u8]) -> usize {
    buffer
        .iter()
        .rposition(|&b| b != b' ')
        .map_or(0, |last| last + 1)
}

/// Copies all of `src` to the front of `out`.
///
/// No terminator is written and the rest of `out` is left untouched.
/// Returns the number of bytes written. If `src` does not fit, nothing is
/// written and `BufferTooSmall` is returned.
pub fn copy_out(src: &[u8], out: &mut [u8]) -> Result<usize, GlobError> {
    if src.len() > out.len() {
        return Err(GlobError::BufferTooSmall {
            needed: src.len(),
            capacity: out.len(),
        });
    }
    out[..src.len()].copy_from_slice(src);
    Ok(src.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_copy() {
        let request = PatternRequest::new(b"*.txt", 5).unwrap();
        assert_eq!(request.as_bytes(), b"*.txt");
        assert_eq!(request.as_c_str().to_bytes_with_nul(), b"*.txt\0");
    }

    #[test]
    fn test_short_length_truncates() {
        let request = PatternRequest::new(b"*.txt", 3).unwrap();
        assert_eq!(request.as_bytes(), b"*.t");
    }

    #[test]
    fn test_padding_is_kept_when_inside_length() {
        let request = PatternRequest::new(b"*.f90   ", 8).unwrap();
        assert_eq!(request.as_bytes(), b"*.f90   ");
    }

    #[test]
    fn test_length_beyond_buffer_is_rejected() {
        let err = PatternRequest::new(b"*.txt", 6).unwrap_err();
        assert_eq!(
            err,
            GlobError::InvalidLength {
                length: 6,
                capacity: 5
            }
        );
    }

    #[test]
    fn test_nul_inside_length_ends_pattern() {
        let request = PatternRequest::new(b"ab\0cd", 5).unwrap();
        assert_eq!(request.as_bytes(), b"ab");
    }

    #[test]
    fn test_zero_length() {
        let request = PatternRequest::new(b"*", 0).unwrap();
        assert_eq!(request.as_bytes(), b"");
        assert_eq!(request.into_cstring().as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_from_raw() {
        let buf = b"data/*.nc";
        let request = unsafe { PatternRequest::from_raw(buf.as_ptr(), 6) }.unwrap();
        assert_eq!(request.as_bytes(), b"data/*");

        let err = unsafe { PatternRequest::from_raw(buf.as_ptr(), -1) }.unwrap_err();
        assert!(matches!(err, GlobError::InvalidLength { length: -1, .. }));

        let err = unsafe { PatternRequest::from_raw(std::ptr::null(), 4) }.unwrap_err();
        assert_eq!(err, GlobError::NullPointer);

        let request = unsafe { PatternRequest::from_raw(std::ptr::null(), 0) }.unwrap();
        assert!(request.as_bytes().is_empty());
    }

    #[test]
    fn test_trimmed_len() {
        assert_eq!(trimmed_len(b"*.txt     "), 5);
        assert_eq!(trimmed_len(b"a b "), 3);
        assert_eq!(trimmed_len(b"    "), 0);
        assert_eq!(trimmed_len(b""), 0);
    }

    #[test]
    fn test_copy_out_leaves_tail_untouched() {
        let mut out = *b"XXXXXXXX";
        assert_eq!(copy_out(b"a.txt", &mut out), Ok(5));
        assert_eq!(&out, b"a.txtXXX");
    }

    #[test]
    fn test_copy_out_too_small_writes_nothing() {
        let mut out = *b"XXX";
        assert_eq!(
            copy_out(b"a.txt", &mut out),
            Err(GlobError::BufferTooSmall {
                needed: 5,
                capacity: 3
            })
        );
        assert_eq!(&out, b"XXX");
    }
}
