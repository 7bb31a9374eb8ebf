//! C API for Fortran callers.
//!
//! Exposes the process-wide [`GlobBridge`](crate::GlobBridge) through the
//! three-call sequence Fortran programs already use (`ifiles_`, `getfile_`,
//! `freefiles_`), plus `ifilelen_` and the capacity-checked `getfilecap_`. Symbol names carry the
//! trailing underscore gfortran appends to external procedure names, and
//! every argument is passed by reference.
//!
//! ```fortran
//! integer, external :: ifiles, getfilecap
//! character(len=256) :: fname
//! integer :: n, i, il
//!
//! n = ifiles('*.dat', 5)
//! do i = 0, n - 1
//!    fname = ' '
//!    il = getfilecap(fname, len(fname), i)
//!    if (il < 0) stop 'getfilecap failed'
//!    print *, fname(1:il)
//! end do
//! call freefiles()
//! ```
//!
//! # Safety Guarantees
//!
//! - Null pointer checks on all inputs
//! - Panic catching at the FFI boundary
//! - Negative status codes instead of undefined behavior on misuse
//! - `freefiles_` may be called any number of times
//!
//! # Status Codes
//!
//! - `FGLOB_NOSPACE` (-1) - `glob(3)` ran out of memory
//! - `FGLOB_ABORTED` (-2) - `glob(3)` aborted on a read error
//! - `FGLOB_INVALID_ARGUMENT` (-3) - null pointer or bad length
//! - `FGLOB_INDEX_OUT_OF_RANGE` (-4) - no match with that index
//! - `FGLOB_NO_MATCH_SET` (-5) - nothing enumerated, or already freed
//! - `FGLOB_BUFFER_TOO_SMALL` (-6) - path longer than the given capacity
//! - `FGLOB_INTERNAL_ERROR` (-7) - a panic was caught

use crate::bridge::{with_global_bridge, GlobBridge};
use crate::error::{GlobError, StatusCode, FGLOB_INTERNAL_ERROR};
use crate::fixed::{copy_out, PatternRequest};
use std::os::raw::{c_int, c_uchar};
use std::panic::{self, AssertUnwindSafe};
use std::{ptr, slice};

fn guarded(name: &str, f: impl FnOnce() -> StatusCode) -> StatusCode {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        log::error!("{}: panic caught at C boundary", name);
        FGLOB_INTERNAL_ERROR
    })
}

fn to_c_int(n: usize) -> Result<c_int, GlobError> {
    c_int::try_from(n).map_err(|_| GlobError::InvalidLength {
        length: n as i64,
        capacity: c_int::MAX as usize,
    })
}

fn index_arg(bridge: &GlobBridge, i: *const c_int) -> Result<usize, GlobError> {
    if i.is_null() {
        return Err(GlobError::NullPointer);
    }
    let len = bridge.match_count()?;
    // SAFETY: checked non-null above; the caller passes a valid integer
    let index = unsafe { *i };
    usize::try_from(index).map_err(|_| GlobError::IndexOutOfRange {
        index: i64::from(index),
        len,
    })
}

/// Find files matching the first `*l` bytes of `mask`.
///
/// Returns the number of matches (possibly 0), or a negative status code.
/// Any match set from an earlier call is freed first. On failure no match
/// set is held afterwards.
///
/// # Safety
///
/// * `l` must point to a valid integer
/// * `mask` must be valid for reads of `*l` bytes
#[no_mangle]
pub unsafe extern "C" fn ifiles_(mask: *const c_uchar, l: *const c_int) -> c_int {
    guarded("ifiles_", move || {
        let request = if l.is_null() {
            Err(GlobError::NullPointer)
        } else {
            PatternRequest::from_raw(mask, *l)
        };

        with_global_bridge(|bridge| {
            let result = request
                .and_then(|request| bridge.enumerate(&request))
                .and_then(to_c_int);
            match result {
                Ok(count) => count,
                Err(err) => {
                    bridge.release();
                    log::warn!("ifiles_: {}", err);
                    err.status_code()
                }
            }
        })
    })
}

fn copy_match(file: *mut c_uchar, capacity: Option<usize>, i: *const c_int) -> StatusCode {
    let result = with_global_bridge(|bridge| {
        let index = index_arg(bridge, i)?;
        let path = bridge.match_bytes(index)?;
        let written = if path.is_empty() {
            0
        } else if file.is_null() {
            return Err(GlobError::NullPointer);
        } else if let Some(capacity) = capacity {
            // SAFETY: the caller promises `file` holds `capacity` bytes
            let out = unsafe { slice::from_raw_parts_mut(file, capacity) };
            copy_out(path, out)?
        } else {
            // SAFETY: the caller promises room for the whole path
            unsafe { ptr::copy_nonoverlapping(path.as_ptr(), file, path.len()) };
            path.len()
        };
        to_c_int(written)
    });
    result.unwrap_or_else(|err| {
        log::warn!("getfile: {}", err);
        err.status_code()
    })
}

/// Copy match number `*i` (zero-based) into `file`.
///
/// The whole path is copied with no terminator, and the rest of `file` is
/// left as it was. The caller guarantees room for it; use [`ifilelen_`]
/// first, or [`getfilecap_`] to have the capacity checked.
///
/// `*l` is only written, never read: on return it holds the number of bytes
/// written, or a negative status.
///
/// # Safety
///
/// * `l` and `i` must point to valid integers
/// * `file` must be valid for writes of the full path length
#[no_mangle]
pub unsafe extern "C" fn getfile_(file: *mut c_uchar, l: *mut c_int, i: *const c_int) {
    if l.is_null() {
        log::warn!("getfile_: {}", GlobError::NullPointer);
        return;
    }
    *l = guarded("getfile_", move || copy_match(file, None, i));
}

/// Copy match number `*i` (zero-based) into `file` holding `*cap` bytes.
///
/// `*cap` is only read. The path is copied only if it fits, with no
/// terminator. Returns the number of bytes written, or a negative status
/// (`FGLOB_BUFFER_TOO_SMALL` if the path is longer than `*cap`).
///
/// # Safety
///
/// * `cap` and `i` must point to valid integers
/// * `file` must be valid for writes of `*cap` bytes
#[no_mangle]
pub unsafe extern "C" fn getfilecap_(
    file: *mut c_uchar,
    cap: *const c_int,
    i: *const c_int,
) -> c_int {
    guarded("getfilecap_", move || {
        if cap.is_null() {
            log::warn!("getfilecap_: {}", GlobError::NullPointer);
            return GlobError::NullPointer.status_code();
        }
        let capacity = *cap;
        match usize::try_from(capacity) {
            Ok(capacity) => copy_match(file, Some(capacity), i),
            Err(_) => {
                let err = GlobError::InvalidLength {
                    length: i64::from(capacity),
                    capacity: 0,
                };
                log::warn!("getfilecap_: {}", err);
                err.status_code()
            }
        }
    })
}

/// Byte length of match number `*i`, or a negative status code.
///
/// Lets callers size their buffer before calling [`getfile_`].
///
/// # Safety
///
/// * `i` must point to a valid integer
#[no_mangle]
pub unsafe extern "C" fn ifilelen_(i: *const c_int) -> c_int {
    guarded("ifilelen_", move || {
        with_global_bridge(|bridge| {
            index_arg(bridge, i)
                .and_then(|index| bridge.match_len(index))
                .and_then(to_c_int)
                .unwrap_or_else(|err| {
                    log::warn!("ifilelen_: {}", err);
                    err.status_code()
                })
        })
    })
}

/// Free the match set allocated by [`ifiles_`]. Safe to call with none held.
#[no_mangle]
pub extern "C" fn freefiles_() {
    guarded("freefiles_", || {
        with_global_bridge(GlobBridge::release);
        0
    });
}
