//! Raw bindings to the platform `glob(3)` facility.
//!
//! These are low-level bindings and should not be used directly.
//! Use the safe wrappers in [`crate::glob`] instead.

use std::ffi::CStr;
use std::os::raw::c_int;

pub(crate) use libc::glob_t;
pub(crate) use libc::{GLOB_ABORTED, GLOB_NOMATCH, GLOB_NOSPACE};
pub(crate) use libc::{GLOB_ERR, GLOB_MARK, GLOB_NOCHECK, GLOB_NOESCAPE, GLOB_NOSORT};

/// A `glob_t` with no paths, safe to hand to both `glob` and `globfree`.
pub(crate) fn empty_glob_t() -> glob_t {
    // SAFETY: glob_t is plain C data; all-zero is the state libc expects
    // before the first glob() call (null gl_pathv, zero counts).
    unsafe { std::mem::zeroed() }
}

/// Runs `glob(3)` with no error callback.
///
/// # Safety
///
/// `pglob` must either be freshly created by [`empty_glob_t`] or have been
/// released with [`globfree`] since its last use.
pub(crate) unsafe fn glob(pattern: &CStr, flags: c_int, pglob: *mut glob_t) -> c_int {
    libc::glob(pattern.as_ptr(), flags, None, pglob)
}

/// Releases everything `glob` allocated into `pglob` and resets it to empty.
///
/// # Safety
///
/// `pglob` must point to a `glob_t` that was zeroed or filled by [`glob`].
pub(crate) unsafe fn globfree(pglob: *mut glob_t) {
    libc::globfree(pglob);
    *pglob = empty_glob_t();
}
