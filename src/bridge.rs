//! Enumeration sessions.
//!
//! A [`GlobBridge`] holds at most one [`MatchSet`] between an enumerate call
//! and the matching release. The Fortran entry points share one process-wide
//! bridge through [`with_global_bridge`].

use crate::error::GlobError;
use crate::fixed::{copy_out, PatternRequest};
use crate::flags::GlobFlags;
use crate::glob::{glob_cstr, MatchSet};
use std::sync::{Mutex, PoisonError};

static GLOBAL_BRIDGE: Mutex<GlobBridge> = Mutex::new(GlobBridge::new());

/// Holder of the current match set.
///
/// States are Empty (no set) and Populated. `enumerate` always ends in
/// Populated on success and Empty on failure; `release` always ends in Empty.
///
/// # Example
///
/// ```no_run
/// use fglob::{GlobBridge, PatternRequest};
///
/// let mut bridge = GlobBridge::new();
/// let count = bridge.enumerate(&PatternRequest::new(b"*.f90", 5)?)?;
///
/// let mut name = [b' '; 256];
/// for i in 0..count {
///     let written = bridge.get_match(i, &mut name)?;
///     println!("{}", String::from_utf8_lossy(&name[..written]));
/// }
/// bridge.release();
/// # Ok::<(), fglob::GlobError>(())
/// ```
#[derive(Debug, Default)]
pub struct GlobBridge {
    flags: GlobFlags,
    matches: Option<MatchSet>,
}

impl GlobBridge {
    /// An empty bridge using plain POSIX matching.
    pub const fn new() -> Self {
        GlobBridge {
            flags: GlobFlags::empty(),
            matches: None,
        }
    }

    /// An empty bridge passing `flags` to every glob call.
    pub fn with_flags(flags: GlobFlags) -> Self {
        GlobBridge {
            flags,
            matches: None,
        }
    }

    pub fn flags(&self) -> GlobFlags {
        self.flags
    }

    /// Returns `true` while a match set is alive.
    pub fn is_populated(&self) -> bool {
        self.matches.is_some()
    }

    /// Number of paths in the current match set.
    pub fn match_count(&self) -> Result<usize, GlobError> {
        self.active().map(MatchSet::len)
    }

    /// Globs `request`, replacing any match set still held.
    ///
    /// Returns the match count; zero matches is `Ok(0)`.
    pub fn enumerate(&mut self, request: &PatternRequest) -> Result<usize, GlobError> {
        if self.matches.take().is_some() {
            log::debug!("enumerate: dropping unreleased match set");
        }

        match glob_cstr(request.as_c_str(), self.flags) {
            Ok(set) => {
                let count = set.len();
                log::debug!(
                    "enumerate {:?}: {} match(es)",
                    String::from_utf8_lossy(request.as_bytes()),
                    count
                );
                self.matches = Some(set);
                Ok(count)
            }
            Err(err) => {
                log::debug!(
                    "enumerate {:?} failed: {}",
                    String::from_utf8_lossy(request.as_bytes()),
                    err
                );
                Err(err)
            }
        }
    }

    /// The bytes of match `index`, without terminator.
    pub fn match_bytes(&self, index: usize) -> Result<&[u8], GlobError> {
        let set = self.active()?;
        set.get(index).ok_or_else(|| {
            let err = GlobError::IndexOutOfRange {
                index: index as i64,
                len: set.len(),
            };
            log::debug!("{}", err);
            err
        })
    }

    /// Byte length of match `index`.
    pub fn match_len(&self, index: usize) -> Result<usize, GlobError> {
        self.match_bytes(index).map(<[u8]>::len)
    }

    /// Copies match `index` to the front of `out`, returning the bytes written.
    ///
    /// No terminator or padding is written.
    pub fn get_match(&self, index: usize, out: &mut [u8]) -> Result<usize, GlobError> {
        let path = self.match_bytes(index)?;
        copy_out(path, out).map_err(|err| {
            log::debug!("get_match {}: {}", index, err);
            err
        })
    }

    /// Frees the current match set. Safe to call when Empty.
    ///
    /// Returns whether a match set was actually freed.
    pub fn release(&mut self) -> bool {
        match self.matches.take() {
            Some(set) => {
                log::debug!("release: freeing {} match(es)", set.len());
                true
            }
            None => {
                log::trace!("release: no active match set");
                false
            }
        }
    }

    fn active(&self) -> Result<&MatchSet, GlobError> {
        self.matches.as_ref().ok_or_else(|| {
            log::debug!("{}", GlobError::NoMatchSet);
            GlobError::NoMatchSet
        })
    }
}

/// Runs `f` with exclusive access to the process-wide bridge.
///
/// Each call is atomic on its own. Callers on several threads that need a
/// whole enumerate, read, release cycle to be undisturbed must hold their
/// own lock around it.
pub fn with_global_bridge<R>(f: impl FnOnce(&mut GlobBridge) -> R) -> R {
    let mut bridge = GLOBAL_BRIDGE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut bridge)
}
