//! Flag types for glob operations.
//!
//! Flag values come from the platform's `<glob.h>` through `libc`.

use bitflags::bitflags;

use crate::ffi;

bitflags! {
    /// Bitflags options passed to the platform `glob(3)` call.
    ///
    /// The Fortran entry points always use [`GlobFlags::empty()`], which is
    /// plain POSIX matching with sorted results.
    ///
    /// # Example
    ///
    /// ```
    /// use fglob::GlobFlags;
    ///
    /// let flags = GlobFlags::MARK | GlobFlags::NOSORT;
    /// assert!(flags.contains(GlobFlags::MARK));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlobFlags: i32 {
        /// Return on read errors instead of skipping unreadable directories.
        const ERR = ffi::GLOB_ERR;

        /// Append a slash to each directory name.
        const MARK = ffi::GLOB_MARK;

        /// Don't sort the names.
        const NOSORT = ffi::GLOB_NOSORT;

        /// Return the pattern itself if no matches found.
        const NOCHECK = ffi::GLOB_NOCHECK;

        /// Backslashes don't escape metacharacters.
        const NOESCAPE = ffi::GLOB_NOESCAPE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values_match_libc() {
        assert_eq!(GlobFlags::ERR.bits(), libc::GLOB_ERR);
        assert_eq!(GlobFlags::MARK.bits(), libc::GLOB_MARK);
        assert_eq!(GlobFlags::NOSORT.bits(), libc::GLOB_NOSORT);
        assert_eq!(GlobFlags::NOCHECK.bits(), libc::GLOB_NOCHECK);
        assert_eq!(GlobFlags::NOESCAPE.bits(), libc::GLOB_NOESCAPE);
    }

    #[test]
    fn test_default_is_plain_matching() {
        assert_eq!(GlobFlags::default(), GlobFlags::empty());
        assert_eq!(GlobFlags::default().bits(), 0);
    }

    #[test]
    fn test_flags_are_distinct_bits() {
        let all = [
            GlobFlags::ERR,
            GlobFlags::MARK,
            GlobFlags::NOSORT,
            GlobFlags::NOCHECK,
            GlobFlags::NOESCAPE,
        ];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for b in &all[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }
}
