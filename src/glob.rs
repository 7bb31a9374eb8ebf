use crate::error::GlobError;
use crate::ffi;
use crate::flags::GlobFlags;
use std::ffi::{CStr, CString, OsStr};
use std::fmt;
use std::ops::Index;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Result of one `glob()` call.
///
/// This type frees the platform-allocated path list when dropped, so a
/// `MatchSet` can never be released twice or read after release.
///
/// # Example
///
/// ```no_run
/// use fglob::{glob, GlobFlags};
///
/// let result = glob("*.toml", GlobFlags::empty())?;
/// for path in &result {
///     println!("{}", String::from_utf8_lossy(path));
/// }
///
/// if !result.is_empty() {
///     println!("First: {}", String::from_utf8_lossy(&result[0]));
/// }
/// # Ok::<(), fglob::GlobError>(())
/// ```
pub struct MatchSet {
    inner: ffi::glob_t,
}

impl MatchSet {
    fn empty() -> Self {
        MatchSet {
            inner: ffi::empty_glob_t(),
        }
    }

    /// Returns the number of matched paths.
    #[inline]
    pub fn len(&self) -> usize {
        if self.inner.gl_pathv.is_null() {
            return 0;
        }
        self.inner.gl_pathc
    }

    /// Returns `true` if no paths matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw bytes of the path at `index`, without terminator.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len() {
            return None;
        }
        unsafe {
            let ptr = *self.inner.gl_pathv.add(index);
            if ptr.is_null() {
                return None;
            }
            // SAFETY: glob(3) stores NUL-terminated strings that live until globfree
            Some(CStr::from_ptr(ptr).to_bytes())
        }
    }

    /// Returns the path at `index` as `&str`, or `None` if it is out of
    /// bounds or not valid UTF-8.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Returns the path at `index` as a [`Path`].
    pub fn get_path(&self, index: usize) -> Option<&Path> {
        self.get(index).map(|bytes| Path::new(OsStr::from_bytes(bytes)))
    }

    /// Returns an iterator over the matched paths.
    #[inline]
    pub fn iter(&self) -> MatchSetIter<'_> {
        MatchSetIter { set: self, next: 0 }
    }

    /// Converts to a vector of owned strings, replacing invalid UTF-8.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }
}

impl fmt::Debug for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchSet")
            .field("len", &self.len())
            .field("paths", &self.to_strings())
            .finish()
    }
}

impl Drop for MatchSet {
    fn drop(&mut self) {
        unsafe {
            ffi::globfree(&mut self.inner);
        }
    }
}

impl Index<usize> for MatchSet {
    type Output = [u8];

    /// Returns the path at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a [u8];
    type IntoIter = MatchSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// SAFETY: MatchSet exclusively owns the path list glob(3) allocated
unsafe impl Send for MatchSet {}
// SAFETY: MatchSet's methods only take &self and don't mutate shared state
unsafe impl Sync for MatchSet {}

/// Iterator over the raw bytes of each `MatchSet` path, in match order.
pub struct MatchSetIter<'a> {
    set: &'a MatchSet,
    next: usize,
}

impl<'a> Iterator for MatchSetIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.set.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MatchSetIter<'_> {}

impl std::iter::FusedIterator for MatchSetIter<'_> {}

/// Match a shell-style pattern against the filesystem.
///
/// Delegates to the platform `glob(3)` with no error callback.
///
/// # Returns
///
/// * `Ok(set)` - the matched paths; empty if nothing matched
/// * `Err(GlobError::InvalidPattern)` - the pattern contains a NUL byte
/// * `Err(GlobError::NoSpace | GlobError::Aborted)` - `glob(3)` failed
///
/// # Supported Patterns
///
/// | Pattern | Description |
/// |---------|-------------|
/// | `*` | Matches any string (including empty) |
/// | `?` | Matches any single character |
/// | `[abc]` | Matches one character from the set |
/// | `[!abc]` | Matches one character NOT in the set |
/// | `[a-z]` | Matches one character in the range |
pub fn glob(pattern: &str, flags: GlobFlags) -> Result<MatchSet, GlobError> {
    let pattern_c = CString::new(pattern).map_err(|_| GlobError::InvalidPattern)?;
    glob_cstr(&pattern_c, flags)
}

/// Same as [`glob`] for a pattern that is already NUL-terminated.
pub fn glob_cstr(pattern: &CStr, flags: GlobFlags) -> Result<MatchSet, GlobError> {
    let mut set = MatchSet::empty();

    let result = unsafe { ffi::glob(pattern, flags.bits(), &mut set.inner) };

    // On failure `set` drops here, which frees any partial results.
    GlobError::from_code(result).map(|_| set)
}
