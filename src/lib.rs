//! # fglob
//!
//! Filesystem globbing for Fortran programs.
//!
//! fglob exposes the platform `glob(3)` through a small C ABI that a Fortran
//! program can call with fixed-width character buffers:
//! - `ifiles_` - enumerate the paths matching a pattern
//! - `getfile_` - copy one matched path into a caller buffer
//! - `getfilecap_` - the same, refusing paths longer than the buffer
//! - `ifilelen_` - length of one matched path
//! - `freefiles_` - free the matches
//!
//! The same functionality is available to Rust code through [`glob`],
//! [`MatchSet`] and [`GlobBridge`].
//!
//! ## Basic Usage
//!
//! ```no_run
//! use fglob::{glob, GlobFlags};
//!
//! let result = glob("src/*.rs", GlobFlags::empty())?;
//! for path in &result {
//!     println!("{}", String::from_utf8_lossy(path));
//! }
//! # Ok::<(), fglob::GlobError>(())
//! ```
//!
//! ## Fixed-Width Strings
//!
//! A Fortran `character(len=*)` argument arrives as a buffer and a length,
//! with no terminator. [`PatternRequest`] turns it into a pattern, and
//! [`GlobBridge::get_match`] copies results back without padding:
//!
//! ```no_run
//! use fglob::{trimmed_len, GlobBridge, PatternRequest};
//!
//! let mask = *b"*.f90                ";
//! let mut bridge = GlobBridge::new();
//! let count = bridge.enumerate(&PatternRequest::new(&mask, trimmed_len(&mask))?)?;
//!
//! let mut fname = [b' '; 128];
//! for i in 0..count {
//!     let n = bridge.get_match(i, &mut fname)?;
//!     println!("{}", String::from_utf8_lossy(&fname[..n]));
//! }
//! bridge.release();
//! # Ok::<(), fglob::GlobError>(())
//! ```
//!
//! ## Supported Patterns
//!
//! Patterns are passed straight to the platform `glob(3)`, with no brace or
//! tilde expansion:
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | `*` | Matches any string (including empty) |
//! | `?` | Matches any single character |
//! | `[abc]` | Matches one character from the set |
//! | `[!abc]` | Matches one character NOT in the set |
//! | `[a-z]` | Matches one character in the range |
//!
//! ## Error Handling
//!
//! A pattern that matches nothing is not an error: it yields an empty
//! [`MatchSet`] (a count of 0). Real failures are a [`GlobError`]:
//!
//! ```no_run
//! use fglob::{glob, GlobError, GlobFlags};
//!
//! match glob("*.dat", GlobFlags::ERR) {
//!     Ok(result) if result.is_empty() => println!("No files matched"),
//!     Ok(result) => println!("Found {} files", result.len()),
//!     Err(GlobError::NoSpace) => println!("Out of memory"),
//!     Err(err) => println!("glob failed: {}", err),
//! }
//! ```
//!
//! Through the C ABI the same errors surface as negative status codes.

#[cfg(not(unix))]
compile_error!("fglob requires a unix platform providing glob(3)");

mod bridge;
pub mod c_api;
mod error;
mod ffi;
mod fixed;
mod flags;
mod glob;

pub use bridge::*;
pub use error::*;
pub use fixed::*;
pub use flags::*;
pub use glob::*;
