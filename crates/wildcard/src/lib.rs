//! Path-oriented wildcard patterns with capture extraction.
//!
//! A pattern is split into a literal prefix, a wildcard segment and a literal suffix.
//! Simple wildcard segments are evaluated without a regular expression engine,
//! anything else is translated into an anchored regular expression.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters except `/`
//! - `**` - Matches zero or more characters including `/`, longer runs of `*` are the same as `**`
//! - `\*`, `\\` - Escaped literal characters
//! - `\` followed by any other character matches both characters literally
//! - A trailing `\` without a following character is treated as a literal backslash
//! - Any other character matches itself
//!
//! # Captures
//!
//! A successful match yields [`Captures`]: index 0 is the whole candidate,
//! the following indices hold the text matched by each wildcard from left to right.
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("foo/*/bar");
//! let caps = pattern.captures("foo/baz/bar").unwrap();
//! assert_eq!(caps.to_vec(), ["foo/baz/bar", "baz"]);
//! assert!(pattern.captures("foo/a/b/bar").is_none());
//!
//! // Leftmost `**` consumes as much as possible.
//! let pattern = Pattern::new("**/*/**");
//! let caps = pattern.captures("foo/bar/baz/bug").unwrap();
//! assert_eq!(caps.groups().collect::<Vec<_>>(), ["foo/bar", "baz", "bug"]);
//!
//! // Escaped wildcards
//! let pattern = Pattern::new(r"a\*b");
//! assert!(pattern.matches("a*b"));
//! assert!(!pattern.matches("axb"));
//! ```

mod captures;
mod compile;
mod error;
mod pattern;

pub use captures::*;
pub use error::*;
pub use pattern::*;
