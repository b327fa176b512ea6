//! Cached path wildcard matching with capture extraction.
//!
//! Patterns use `*` for any run of characters within a path segment,
//! `**` for any run of characters across segments and `\` to escape a literal `*` or `\`.
//! Each distinct pattern string is compiled once and kept in a [`PatternCache`].
//!
//! ```
//! let caps = pathmatch::captures("**/*/**", "foo/bar/baz/bug").unwrap();
//! assert_eq!(caps.to_vec(), ["foo/bar/baz/bug", "foo/bar", "baz", "bug"]);
//!
//! assert!(pathmatch::matches("*.txt", "notes.txt"));
//! assert!(!pathmatch::matches("*.txt", "docs/notes.txt"));
//! ```

// public modules
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod settings;
pub mod template;

// public uses
pub use cache::PatternCache;
pub use matcher::Matcher;
pub use settings::Settings;
pub use wildcard::{Captures, Kind, Pattern};

// ---

/// Matches `candidate` against `pattern` using the process-wide [`matcher::global`] matcher.
///
/// Returns the candidate followed by the wildcard captures, or `None` if it does not match.
pub fn captures<'s>(pattern: &str, candidate: &'s str) -> Option<Captures<'s>> {
    matcher::global().captures(pattern, candidate)
}

/// Tests whether `candidate` matches `pattern` using the process-wide [`matcher::global`] matcher.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    matcher::global().matches(pattern, candidate)
}
