// third-party imports
use thiserror::Error;

/// Error is an error which may occur while compiling a wildcard pattern.
///
/// Every string is a valid pattern, so this error indicates a defect in the
/// translation to the underlying regular expression rather than bad input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("pattern {pattern:?} produced an invalid expression: {source}")]
    InvalidExpression {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
