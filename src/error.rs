// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the library or the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pattern(#[from] wildcard::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
