//! Error types for the strata crate

use thiserror::Error;

/// Main error type for map generation and export
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map parse error: {0}")]
    Parse(String),
}

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;
