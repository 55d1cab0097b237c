//! Error types for psomap

use thiserror::Error;

/// Main error type for psomap operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stat table: {0}")]
    InvalidStatTable(String),

    #[error("Invalid map data: {0}")]
    InvalidMapData(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for psomap operations
pub type Result<T> = std::result::Result<T, Error>;
