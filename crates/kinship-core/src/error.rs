//! Error types for the kinship-core crate.

use thiserror::Error;

/// Top-level error type for the Kinship platform.
#[derive(Error, Debug)]
pub enum KinshipError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, KinshipError>;
