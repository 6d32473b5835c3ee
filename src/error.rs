//! Error types for the two fallible edges of the game: loading the
//! configuration and persisting the best-score record.
//!
//! The per-frame simulation itself never fails.

/// Failure while reading `fly_rush.toml`.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Failure while reading or writing a saved value.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a `value = <integer>` entry.
    #[error("Parse error in {key}: {message}")]
    Parse { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}
