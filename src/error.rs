use std::io;
use thiserror::Error;

/// Error type for profile generation.
#[derive(Error, Debug)]
pub enum RicoError {
    #[error("missing key `{0}` in configuration")]
    MissingKey(String),
    #[error("unparsable value `{value}` for key `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("number of vertical levels must be positive, got {0}")]
    LevelCount(i64),
    #[error("domain height must be positive and finite, got {0}")]
    DomainHeight(f64),
    #[error("unknown case `{0}`, expected one of gcss, ss08, test")]
    UnknownCase(String),
    #[error("malformed profile table at line {line}: {reason}")]
    Table { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience type for `Result<T, RicoError>`.
pub type RicoResult<T> = Result<T, RicoError>;
