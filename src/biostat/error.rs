use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiostatError {
    #[error("Invalid option: exactly one of -c, -r, -u, -d must be given")]
    InvalidOption,

    #[error("Missing arguments: {0}")]
    MissingArguments(String),

    #[error("Invalid name: must not be empty")]
    InvalidName,

    #[error("Invalid sex {0:?}: must be M or F")]
    InvalidSex(String),

    #[error("Invalid age {0:?}: must be a whole number of at least 18")]
    InvalidAge(String),

    #[error("Invalid height {0:?}: must be a number")]
    InvalidHeight(String),

    #[error("Invalid weight {0:?}: must be a number")]
    InvalidWeight(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file: {0}")]
    Codec(#[from] csv::Error),
}

impl BiostatError {
    /// Process exit code for this error kind. Success is 0; every kind
    /// gets its own nonzero code so scripts can tell rejections apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            BiostatError::InvalidOption => 2,
            BiostatError::MissingArguments(_) => 3,
            BiostatError::InvalidName => 4,
            BiostatError::InvalidSex(_) => 5,
            BiostatError::InvalidAge(_) => 6,
            BiostatError::InvalidHeight(_) => 7,
            BiostatError::InvalidWeight(_) => 8,
            BiostatError::AlreadyExists(_) => 9,
            BiostatError::NotFound(_) => 10,
            BiostatError::WriteFailure { .. } => 11,
            BiostatError::Io(_) => 12,
            BiostatError::Codec(_) => 13,
        }
    }
}

pub type Result<T> = std::result::Result<T, BiostatError>;
