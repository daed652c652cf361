use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("File is not valid UTF-8: {}", path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StripError {
    /// Message printed on the console next to the affected path.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StripError::IoError(e) => e.to_string(),
            StripError::WalkError(e) => e.to_string(),
            StripError::DecodeError { source, .. } => {
                format!("invalid UTF-8 content: {}", source.utf8_error())
            }
            StripError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
