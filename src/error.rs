use thiserror::Error;

/// Everything that can go wrong between the schedule file and the .ics
#[derive(Debug, Error)]
pub enum ExportError {
    /// The `time` column of a row does not split into two `HH:MM` tokens
    #[error("malformed time `{0}`, expected `HH:MM HH:MM`")]
    MalformedTimeFormat(String),

    #[error("can't read the schedule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid schedule file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
