use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown reference item: {0}")]
    UnknownReference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
