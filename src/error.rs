use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Remote ledger error: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for FitError {
    fn from(e: reqwest::Error) -> Self {
        FitError::Remote(e.to_string())
    }
}

impl FitError {
    /// True for errors caused by the shape of caller-supplied data.
    pub fn is_validation(&self) -> bool {
        matches!(self, FitError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, FitError>;
