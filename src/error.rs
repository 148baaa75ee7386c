use portfolio_ai_common::SubmitRejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioAiError {
    #[error(
        "Please set your API key in settings (pass --api-key, set GEMINI_API_KEY, or run `portfolio-ai settings`)"
    )]
    MissingApiKey,

    #[error("{0}")]
    Rejected(#[from] SubmitRejection),

    #[error("{0}")]
    Backend(String),

    #[error("Settings were not saved")]
    SettingsCancelled,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Common(#[from] portfolio_ai_common::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioAiError>;
