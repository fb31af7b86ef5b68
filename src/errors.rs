use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to fetch page: {0}")]
    FetchError(String),

    #[error("Failed to access LLM API: {0}")]
    LlmError(String),

    #[error("Output file already exists: {0}")]
    OutputConflict(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(error: reqwest::Error) -> Self {
        ReportError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError(error.to_string())
    }
}

impl From<url::ParseError> for ReportError {
    fn from(error: url::ParseError) -> Self {
        ReportError::ConfigError(error.to_string())
    }
}
