#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Short user-facing explanation shown under the generic failure headline.
    pub fn hint(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "This shop has no commission records on the server.",
            AppError::ServerError(_) => "The server could not compute commissions right now.",
            AppError::NetworkError(_) => "The commissions service could not be reached.",
            AppError::ApiError(_) => "The commissions service returned an unexpected response.",
            AppError::ConfigError(_) => "The commissions client is not configured.",
        }
    }
}
