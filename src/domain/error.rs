use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing value for placeholder {{{0}}}")]
    MissingPlaceholder(String),

    #[error("`stop` found in both the input and default params")]
    ConflictingStopSequences,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn missing_placeholder(name: impl Into<String>) -> Self {
        Self::MissingPlaceholder(name.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_missing_placeholder(&self) -> bool {
        matches!(self, Self::MissingPlaceholder(_))
    }

    pub fn is_conflicting_stop_sequences(&self) -> bool {
        matches!(self, Self::ConflictingStopSequences)
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}
