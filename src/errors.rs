// src/errors.rs
use thiserror::Error;

/// Message shown to visitors whenever an analysis cannot be produced.
/// The specific cause only ever reaches the logs.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Could not generate analysis. Please ensure the API key is set correctly and try again.";

#[derive(Error, Debug)]
pub enum SynergyError {
    #[error("API key is missing. Please set {var} in your environment variables.")]
    MissingCredential { var: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("No candidates returned from API: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Failed to parse analysis payload: {0}")]
    PayloadParse(#[from] serde_json::Error),

    #[error("Analysis request was cancelled")]
    Cancelled,
}

/// Coarse classification used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Protocol,
    Cancelled,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Protocol => write!(f, "protocol"),
            ErrorKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl SynergyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SynergyError::MissingCredential { .. } | SynergyError::Config(_) => {
                ErrorKind::Configuration
            }
            SynergyError::Request(_) | SynergyError::ApiError { .. } => ErrorKind::Transport,
            SynergyError::ApiResponse(_)
            | SynergyError::UnexpectedResponse(_)
            | SynergyError::EmptyResponse
            | SynergyError::PayloadParse(_) => ErrorKind::Protocol,
            SynergyError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

pub type Result<T> = std::result::Result<T, SynergyError>;
