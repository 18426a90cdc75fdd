use thiserror::Error;

use crate::validation::FieldError;

/// Errors from the remote user collection.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Errors surfaced by dashboard flows.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("submit with no open modal")]
    ModalClosed,
}
