//! Error types for movies API handlers

use thiserror::Error;

/// Errors that can occur in a handler.
///
/// The display text of each variant becomes the `message` of the error
/// envelope, so messages are written for the API caller.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Internal(_) | HandlerError::Serialization(_) => 500,
        }
    }

    /// Convert to an unsuccessful envelope response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::envelope(self.status_code(), false, self.to_string(), None::<()>)
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}
