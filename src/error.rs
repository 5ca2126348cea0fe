//! Error types for gpic.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The same type is returned from startup code (mapped to an exit code) and from
//! request handlers (mapped to an HTTP response).

use crate::exit_codes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

/// Main error type for gpic operations.
#[derive(Error, Debug)]
pub enum GpicError {
    /// User provided an invalid folder or configuration.
    #[error("{0}")]
    UserError(String),

    /// The image folder could not be read.
    #[error("failed to scan folder: {0}")]
    ScanError(String),

    /// A submitted form body could not be decoded.
    #[error("error parsing form: {0}")]
    FormError(String),

    /// A file could not be moved into the quarantine folder.
    #[error("error moving image: {0}")]
    RelocationError(String),

    /// A page template failed to compile or render.
    #[error("template error: {0}")]
    TemplateError(String),

    /// The HTTP listener could not be bound or stopped with an error.
    #[error("server error: {0}")]
    ServerError(String),
}

impl GpicError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GpicError::UserError(_) => exit_codes::USER_ERROR,
            GpicError::ScanError(_) => exit_codes::USER_ERROR,
            GpicError::FormError(_) => exit_codes::USER_ERROR,
            GpicError::RelocationError(_) => exit_codes::USER_ERROR,
            GpicError::TemplateError(_) => exit_codes::SERVER_FAILURE,
            GpicError::ServerError(_) => exit_codes::SERVER_FAILURE,
        }
    }
}

impl IntoResponse for GpicError {
    fn into_response(self) -> Response {
        // Local single-user tool: messages go back verbatim, paths included.
        let message = self.to_string();
        debug!("responding with error: {}", message);
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

/// Result type alias for gpic operations.
pub type Result<T> = std::result::Result<T, GpicError>;
