use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors the responder does not absorb itself.
///
/// A missing template is never one of them: it selects the built-in page.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("View type {0:?} is not a numeric status code")]
    InvalidViewType(String),
    #[error("{0} is not a valid HTTP status code")]
    InvalidStatus(u16),
    #[error("No reason phrase for status code {0}")]
    UnknownReasonPhrase(u16),
    #[error("Failed to render error template")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for ResponderError {
    // Must not go through templates again.
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "error page could not be produced");

        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong...").into_response()
    }
}
