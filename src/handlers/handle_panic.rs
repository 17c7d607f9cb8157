use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::{csrf::CsrfToken, request::ErrorRequest, responder::ErrorResponder};

/// Turns a panic into the application's 500 page.
pub(crate) fn handle_panic(
    responder: &ErrorResponder,
    panic: Box<dyn Any + Send + 'static>,
) -> Response {
    let details = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("Unknown panic message");

    tracing::error!(details, "handler panicked");

    // The request is gone at this point, only a fresh token can be offered.
    let request = ErrorRequest::new(String::new(), CsrfToken::generate());

    responder
        .server_error(&request, "500", "")
        .unwrap_or_else(IntoResponse::into_response)
}
