use axum::{extract::State, response::Response};

use crate::{
    error::ResponderError, request::ErrorRequest, responder::NOT_FOUND_TEMPLATE, state::AppState,
};

pub(crate) async fn not_found(
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.not_found(&request, NOT_FOUND_TEMPLATE)
}
