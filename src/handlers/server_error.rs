use axum::{extract::State, response::Response};

use crate::{error::ResponderError, request::ErrorRequest, state::AppState};

pub(crate) async fn server_error(
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.server_error(&request, "500", "")
}
