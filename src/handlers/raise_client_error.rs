use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    error::ResponderError, handlers::params::ViewTypeParams, request::ErrorRequest,
    state::AppState,
};

pub(crate) async fn raise_client_error(
    Path(ViewTypeParams { view_type }): Path<ViewTypeParams>,
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.client_error(&request, &view_type, "")
}

pub(crate) async fn raise_bad_request(
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.client_error(&request, "400", "")
}

pub(crate) async fn raise_permission_denied(
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.client_error(&request, "403", "")
}
