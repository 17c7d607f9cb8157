use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    error::ResponderError, handlers::params::ViewTypeParams, request::ErrorRequest,
    state::AppState,
};

pub(crate) async fn raise_server_error(
    Path(ViewTypeParams { view_type }): Path<ViewTypeParams>,
    State(state): State<AppState>,
    request: ErrorRequest,
) -> Result<Response, ResponderError> {
    state.responder.server_error(&request, &view_type, "")
}
