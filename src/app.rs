use std::{any::Any, time::Duration};

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
    trace::TraceLayer, ServiceBuilderExt,
};

use crate::{
    handlers::{
        handle_panic::handle_panic,
        not_found::not_found,
        raise_client_error::{raise_bad_request, raise_client_error, raise_permission_denied},
        raise_server_error::raise_server_error,
        server_error::server_error,
    },
    state::AppState,
};

/// Wraps the application's `routes` with the error pages: unmatched paths
/// get the 404 page and panicking handlers the 500 page.
pub fn create_app(state: AppState, routes: Router<AppState>) -> Router {
    let responder = state.responder.clone();

    let middleware = ServiceBuilder::new()
        .layer(TimeoutLayer::new(Duration::from_secs(5)))
        .map_response_body(axum::body::boxed)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Router::new()
        .merge(routes)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| handle_panic(&responder, panic),
        ))
        .layer(middleware)
        .with_state(state)
}

/// Routes raising each kind of error page.
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/raises400", get(raise_bad_request))
        .route("/raises403", get(raise_permission_denied))
        .route("/raises4xx/:view_type", get(raise_client_error))
        .route("/raises5xx/:view_type", get(raise_server_error))
        .route("/server_error", get(server_error))
}
