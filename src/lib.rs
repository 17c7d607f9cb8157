//! Default 404, 4xx, 500 and 5xx pages for axum applications.
//!
//! Pages come from application templates named after the status code
//! (`404.html`, `507.html`...) and fall back to minimal built-in markup
//! when no such template exists.

mod app;
pub mod cli;
mod csrf;
mod error;
mod handlers;
mod reason;
mod request;
mod responder;
mod state;
mod templates;

pub use app::{create_app, demo_routes};
pub use csrf::{CsrfToken, CSRF_COOKIE_NAME};
pub use error::ResponderError;
pub use reason::ReasonPhrases;
pub use request::ErrorRequest;
pub use responder::{ErrorResponder, DEFAULT_CONTENT_TYPE, NOT_FOUND_TEMPLATE};
pub use state::AppState;
pub use templates::{ErrorTemplates, Lookup};
