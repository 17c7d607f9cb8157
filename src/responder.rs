use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    error::ResponderError,
    reason::ReasonPhrases,
    request::ErrorRequest,
    templates::{ErrorTemplates, Lookup},
};

pub const NOT_FOUND_TEMPLATE: &str = "404.html";

/// Content type of responses rendered from application templates unless
/// configured otherwise.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Built-in pages always use this content type, whatever the default is.
const FALLBACK_CONTENT_TYPE: &str = "text/html";

#[derive(Debug, Serialize)]
struct ErrorContext<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    request_path: Option<&'a str>,
    csrf_token: &'a str,
}

/// Builds the 404, 4xx and 5xx pages.
///
/// Every page comes from the application template named after the status
/// (`404.html`, `507.html`, ...) when there is one, otherwise from a minimal
/// built-in page. Cloning is cheap, all the configuration is shared.
#[derive(Debug, Clone)]
pub struct ErrorResponder {
    templates: Arc<ErrorTemplates>,
    reason_phrases: Arc<ReasonPhrases>,
    default_content_type: HeaderValue,
}

impl ErrorResponder {
    pub fn new(templates: ErrorTemplates, reason_phrases: ReasonPhrases) -> Self {
        Self {
            templates: Arc::new(templates),
            reason_phrases: Arc::new(reason_phrases),
            default_content_type: HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        }
    }

    pub fn with_default_content_type(mut self, content_type: HeaderValue) -> Self {
        self.default_content_type = content_type;

        self
    }

    /// 404 page, rendered with `request_path` and `csrf_token` in context.
    pub fn not_found(
        &self,
        request: &ErrorRequest,
        template_name: &str,
    ) -> Result<Response, ResponderError> {
        match self.templates.lookup(template_name)? {
            Lookup::Found(template) => {
                let body = template.render(ErrorContext {
                    request_path: Some(request.path()),
                    csrf_token: request.csrf_token().as_str(),
                })?;

                Ok(self.rendered(StatusCode::NOT_FOUND, body))
            }
            Lookup::Missing => {
                tracing::debug!(template_name, "using built-in not found page");

                Ok(fallback(
                    StatusCode::NOT_FOUND,
                    format!(
                        "<h1>Not Found</h1><p>The requested URL {} was not found on this server.</p>",
                        html_escape::encode_quoted_attribute(request.path())
                    ),
                ))
            }
        }
    }

    pub fn server_error(
        &self,
        request: &ErrorRequest,
        view_type: &str,
        message: &str,
    ) -> Result<Response, ResponderError> {
        self.status_page(request, view_type, message)
    }

    pub fn client_error(
        &self,
        request: &ErrorRequest,
        view_type: &str,
        message: &str,
    ) -> Result<Response, ResponderError> {
        if view_type == "404" {
            // Only its errors matter: the status page below is returned.
            self.not_found(request, NOT_FOUND_TEMPLATE)?;
        }

        self.status_page(request, view_type, message)
    }

    fn status_page(
        &self,
        request: &ErrorRequest,
        view_type: &str,
        message: &str,
    ) -> Result<Response, ResponderError> {
        let code = view_type
            .parse::<u16>()
            .map_err(|_| ResponderError::InvalidViewType(view_type.to_owned()))?;
        let status = StatusCode::from_u16(code).map_err(|_| ResponderError::InvalidStatus(code))?;
        let template_name = format!("{view_type}.html");

        match self.templates.lookup(&template_name)? {
            Lookup::Found(template) => {
                let body = template.render(ErrorContext {
                    request_path: None,
                    csrf_token: request.csrf_token().as_str(),
                })?;

                Ok(self.rendered(status, body))
            }
            Lookup::Missing => {
                let phrase = self
                    .reason_phrases
                    .get(code)
                    .ok_or(ResponderError::UnknownReasonPhrase(code))?;

                tracing::debug!(%template_name, "using built-in error page");

                Ok(fallback(
                    status,
                    format!("<h1>{phrase} ({view_type})</h1><p>{message}</p>"),
                ))
            }
        }
    }

    fn rendered(&self, status: StatusCode, body: String) -> Response {
        (
            status,
            [(CONTENT_TYPE, self.default_content_type.clone())],
            body,
        )
            .into_response()
    }
}

fn fallback(status: StatusCode, body: String) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(FALLBACK_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
