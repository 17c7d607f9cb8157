use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use percent_encoding::percent_decode_str;

use crate::csrf::CsrfToken;

/// What the error pages need to know about the failed request.
#[derive(Debug, Clone)]
pub struct ErrorRequest {
    path: String,
    csrf_token: CsrfToken,
}

impl ErrorRequest {
    pub fn new<P>(path: P, csrf_token: CsrfToken) -> Self
    where
        P: Into<String>,
    {
        Self {
            path: path.into(),
            csrf_token,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn csrf_token(&self) -> &CsrfToken {
        &self.csrf_token
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ErrorRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let csrf_token = CsrfToken::from_request_parts(parts, state).await?;
        let path = percent_decode_str(parts.uri.path())
            .decode_utf8_lossy()
            .into_owned();

        Ok(Self { path, csrf_token })
    }
}
