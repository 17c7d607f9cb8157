use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

/// Cookie read when no middleware stored a token in the request extensions.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// CSRF token made available to error templates as `csrf_token`.
///
/// Error pages are often produced outside of the normal middleware chain
/// (fallbacks, panics), so extraction never fails: an existing token is
/// reused, otherwise a fresh one is generated and stored on the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new<T>(token: T) -> Self
    where
        T: Into<String>,
    {
        Self(token.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_cookie(jar: &CookieJar) -> Option<Self> {
        jar.get(CSRF_COOKIE_NAME)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(Self::new)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CsrfToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(token) = parts.extensions.get::<CsrfToken>() {
            return Ok(token.clone());
        }

        let token = Self::from_cookie(&CookieJar::from_headers(&parts.headers))
            .unwrap_or_else(Self::generate);

        parts.extensions.insert(token.clone());

        Ok(token)
    }
}
