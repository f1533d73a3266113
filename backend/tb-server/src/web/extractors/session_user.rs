//! Axum extractors for the logged-in user

use crate::AppState;
use crate::web::WebError;
use crate::web::cookies::{SESSION_COOKIE, read_cookie};

use std::convert::Infallible;
use std::future::Future;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

/// The user behind the request's session cookie.
///
/// As a plain extractor it rejects with 401 when there is no live session;
/// as `Option<SessionUser>` it never rejects.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub session_id: String,
    pub user_id: i64,
    pub username: String,
}

async fn lookup(parts: &Parts, state: &AppState) -> Option<SessionUser> {
    let session_id = read_cookie(&parts.headers, SESSION_COOKIE)?;

    match state.sessions.get(&session_id).await {
        Some(session) => Some(SessionUser {
            session_id,
            user_id: session.user_id,
            username: session.username,
        }),
        None => {
            log::debug!("Session cookie does not match a live session");
            None
        }
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = WebError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            lookup(parts, state)
                .await
                .ok_or_else(|| WebError::unauthorized("Please log in to make changes"))
        }
    }
}

impl OptionalFromRequestParts<AppState> for SessionUser {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        async move { Ok(lookup(parts, state).await) }
    }
}
