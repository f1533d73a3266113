//! Login and logout handlers

use crate::AppState;
use crate::web::cookies::{clear_session_cookie, session_cookie};
use crate::web::forms::LoginForm;
use crate::web::{SessionUser, WebError, WebResult, views};

use tb_auth::verify_password;
use tb_core::User;
use tb_db::UserRepository;

use axum::{
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use log::{info, warn};

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(views::login::render())
}

/// POST /login
///
/// Attempts are rate limited per submitted username, counted before the
/// credentials are checked.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    let username = form.username.trim();

    state.login_limiter.check(username)?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_username(username)
        .await?;

    let verified = match user {
        Some(user) => {
            let password = form.password;
            let stored_hash = user.password_hash.clone();
            let matches =
                tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                    .await?;
            matches.then_some(user)
        }
        None => None,
    };

    let Some(user) = verified else {
        warn!("Failed login for '{}'", username);
        return Err(WebError::unauthorized("Invalid username or password"));
    };

    info!("User '{}' logged in", user.username);
    Ok(start_session(&state, &user, "/").await)
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, user: Option<SessionUser>) -> Response {
    if let Some(user) = user {
        state.sessions.remove(&user.session_id).await;
        info!("User '{}' logged out", user.username);
    }

    (
        [(header::SET_COOKIE, clear_session_cookie(state.cookie_secure))],
        Redirect::to("/"),
    )
        .into_response()
}

/// Create a session for `user` and redirect to `location` with its cookie set
pub(crate) async fn start_session(state: &AppState, user: &User, location: &str) -> Response {
    let session_id = state.sessions.create(user.id, &user.username).await;
    let cookie = session_cookie(&session_id, state.sessions.ttl(), state.cookie_secure);

    ([(header::SET_COOKIE, cookie)], Redirect::to(location)).into_response()
}
