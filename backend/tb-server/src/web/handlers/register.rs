//! One-time-token self registration

use crate::AppState;
use crate::web::forms::{RegisterForm, RegisterParams};
use crate::web::handlers::login::start_session;
use crate::web::{WebError, WebResult, views};

use tb_auth::hash_password;
use tb_db::{RegistrationOutcome, UserTokenRepository};

use axum::{
    extract::{Form, Query, State},
    response::{Html, Response},
};
use log::{info, warn};

const INVALID_TOKEN: &str = "This registration link is invalid or has already been used.";

/// GET /register?token=...
///
/// Shows the form only for a token that exists and is unused.
pub async fn register_form(
    State(state): State<AppState>,
    Query(params): Query<RegisterParams>,
) -> WebResult<Html<String>> {
    let token = params
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| WebError::bad_request(INVALID_TOKEN))?;

    let available = UserTokenRepository::new(state.pool.clone())
        .find_available(token)
        .await?;

    if available.is_none() {
        return Err(WebError::bad_request(INVALID_TOKEN));
    }

    Ok(Html(views::register::render(token, &state.password_policy)))
}

/// POST /register
///
/// Consumes the token and creates the user in one transaction, then logs
/// the new user in.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> WebResult<Response> {
    let token = form.token.trim();
    let username = form.username.trim();

    if token.is_empty() {
        return Err(WebError::bad_request(INVALID_TOKEN));
    }
    if username.is_empty() {
        return Err(WebError::bad_request("Username is required."));
    }

    state
        .password_policy
        .check_with_confirmation(&form.password, &form.confirm_password)?;

    let tokens = UserTokenRepository::new(state.pool.clone());
    if tokens.find_available(token).await?.is_none() {
        return Err(WebError::bad_request(INVALID_TOKEN));
    }

    // Argon2 is CPU bound; keep it off the async workers
    let password = form.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

    // The token may have been spent since the check above
    let outcome = tokens
        .register_with_token(token, username, &password_hash)
        .await?;

    match outcome {
        RegistrationOutcome::Registered(user) => {
            info!("Registered user '{}'", user.username);
            Ok(start_session(&state, &user, "/").await)
        }
        RegistrationOutcome::TokenUnavailable => Err(WebError::bad_request(INVALID_TOKEN)),
        RegistrationOutcome::UsernameTaken => {
            warn!("Registration rejected, username '{}' exists", username);
            Err(WebError::bad_request(format!(
                "Username '{}' is already taken.",
                username
            )))
        }
    }
}
