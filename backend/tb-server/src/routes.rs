use crate::web::handlers::{issues, login, register};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Issues
        .route("/", get(issues::list_issues))
        .route("/issue/{id}", get(issues::show_issue))
        .route("/save/{id}", post(issues::save_issue))
        // Accounts
        .route("/login", get(login::login_form).post(login::login))
        .route("/logout", get(login::logout))
        .route("/register", get(register::register_form).post(register::register))
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state)
}
