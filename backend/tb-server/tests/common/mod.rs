#![allow(dead_code)]

//! Test infrastructure for tb-server route tests

use tb_auth::hash_password;
use tb_config::{LoggingConfig, ServerConfig};
use tb_core::{IssueState, LabelList, SyncedIssue};
use tb_db::{IssueRepository, UserRepository, UserTokenRepository};
use tb_server::AppState;

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const PASSWORD: &str = "Correct1horse";

pub fn test_config(login_max_attempts: u32) -> ServerConfig {
    ServerConfig {
        database_path: PathBuf::from(":memory:"),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        login_max_attempts,
        login_window_secs: 60,
        session_ttl_secs: 3600,
        cookie_secure: false,
        logging: LoggingConfig::default(),
    }
}

/// AppState over an in-memory database with migrations applied
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(test_config(100)).await
}

pub async fn create_test_app_state_with(config: ServerConfig) -> AppState {
    let pool = tb_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    AppState::new(pool, &config)
}

pub async fn create_issue(state: &AppState, id: i64, number: i64, title: &str, labels: &[&str]) {
    let issue = SyncedIssue {
        id,
        number,
        title: title.to_string(),
        author: "satoshi".to_string(),
        state: IssueState::Open,
        body: Some("Steps to reproduce".to_string()),
        url: format!("https://github.com/bitcoin/bitcoin/issues/{}", number),
        labels: LabelList::from_names(labels),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        closed_at: None,
        closed_by: None,
    };

    IssueRepository::new(state.pool.clone())
        .upsert_synced(&issue)
        .await
        .expect("Failed to create test issue");
}

pub async fn create_user(state: &AppState, username: &str) {
    let hash = hash_password(PASSWORD).expect("Failed to hash password");
    UserRepository::new(state.pool.clone())
        .create(username, &hash)
        .await
        .expect("Failed to create test user");
}

pub async fn create_token(state: &AppState, token: &str) {
    UserTokenRepository::new(state.pool.clone())
        .create(token)
        .await
        .expect("Failed to create test token");
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn header_value(response: &Response<Body>, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// `name=value` part of the response's session cookie, ready for a Cookie header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    header_value(response, header::SET_COOKIE)
        .and_then(|c| c.split(';').next().map(String::from))
}

/// Log `username` in (creating the user) and return the Cookie header value
pub async fn login_as(app: &Router, state: &AppState, username: &str) -> String {
    create_user(state, username).await;

    let body = format!("username={}&password={}", username, PASSWORD);
    let response = send(app, post_form("/login", &body, None)).await;

    session_cookie(&response).expect("Login did not set a session cookie")
}
