//! Integration tests for login, logout, registration and health

mod common;

use crate::common::{
    PASSWORD, body_string, create_test_app_state, create_test_app_state_with, create_token,
    create_user, get, get_with_cookie, header_value, login_as, post_form, send, session_cookie,
    test_config,
};

use tb_db::{UserRepository, UserTokenRepository};
use tb_server::build_router;

use axum::http::{StatusCode, header};
use googletest::prelude::*;

#[tokio::test]
async fn given_login_page_when_requested_then_form_rendered() {
    let app = build_router(create_test_app_state().await);

    let response = send(&app, get("/login")).await;

    assert_that!(response.status(), eq(StatusCode::OK));
    assert_that!(
        body_string(response).await,
        contains_substring("action=\"/login\"")
    );
}

#[tokio::test]
async fn given_valid_credentials_when_logging_in_then_session_cookie_set() {
    let state = create_test_app_state().await;
    create_user(&state, "alice").await;
    let app = build_router(state.clone());

    let body = format!("username=alice&password={}", PASSWORD);
    let response = send(&app, post_form("/login", &body, None)).await;

    assert_that!(response.status(), eq(StatusCode::SEE_OTHER));
    assert_that!(header_value(&response, header::LOCATION), some(eq("/")));
    let set_cookie = header_value(&response, header::SET_COOKIE).unwrap();
    assert_that!(set_cookie, starts_with("tb_session="));
    assert_that!(set_cookie, contains_substring("HttpOnly"));
    assert_that!(set_cookie, contains_substring("SameSite=Lax"));
    assert_that!(set_cookie, not(contains_substring("Secure")));
    assert_that!(state.sessions.len().await, eq(1));
}

#[tokio::test]
async fn given_secure_cookie_setting_when_logging_in_then_cookie_marked_secure() {
    let mut config = test_config(100);
    config.cookie_secure = true;
    let state = create_test_app_state_with(config).await;
    create_user(&state, "alice").await;
    let app = build_router(state);

    let body = format!("username=alice&password={}", PASSWORD);
    let response = send(&app, post_form("/login", &body, None)).await;

    assert_that!(
        header_value(&response, header::SET_COOKIE).unwrap(),
        ends_with("; Secure")
    );
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_unauthorized() {
    let state = create_test_app_state().await;
    create_user(&state, "alice").await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        post_form("/login", "username=alice&password=Wrong1pass", None),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(session_cookie(&response), none());
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn given_unknown_user_when_logging_in_then_unauthorized() {
    let app = build_router(create_test_app_state().await);

    let response = send(
        &app,
        post_form("/login", "username=nobody&password=Whatever1", None),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_attempts_exhausted_when_logging_in_then_too_many_requests() {
    let state = create_test_app_state_with(test_config(2)).await;
    let app = build_router(state);
    let attempt = || post_form("/login", "username=mallory&password=Guess1guess", None);

    let first = send(&app, attempt()).await;
    let second = send(&app, attempt()).await;
    let third = send(&app, attempt()).await;

    assert_that!(first.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(second.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(third.status(), eq(StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn given_one_user_rate_limited_when_other_user_logs_in_then_allowed() {
    let state = create_test_app_state_with(test_config(1)).await;
    create_user(&state, "alice").await;
    let app = build_router(state);
    send(
        &app,
        post_form("/login", "username=mallory&password=Guess1guess", None),
    )
    .await;

    let body = format!("username=alice&password={}", PASSWORD);
    let response = send(&app, post_form("/login", &body, None)).await;

    assert_that!(response.status(), eq(StatusCode::SEE_OTHER));
}

#[tokio::test]
async fn given_session_when_logging_out_then_session_dropped() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let cookie = login_as(&app, &state, "alice").await;

    let response = send(&app, get_with_cookie("/logout", &cookie)).await;

    assert_that!(response.status(), eq(StatusCode::SEE_OTHER));
    assert_that!(
        header_value(&response, header::SET_COOKIE).unwrap(),
        contains_substring("Max-Age=0")
    );
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn given_unused_token_when_opening_registration_then_form_shown() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state);

    let response = send(&app, get("/register?token=tok_abc")).await;

    assert_that!(response.status(), eq(StatusCode::OK));
    assert_that!(
        body_string(response).await,
        contains_substring("name=\"token\" value=\"tok_abc\"")
    );
}

#[tokio::test]
async fn given_unknown_token_when_opening_registration_then_bad_request() {
    let app = build_router(create_test_app_state().await);

    let response = send(&app, get("/register?token=nope")).await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_missing_token_when_opening_registration_then_bad_request() {
    let app = build_router(create_test_app_state().await);

    let response = send(&app, get("/register")).await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_valid_registration_then_user_created_logged_in_and_token_consumed() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        post_form(
            "/register",
            "token=tok_abc&username=carol&password=Abcdefg1&confirm_password=Abcdefg1",
            None,
        ),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::SEE_OTHER));
    assert_that!(session_cookie(&response), some(starts_with("tb_session=")));

    let user = UserRepository::new(state.pool.clone())
        .find_by_username("carol")
        .await
        .unwrap();
    assert_that!(user.map(|u| u.username), some(eq("carol")));

    let token = UserTokenRepository::new(state.pool.clone())
        .find_available("tok_abc")
        .await
        .unwrap();
    assert_that!(token, none());
}

#[tokio::test]
async fn given_consumed_token_when_registering_again_then_bad_request() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state);
    let form = "token=tok_abc&username=carol&password=Abcdefg1&confirm_password=Abcdefg1";
    send(&app, post_form("/register", form, None)).await;

    let second = send(
        &app,
        post_form(
            "/register",
            "token=tok_abc&username=dave&password=Abcdefg1&confirm_password=Abcdefg1",
            None,
        ),
    )
    .await;
    let reopened = send(&app, get("/register?token=tok_abc")).await;

    assert_that!(second.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(reopened.status(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_unknown_token_when_registering_then_bad_request_and_no_user() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        post_form(
            "/register",
            "token=forged&username=mallory&password=Abcdefg1&confirm_password=Abcdefg1",
            None,
        ),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(session_cookie(&response), none());
    assert_that!(
        body_string(response).await,
        contains_substring("invalid or has already been used")
    );
    let user = UserRepository::new(state.pool.clone())
        .find_by_username("mallory")
        .await
        .unwrap();
    assert_that!(user, none());
}

#[tokio::test]
async fn given_weak_password_when_registering_then_bad_request_and_token_kept() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        post_form(
            "/register",
            "token=tok_abc&username=carol&password=abc&confirm_password=abc",
            None,
        ),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(
        body_string(response).await,
        contains_substring("at least 8 characters")
    );
    let token = UserTokenRepository::new(state.pool.clone())
        .find_available("tok_abc")
        .await
        .unwrap();
    assert_that!(token, some(anything()));
}

#[tokio::test]
async fn given_mismatched_confirmation_when_registering_then_bad_request() {
    let state = create_test_app_state().await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state);

    let response = send(
        &app,
        post_form(
            "/register",
            "token=tok_abc&username=carol&password=Abcdefg1&confirm_password=Abcdefg2",
            None,
        ),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn given_taken_username_when_registering_then_bad_request_and_token_kept() {
    let state = create_test_app_state().await;
    create_user(&state, "alice").await;
    create_token(&state, "tok_abc").await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        post_form(
            "/register",
            "token=tok_abc&username=alice&password=Abcdefg1&confirm_password=Abcdefg1",
            None,
        ),
    )
    .await;

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    let token = UserTokenRepository::new(state.pool.clone())
        .find_available("tok_abc")
        .await
        .unwrap();
    assert_that!(token, some(anything()));
}

#[tokio::test]
async fn given_running_server_when_health_checked_then_ok_with_version() {
    let app = build_router(create_test_app_state().await);

    let response = send(&app, get("/health")).await;

    assert_that!(response.status(), eq(StatusCode::OK));
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_that!(json["status"].as_str(), some(eq("healthy")));
    assert_that!(
        json["version"].as_str(),
        some(eq(env!("CARGO_PKG_VERSION")))
    );
}
