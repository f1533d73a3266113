//! Query strings and form bodies accepted by the web handlers

use serde::Deserialize;

/// `GET /` query parameters, validated later by [`tb_core::IssueQuery::parse`]
#[derive(Debug, Default, Deserialize)]
pub struct ListIssuesParams {
    pub label: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// `POST /save/{id}` body
#[derive(Debug, Default, Deserialize)]
pub struct SaveIssueForm {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attention_of: String,
    #[serde(default)]
    pub kill_factor: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterParams {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}
