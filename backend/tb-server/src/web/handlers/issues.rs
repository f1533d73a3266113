//! Issue list, detail and annotation handlers

use crate::AppState;
use crate::web::forms::{ListIssuesParams, SaveIssueForm};
use crate::web::{SessionUser, WebError, WebResult, views};

use tb_core::{IssueAnnotations, IssueQuery};
use tb_db::IssueRepository;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, Redirect},
};
use log::info;

/// GET /
///
/// All issues, optionally filtered by label substring and sorted
pub async fn list_issues(
    State(state): State<AppState>,
    user: Option<SessionUser>,
    Query(params): Query<ListIssuesParams>,
) -> WebResult<Html<String>> {
    let query = IssueQuery::parse(
        params.label.as_deref(),
        params.sort.as_deref(),
        params.order.as_deref(),
    )?;

    let issues = IssueRepository::new(state.pool.clone()).list(&query).await?;

    let username = user.as_ref().map(|u| u.username.as_str());
    Ok(Html(views::issue_list::render(&issues, &query, username)))
}

/// GET /issue/{id}
pub async fn show_issue(
    State(state): State<AppState>,
    user: Option<SessionUser>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let issue = IssueRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| WebError::not_found(format!("Issue {} not found", id)))?;

    let username = user.as_ref().map(|u| u.username.as_str());
    Ok(Html(views::issue_detail::render(&issue, username)))
}

/// POST /save/{id}
///
/// Overwrite the annotation fields of one issue. Requires a session.
pub async fn save_issue(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i64>,
    Form(form): Form<SaveIssueForm>,
) -> WebResult<Redirect> {
    let kill_factor = parse_kill_factor(&form.kill_factor)?;
    let annotations = IssueAnnotations::from_input(&form.notes, &form.attention_of, kill_factor);

    let updated = IssueRepository::new(state.pool.clone())
        .update_annotations(id, &annotations)
        .await?;

    if !updated {
        return Err(WebError::not_found(format!("Issue {} not found", id)));
    }

    info!("User '{}' updated annotations on issue {}", user.username, id);

    Ok(Redirect::to(&format!("/issue/{}", id)))
}

/// Blank means no kill factor; anything else must be an integer
pub(crate) fn parse_kill_factor(raw: &str) -> WebResult<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed.parse::<i64>().map(Some).map_err(|_| {
        WebError::bad_request(format!(
            "Kill factor must be a whole number, got '{}'",
            trimmed
        ))
    })
}
