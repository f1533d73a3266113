use super::{escape, layout, query_value};

use tb_core::{Issue, IssueQuery, IssueSortKey, SortOrder};

use chrono::{DateTime, Utc};

fn heading(key: IssueSortKey) -> &'static str {
    match key {
        IssueSortKey::Number => "#",
        IssueSortKey::Title => "Title",
        IssueSortKey::State => "State",
        IssueSortKey::Author => "Author",
        IssueSortKey::CreatedAt => "Created",
        IssueSortKey::UpdatedAt => "Updated",
        IssueSortKey::ClosedAt => "Closed",
        IssueSortKey::KillFactor => "Kill factor",
        IssueSortKey::AttentionOf => "Attention of",
    }
}

/// Link that sorts by `key`, flipping the direction if already sorted by it
fn sort_link(key: IssueSortKey, query: &IssueQuery) -> String {
    let order = if key == query.sort {
        query.order.reversed()
    } else {
        SortOrder::Asc
    };

    let mut href = format!("/?sort={}&amp;order={}", key.as_str(), order.as_str());
    if let Some(label) = &query.label {
        href.push_str("&amp;label=");
        href.push_str(&query_value(label));
    }

    let marker = match (key == query.sort, query.order) {
        (true, SortOrder::Asc) => " &#9650;",
        (true, SortOrder::Desc) => " &#9660;",
        (false, _) => "",
    };

    format!("<a href=\"{}\">{}{}</a>", href, heading(key), marker)
}

pub(super) fn date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn filter_form(query: &IssueQuery) -> String {
    let sort_options: String = IssueSortKey::ALL
        .iter()
        .map(|key| {
            let selected = if *key == query.sort { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                key.as_str(),
                selected,
                heading(*key)
            )
        })
        .collect();

    let order_options: String = [SortOrder::Asc, SortOrder::Desc]
        .iter()
        .map(|order| {
            let selected = if *order == query.order { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                order.as_str(),
                selected
            )
        })
        .collect();

    format!(
        "<form method=\"get\" action=\"/\">\
         <label>Label <input name=\"label\" value=\"{}\"></label> \
         <label>Sort <select name=\"sort\">{}</select></label> \
         <select name=\"order\">{}</select> \
         <button type=\"submit\">Apply</button></form>",
        escape(query.label.as_deref().unwrap_or("")),
        sort_options,
        order_options
    )
}

fn row(issue: &Issue) -> String {
    let class = if issue.is_open() { "open" } else { "closed" };
    let closing_pr = issue
        .closing_pr_number
        .map(|pr| format!("#{}", pr))
        .unwrap_or_default();

    format!(
        "<tr class=\"{class}\">\
         <td><a href=\"/issue/{id}\">{number}</a></td>\
         <td><a href=\"{url}\">{title}</a></td>\
         <td>{state}</td><td>{author}</td>\
         <td>{created}</td><td>{updated}</td><td>{closed}</td>\
         <td>{kill_factor}</td><td>{attention_of}</td>\
         <td>{labels}</td><td>{closing_pr}</td></tr>\n",
        id = issue.id,
        number = issue.number,
        url = escape(&issue.url),
        title = escape(&issue.title),
        state = issue.state,
        author = escape(&issue.author),
        labels = escape(&issue.labels.names().join(", ")),
        created = date(&issue.created_at),
        updated = date(&issue.updated_at),
        closed = issue.closed_at.as_ref().map(date).unwrap_or_default(),
        kill_factor = issue
            .annotations
            .kill_factor
            .map(|k| k.to_string())
            .unwrap_or_default(),
        attention_of = escape(issue.annotations.attention_of.as_deref().unwrap_or("")),
    )
}

pub fn render(issues: &[Issue], query: &IssueQuery, user: Option<&str>) -> String {
    let headings: String = IssueSortKey::ALL
        .iter()
        .map(|key| format!("<th>{}</th>", sort_link(*key, query)))
        .collect();

    let rows: String = issues.iter().map(row).collect();

    let body = format!(
        "<h1>Issues</h1>\n{filter}\n<p>{count} issues</p>\n\
         <table>\n<thead><tr>{headings}<th>Labels</th><th>Closing PR</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>",
        filter = filter_form(query),
        count = issues.len(),
    );

    layout::page("Issues", user, &body)
}
