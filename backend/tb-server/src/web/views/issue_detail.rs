use super::issue_list::date;
use super::{escape, layout};

use tb_core::Issue;

fn edit_form(issue: &Issue) -> String {
    let annotations = &issue.annotations;

    format!(
        "<h2>Annotations</h2>\n\
         <form method=\"post\" action=\"/save/{id}\">\n\
         <p><label>Notes<br><textarea name=\"notes\" rows=\"6\" cols=\"80\">{notes}</textarea></label></p>\n\
         <p><label>Attention of <input name=\"attention_of\" value=\"{attention_of}\"></label></p>\n\
         <p><label>Kill factor <input name=\"kill_factor\" value=\"{kill_factor}\"></label></p>\n\
         <p><button type=\"submit\">Save</button></p>\n\
         </form>",
        id = issue.id,
        notes = escape(annotations.notes.as_deref().unwrap_or("")),
        attention_of = escape(annotations.attention_of.as_deref().unwrap_or("")),
        kill_factor = annotations
            .kill_factor
            .map(|k| k.to_string())
            .unwrap_or_default(),
    )
}

fn read_only_annotations(issue: &Issue) -> String {
    let annotations = &issue.annotations;

    format!(
        "<h2>Annotations</h2>\n\
         <dl><dt>Notes</dt><dd><pre>{}</pre></dd>\
         <dt>Attention of</dt><dd>{}</dd>\
         <dt>Kill factor</dt><dd>{}</dd></dl>\n\
         <p><a href=\"/login\">Log in</a> to edit.</p>",
        escape(annotations.notes.as_deref().unwrap_or("")),
        escape(annotations.attention_of.as_deref().unwrap_or("")),
        annotations
            .kill_factor
            .map(|k| k.to_string())
            .unwrap_or_default(),
    )
}

pub fn render(issue: &Issue, user: Option<&str>) -> String {
    let title = format!("#{} {}", issue.number, issue.title);

    let closed = match (&issue.closed_at, &issue.closed_by) {
        (Some(at), Some(by)) => format!("{} by {}", date(at), escape(by)),
        (Some(at), None) => date(at),
        _ => String::new(),
    };

    let closing_pr = issue
        .closing_pr_number
        .map(|pr| format!("#{}", pr))
        .unwrap_or_default();

    let annotations = if user.is_some() {
        edit_form(issue)
    } else {
        read_only_annotations(issue)
    };

    let body = format!(
        "<h1>{heading}</h1>\n\
         <p><a href=\"{url}\">{url}</a></p>\n\
         <dl>\
         <dt>State</dt><dd>{state}</dd>\
         <dt>Author</dt><dd>{author}</dd>\
         <dt>Labels</dt><dd>{labels}</dd>\
         <dt>Created</dt><dd>{created}</dd>\
         <dt>Updated</dt><dd>{updated}</dd>\
         <dt>Closed</dt><dd>{closed}</dd>\
         <dt>Closing PR</dt><dd>{closing_pr}</dd>\
         </dl>\n\
         <pre>{issue_body}</pre>\n\
         {annotations}",
        heading = escape(&title),
        url = escape(&issue.url),
        state = issue.state,
        author = escape(&issue.author),
        labels = escape(&issue.labels.names().join(", ")),
        created = date(&issue.created_at),
        updated = date(&issue.updated_at),
        issue_body = escape(issue.body.as_deref().unwrap_or("")),
    );

    layout::page(&title, user, &body)
}
