use super::{escape, layout};

use axum::http::StatusCode;

pub fn render(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the issue list</a></p>",
        status.as_u16(),
        escape(title),
        escape(message)
    );

    layout::page(title, None, &body)
}
