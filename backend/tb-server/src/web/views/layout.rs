use super::escape;

const STYLE: &str = "body{font-family:sans-serif;margin:1.5em}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:.3em .5em;text-align:left;vertical-align:top}\
th a{text-decoration:none}\
.closed{color:#888}\
.error{color:#b00}\
nav{margin-bottom:1em}";

/// Wrap `body` in the shared page chrome. `user` is the logged-in username.
pub fn page(title: &str, user: Option<&str>, body: &str) -> String {
    let account = match user {
        Some(name) => format!(
            "Logged in as <strong>{}</strong> | <a href=\"/logout\">Log out</a>",
            escape(name)
        ),
        None => "<a href=\"/login\">Log in</a>".to_string(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} - Triage Board</title>\
         <style>{STYLE}</style></head>\n\
         <body>\n\
         <nav><a href=\"/\">All issues</a> | {account}</nav>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}
