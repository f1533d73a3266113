use super::layout;

pub fn render() -> String {
    let body = "<h1>Log in</h1>\n\
                <form method=\"post\" action=\"/login\">\n\
                <p><label>Username <input name=\"username\" autocomplete=\"username\"></label></p>\n\
                <p><label>Password <input type=\"password\" name=\"password\" \
                autocomplete=\"current-password\"></label></p>\n\
                <p><button type=\"submit\">Log in</button></p>\n\
                </form>";

    layout::page("Log in", None, body)
}
