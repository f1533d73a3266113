use super::{escape, layout};

use tb_auth::PasswordPolicy;

pub fn render(token: &str, policy: &PasswordPolicy) -> String {
    let body = format!(
        "<h1>Create an account</h1>\n\
         <p>Passwords need at least {min} characters, with an uppercase letter, \
         a lowercase letter and a digit.</p>\n\
         <form method=\"post\" action=\"/register\">\n\
         <input type=\"hidden\" name=\"token\" value=\"{token}\">\n\
         <p><label>Username <input name=\"username\" autocomplete=\"username\"></label></p>\n\
         <p><label>Password <input type=\"password\" name=\"password\" \
         autocomplete=\"new-password\"></label></p>\n\
         <p><label>Confirm password <input type=\"password\" name=\"confirm_password\" \
         autocomplete=\"new-password\"></label></p>\n\
         <p><button type=\"submit\">Register</button></p>\n\
         </form>",
        min = policy.min_length,
        token = escape(token),
    );

    layout::page("Register", None, &body)
}
