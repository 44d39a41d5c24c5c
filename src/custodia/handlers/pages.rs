//! Server-rendered pages. Deliberately plain: the application exists to
//! demonstrate the authentication gate, not a template stack.

use axum::{extract::Extension, response::Html};

use crate::custodia::auth::Identity;

pub async fn home() -> Html<String> {
    Html(render_page(
        "Home",
        r#"<h1>Welcome</h1>
        <p>This is the public landing page.</p>
        <nav>
          <a href="/register">Register</a>
          <a href="/login">Login</a>
          <a href="/secret">Secret</a>
        </nav>"#,
    ))
}

/// The one protected page. The guard resolved the session and stashed
/// the identity in the request extensions.
pub async fn secret(Extension(identity): Extension<Identity>) -> Html<String> {
    let body = format!(
        r#"<h1>Secret</h1>
        <p>Hello, {}. You can only see this while signed in.</p>
        <a href="/logout">Logout</a>"#,
        escape_html(&identity.username)
    );
    Html(render_page("Secret", &body))
}

pub fn register_page(error: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Register</h1>");
    if let Some(error) = error {
        body.push_str(&format!(
            r#"<p class="error">{}</p>"#,
            escape_html(error)
        ));
    }
    body.push_str(
        r#"<form method="post" action="/register">
          <label>Username <input name="username" required></label>
          <label>Password <input name="password" type="password" required></label>
          <button type="submit">Sign up</button>
        </form>
        <a href="/login">Already have an account?</a>"#,
    );
    Html(render_page("Register", &body))
}

pub fn login_page() -> Html<String> {
    Html(render_page(
        "Login",
        r#"<h1>Login</h1>
        <form method="post" action="/login">
          <label>Username <input name="username" required></label>
          <label>Password <input name="password" type="password" required></label>
          <button type="submit">Sign in</button>
        </form>
        <a href="/register">Need an account?</a>"#,
    ))
}

fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - custodia</title>
</head>
<body>
{body}
</body>
</html>"#
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
