//! HTML page bodies served by the web app
//!
//! Rendering is pure: every body depends only on its arguments.

pub const HOMEPAGE_HTML: &str =
    "<h1>Welcome to the Simple Web App!</h1><p>This is the homepage.</p>";
pub const DEFAULT_GREETING_NAME: &str = "World";

/// Escapes `&`, `<`, `>`, `"` and `'` as entity references.
pub fn escape_html(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

/// Renders the greeting page. `None` falls back to [`DEFAULT_GREETING_NAME`], which is
/// escaped like any caller-supplied name.
pub fn greeting_html(name: Option<&str>) -> String {
    let name = escape_html(name.unwrap_or(DEFAULT_GREETING_NAME));
    format!("<h1>Hello, {name}!</h1>")
}
