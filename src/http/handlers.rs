//! Axum HTTP handlers for the web app
//!
//! Serves the homepage, the greeting page and the JSON status endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Html,
    Json,
};

use crate::domain::{
    pages::{greeting_html, HOMEPAGE_HTML},
    status::StatusResponse,
};

pub async fn home() -> Html<&'static str> {
    Html(HOMEPAGE_HTML)
}

/// Query pairs are kept in request order so a repeated `name` resolves to its first
/// occurrence. An undecodable query string counts as having no `name`.
pub async fn hello(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Html<String> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring undecodable query string");
            Vec::new()
        }
    };

    let name = pairs
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str());

    Html(greeting_html(name))
}

pub async fn api_status() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
