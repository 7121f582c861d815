use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(http::handlers::home))
        .route("/hello", get(http::handlers::hello))
        .route("/api/status", get(http::handlers::api_status))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
