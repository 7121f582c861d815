use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();

    info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = elapsed_ms,
        "request summary"
    );

    if status == StatusCode::NOT_FOUND {
        debug!(method = %method, path = %path, "no route matched");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_mode_lowers_default_level() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "info");
    }
}
