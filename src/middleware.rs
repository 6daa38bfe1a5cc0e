use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Label for the kind of outcome a response represents
pub fn outcome_kind(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "rejected",
        StatusCode::NOT_FOUND => "not_found",
        s if s.is_server_error() => "failed",
        s if s.is_success() => "ok",
        _ => "other",
    }
}

/// Log every handler invocation once, with its inputs, outcome and duration.
pub async fn log_invocation(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let outcome = outcome_kind(status);

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            query = %query,
            status = status.as_u16(),
            outcome,
            duration_ms,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            query = %query,
            status = status.as_u16(),
            outcome,
            duration_ms,
            "Request handled"
        );
    }

    response
}
