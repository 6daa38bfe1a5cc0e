pub mod stats;
pub mod zipcode_lookup;

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
    Json,
};
use std::any::Any;
use tracing::error;

use crate::{
    config::Config,
    models::{HealthResponse, LookupFailure, LookupResult, NotFoundResponse},
};

pub use stats::get_stats;
pub use zipcode_lookup::lookup_zipcode;

pub async fn health(State(config): State<Config>) -> impl IntoResponse {
    Json(HealthResponse::ok(config.node_env.clone(), config.presence()))
}

/// Fallback for every path without a handler
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse::for_path(uri.path())),
    )
}

/// Turn a handler panic into the structured 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    error!("Handler panicked: {}", message);

    let failure = LookupResult::Failed(LookupFailure::new(message));
    let body = serde_json::to_vec(&failure).unwrap_or_default();

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = failure.status_code();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}
