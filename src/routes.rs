use axum::{middleware, routing::any, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{get_stats, handle_panic, health, lookup_zipcode, not_found},
    middleware::log_invocation,
};

pub const HEALTH_PATH: &str = "/health";

// Routes answer any method; only the path selects the handler
fn routes() -> Router<Config> {
    Router::new()
        .route(HEALTH_PATH, any(health))
        .route("/stats", any(get_stats))
        .route("/zipcode-lookup", any(lookup_zipcode))
        .route("/zipcodes/lookup/:zipcode", any(lookup_zipcode))
}

/// Build the application router.
///
/// Every route is served both at the root and under `/api`. Unmatched paths
/// fall through to the structured 404.
pub fn build_router(config: Config) -> Router {
    let router = Router::new()
        .merge(routes())
        .nest("/api", routes())
        .fallback(not_found)
        .with_state(config);

    with_layers(router)
}

/// Wrap a router with the shared request handling layers.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_invocation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
