//! HTTP application assembly

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

/// Builds the router with the full middleware stack.
///
/// Shared by `serve` and the integration tests.
pub fn app(state: AppState) -> Router {
    crate::routes::router(state)
        // no-cache for pages and API, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
