pub mod cors;
pub mod models;
pub mod recipes;
pub mod static_files;
pub mod system;

// Re-exports
pub use models::*;

use axum::{
    Router,
    extract::Request,
    middleware,
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the complete router.
///
/// - `OPTIONS *`           - CORS preflight, always 200
/// - `GET /api/recipes`    - All loaded recipes
/// - `GET /api/health`     - Health check
/// - `GET /api/debug`      - Deployment diagnostics
/// - anything else `/api`  - 404 "API endpoint not found"
/// - `GET /*`              - Static files from the configured root
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(recipes::routes())
        .merge(system::routes())
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback(static_files::static_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| {
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                path = %request.uri().path(),
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(middleware::from_fn(cors::permissive_cors)),
        )
}

/// Unknown API path, or a known one hit with the wrong method
pub async fn api_not_found() -> AppError {
    AppError::ApiNotFound
}
