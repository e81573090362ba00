use crate::api::api_not_found;
use crate::api::models::AppState;
use crate::api::system::handlers::{debug_handler, health_handler};
use axum::{
    Router,
    routing::{MethodFilter, on},
};

// GET only: HEAD must fall through to the API 404 as well
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", on(MethodFilter::GET, health_handler).fallback(api_not_found))
        .route("/debug", on(MethodFilter::GET, debug_handler).fallback(api_not_found))
}
