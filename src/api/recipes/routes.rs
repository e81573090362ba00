use crate::api::api_not_found;
use crate::api::models::AppState;
use crate::api::recipes::handlers::list_recipes_handler;
use axum::{
    Router,
    routing::{MethodFilter, on},
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/recipes",
        on(MethodFilter::GET, list_recipes_handler).fallback(api_not_found),
    )
}
