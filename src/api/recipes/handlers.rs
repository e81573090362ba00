use crate::api::models::*;
use axum::{Json, extract::State};
use tracing::info;

pub async fn list_recipes_handler(State(state): State<AppState>) -> Json<RecipesResponse> {
    info!(count = state.recipes.len(), "Listing recipes");

    Json(RecipesResponse {
        recetas: state.recipes.all(),
    })
}
