use crate::api::models::*;
use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use std::path::Path;
use tracing::info;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        recipes: state.recipes.len(),
        environment: state.config.server.environment.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Deployment diagnostics: where the server runs and what it can see
pub async fn debug_handler(State(state): State<AppState>) -> Result<Json<DebugResponse>, AppError> {
    let working_directory = std::env::current_dir()
        .map_err(|e| AppError::Internal(format!("Failed to read working directory: {}", e)))?;

    let root = &state.config.storage.static_root;
    let files = list_dir(root)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list {}: {}", root.display(), e)))?;

    let css_exists = exists(&root.join(&state.config.debug.stylesheet)).await;
    let js_exists = exists(&root.join(&state.config.debug.script)).await;

    info!(files = files.len(), css_exists, js_exists, "Debug info requested");

    Ok(Json(DebugResponse {
        working_directory: working_directory.display().to_string(),
        environment: state.config.server.environment.clone(),
        recipes: state.recipes.len(),
        files,
        css_exists,
        js_exists,
    }))
}

async fn list_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}
