use crate::config::AppConfig;
use crate::storage::RecipeStore;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipeStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, recipes: RecipeStore) -> Self {
        Self {
            recipes,
            config: Arc::new(config),
        }
    }
}

/// Response for `GET /api/recipes`
#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recetas: Arc<[Value]>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub recipes: usize,
    pub environment: String,
    pub timestamp: String,
}

/// Deployment diagnostics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    pub working_directory: String,
    pub environment: String,
    pub recipes: usize,
    pub files: Vec<String>,
    pub css_exists: bool,
    pub js_exists: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API endpoint not found")]
    ApiNotFound,

    #[error("Not found")]
    NotFound,

    #[error("File not found")]
    FileNotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal server error")]
    FileRead(#[source] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ApiNotFound | AppError::NotFound | AppError::FileNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::FileRead(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::FileRead(e) => error!(error = %e, "Static file read failed"),
            AppError::Internal(msg) => error!("Internal error: {}", msg),
            _ => {}
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
