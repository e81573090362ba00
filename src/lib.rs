//! Recipe server: static files plus a small read-only recipe API.
//!
//! Recipes are loaded once at startup by [`storage::RecipeStore`] and shared
//! with every request through [`api::AppState`]. [`api::router`] builds the
//! axum router; everything outside `/api` is served from the static root.

pub mod api;
pub mod config;
pub mod storage;
