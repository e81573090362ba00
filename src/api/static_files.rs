//! Static file serving from the configured root directory.

use crate::api::models::{AppError, AppState};
use axum::{
    extract::State,
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Served for an empty request path
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Content type for extensions missing from the table
pub const FALLBACK_CONTENT_TYPE: &str = "text/plain";

const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

/// Prefix owned by the API, even for paths the `/api` nest doesn't match
const API_PREFIX: &str = "/api/";

/// Fallback handler for every request no API route claimed
pub async fn static_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    let request_path = uri.path();
    if request_path.starts_with(API_PREFIX) {
        return Err(AppError::ApiNotFound);
    }
    if method != Method::GET {
        return Err(AppError::NotFound);
    }

    let file_path = resolve_path(&state.config.storage.static_root, request_path)?;

    match tokio::fs::metadata(&file_path).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => {
            info!(path = %request_path, "Static file not found");
            return Err(AppError::FileNotFound);
        }
    }

    let contents = read_file(&file_path).await?;

    let content_type = content_type_for(&file_path);
    info!(path = %request_path, content_type, "Serving static file");

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        contents,
    )
        .into_response())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, AppError> {
    tokio::fs::read(path).await.map_err(AppError::FileRead)
}

/// Map a request path onto a file under `root`.
///
/// Works purely lexically, so a path that climbs out of `root` is rejected
/// before anything touches the filesystem.
pub fn resolve_path(root: &Path, request_path: &str) -> Result<PathBuf, AppError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in request_path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(AppError::Forbidden);
                }
            }
            s => segments.push(s),
        }
    }

    if request_path.trim_start_matches('/').is_empty() {
        return Ok(root.join(DEFAULT_DOCUMENT));
    }

    Ok(segments.iter().fold(root.to_path_buf(), |path, s| path.join(s)))
}

/// Content type for a file, keyed on its lowercased extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
