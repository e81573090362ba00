#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use recipe_server::api::{AppState, router};
use recipe_server::config::AppConfig;
use recipe_server::storage::RecipeStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const SECRET: &str = "top-secret-contents";

/// A throwaway deployment: static root, optional recipe file, and the router over it
pub struct Site {
    pub dir: TempDir,
    pub app: Router,
}

impl Site {
    pub fn recipes_path(&self) -> PathBuf {
        self.dir.path().join("recipes.json")
    }
}

/// Build a site whose recipe file holds `recipes` (or is absent when `None`)
pub fn site(recipes: Option<&str>) -> Site {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("public");

    write(&root, "index.html", "<h1>Recetas</h1>");
    write(&root, "css/styles.css", "body { margin: 0; }");
    write(&root, "js/script.js", "fetch('/api/recipes');");
    write(&root, "img/logo.PNG", "png-bytes");
    write(&root, "notes.xyz", "unknown");
    fs::create_dir_all(root.join("empty-dir")).unwrap();
    fs::write(dir.path().join("secret.txt"), SECRET).unwrap();

    let recipes_path = dir.path().join("recipes.json");
    if let Some(raw) = recipes {
        fs::write(&recipes_path, raw).unwrap();
    }

    let mut config = AppConfig::default();
    config.server.environment = "test".to_string();
    config.storage.recipes_path = recipes_path.clone();
    config.storage.static_root = root;

    let store = RecipeStore::load(&recipes_path);
    let app = router(AppState::new(config, store));

    Site { dir, app }
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_bytes(res: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

pub fn header<'a>(res: &'a Response<Body>, name: &str) -> Option<&'a str> {
    res.headers().get(name).and_then(|v| v.to_str().ok())
}
