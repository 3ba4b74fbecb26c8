//! Shared fixtures for integration tests.
//!
//! Provides a throwaway site directory for the dev server and an icon
//! source for the generator.

#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pwa_devtools::config::ServerConfig;
use pwa_devtools::server::create_router;
use tempfile::TempDir;
use tower::ServiceExt;

/// A 512x512 knight-on-green icon, close to the real app icon.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" width="512" height="512">
  <rect width="512" height="512" fill="#3fb959"/>
  <path d="M256 100 L310 180 L350 340 L400 480 L480 500 L480 512 L32 512 L32 500 L110 480 L150 300 L200 150 Z" fill="#ffffff"/>
  <circle cx="280" cy="200" r="15" fill="#3fb959"/>
</svg>"##;

/// Site layout:
///
/// ```text
/// index.html
/// js/app.js
/// assets/          (no index.html)
///   logo.svg
///   fonts/
/// ```
pub fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::write(root.join("index.html"), "<h1>Chess Puzzles</h1>").unwrap();
    std::fs::create_dir_all(root.join("js")).unwrap();
    std::fs::write(root.join("js/app.js"), "console.log('ready');").unwrap();
    std::fs::create_dir_all(root.join("assets/fonts")).unwrap();
    std::fs::write(root.join("assets/logo.svg"), ICON_SVG).unwrap();
    dir
}

/// Router serving `root` with the given listing setting.
pub fn router(root: &Path, directory_listing: bool) -> Router {
    create_router(&ServerConfig {
        root: root.to_path_buf(),
        directory_listing,
        ..ServerConfig::default()
    })
}

/// Issue a GET against `app`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Icons directory holding `icon.svg`.
pub fn icons_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("icons")).unwrap();
    std::fs::write(dir.path().join("icons/icon.svg"), ICON_SVG).unwrap();
    dir
}
