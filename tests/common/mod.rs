#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use miso_gallery::config::GalleryConfig;
use miso_gallery::gallery::Listing;
use miso_gallery::server::{router, AppState};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SHARE_BASE: &str = "https://share.test/images";

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Write a file of exactly `len` bytes, creating parents as needed.
pub fn write_sized(root: &Path, rel: &str, len: usize) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, vec![0u8; len]).unwrap();
}

/// Configuration rooted at `root` with a fixed share base.
pub fn test_config(root: &Path) -> GalleryConfig {
    GalleryConfig {
        root: root.canonicalize().unwrap(),
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        base_url: SHARE_BASE.to_string(),
    }
}

/// Entry names of a listing, in order.
pub fn names(listing: &Listing) -> Vec<&str> {
    listing.entries().iter().map(|e| e.name.as_str()).collect()
}

/// Send one request through a fresh router over `root`.
pub async fn send(root: &Path, method: &str, uri: &str) -> Response<Body> {
    let app = router(AppState::new(test_config(root)).unwrap());
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
