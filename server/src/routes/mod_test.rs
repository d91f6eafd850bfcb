use std::fs;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

const TEMPLATE: &str = r#"<meta name="google-signin-client_id" content="{{SIGNIN_CLIENT_ID}}"/><div id="app"></div>"#;

fn public_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), TEMPLATE).unwrap();
    fs::write(dir.path().join("robots.txt"), "User-agent: *\n").unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("dist/main.bundle.js"), "export default function init() {}\n").unwrap();
    fs::write(dir.path().join("dist/sitestyles.css"), ".hero{color:red}\n").unwrap();
    dir
}

fn router(public: &tempfile::TempDir) -> Router {
    let config = ServerConfig {
        port: 0,
        public_dir: public.path().to_path_buf(),
        signin_client_id: Some("abc.apps.googleusercontent.com".to_owned()),
    };
    app(AppState::load(config).unwrap())
}

async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn is_entry_document(body: &str) -> bool {
    body.contains(r#"<div id="app"></div>"#) && body.contains("abc.apps.googleusercontent.com")
}

#[tokio::test]
async fn healthz_ok() {
    let public = public_dir();
    let (status, body) = get_path(router(&public), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn root_serves_rendered_entry_document() {
    let public = public_dir();
    let (status, body) = get_path(router(&public), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(is_entry_document(&body), "{body}");
    assert!(!body.contains("{{SIGNIN_CLIENT_ID}}"));
}

#[tokio::test]
async fn index_html_is_rendered_not_raw() {
    let public = public_dir();
    let (status, body) = get_path(router(&public), "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(is_entry_document(&body), "{body}");
}

#[tokio::test]
async fn client_routes_fall_back_to_entry_document() {
    let public = public_dir();
    for path in ["/contact/", "/contact/form", "/unknown", "/deep/link/here"] {
        let (status, body) = get_path(router(&public), path).await;
        assert_eq!(status, StatusCode::OK, "path {path}");
        assert!(is_entry_document(&body), "path {path}: {body}");
    }
}

#[tokio::test]
async fn dist_serves_build_outputs() {
    let public = public_dir();
    let (status, body) = get_path(router(&public), "/dist/main.bundle.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("export default function init"));

    let (status, body) = get_path(router(&public), "/dist/sitestyles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".hero"));
}

#[tokio::test]
async fn missing_dist_file_is_not_found() {
    let public = public_dir();
    let (status, _) = get_path(router(&public), "/dist/missing.bundle.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn real_public_files_win_over_fallback() {
    let public = public_dir();
    let (status, body) = get_path(router(&public), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "User-agent: *\n");
}

#[test]
fn load_fails_without_entry_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig { port: 0, public_dir: dir.path().to_path_buf(), signin_client_id: None };
    assert!(matches!(AppState::load(config), Err(crate::config::ConfigError::MissingDocument(_))));
}
