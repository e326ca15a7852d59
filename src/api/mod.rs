//! HTTP surface: JSON note endpoints plus static files for everything else.

pub mod error;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::repo::NoteRepository;
use crate::storage::FsStorage;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<NoteRepository>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(repo: NoteRepository) -> Self {
        Self {
            repo: Arc::new(repo),
            start_time: Instant::now(),
        }
    }
}

/// Build the application router. Paths outside `/api` are served from
/// `static_dir` when one is given, and are 404 otherwise.
pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/notes/{id}",
            get(handlers::get_note).put(handlers::update_note),
        )
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the service until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    tracing::info!(data_dir = %config.data_dir.display(), "opening note store");
    let repo = NoteRepository::new(Arc::new(FsStorage::new(&config.data_dir)));
    let app = router(AppState::new(repo), Some(config.static_dir.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(static_dir = %config.static_dir.display(), "notekeep listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, NoteStorage};
    use crate::template::TEMPLATE_KEY;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup() -> (Arc<MemoryStorage>, Router) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = NoteRepository::new(storage.clone());
        (storage, router(AppState::new(repo), None))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(raw) => builder
                .header("content-type", "application/json")
                .body(Body::from(raw.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_get_unknown_note_is_404() {
        let (_storage, app) = setup();

        let (status, body) = send(&app, "GET", "/api/notes/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Note not found." }));
    }

    #[tokio::test]
    async fn test_create_returns_201_without_file_name() {
        let (_storage, app) = setup();

        let (status, body) = send(
            &app,
            "POST",
            "/api/notes",
            Some(r#"{"title":"Daily Plan","description":"morning","content":"coffee"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Daily Plan");
        assert_eq!(body["secondaryContent"], "morning");
        assert!(body["id"].is_string());
        assert!(body["updatedAt"].is_string());
        assert!(body.get("fileName").is_none());
    }

    #[tokio::test]
    async fn test_create_tolerates_bad_body() {
        let (_storage, app) = setup();

        let (status, body) = send(&app, "POST", "/api/notes", Some("definitely not json")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Untitled Note");
        assert_eq!(body["secondaryContent"], "");

        let (status, body) = send(&app, "POST", "/api/notes", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Untitled Note");
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let (storage, app) = setup();
        let (_, created) = send(&app, "POST", "/api/notes", Some(r#"{"title":"First"}"#)).await;
        send(&app, "POST", "/api/notes", Some(r#"{"title":"First"}"#)).await;
        assert!(storage.read_key(TEMPLATE_KEY).unwrap().is_some());

        let (status, list) = send(&app, "GET", "/api/notes", None).await;
        assert_eq!(status, StatusCode::OK);
        let notes = list.as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.get("fileName").is_none()));
        assert!(notes.iter().all(|n| n["secondaryContent"] == n["description"]));

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_note() {
        let (storage, app) = setup();
        let (_, created) = send(
            &app,
            "POST",
            "/api/notes",
            Some(r#"{"title":"Old Name","description":"d"}"#),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/api/notes/{id}"),
            Some(r#"{"title":"New Name","content":"body","description":7}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["title"], "New Name");
        assert_eq!(updated["description"], "d");
        assert_eq!(updated["content"], "body");
        assert!(storage.read_key("new-name.json").unwrap().is_some());
        assert!(storage.read_key("old-name.json").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_note_is_404() {
        let (_storage, app) = setup();

        let (status, body) = send(&app, "PUT", "/api/notes/missing", Some(r#"{"title":"x"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Note not found.");
    }

    #[tokio::test]
    async fn test_corrupt_store_is_500() {
        let (storage, app) = setup();
        storage.write_key("bad.json", b"{{{").unwrap();

        let (status, body) = send(&app, "GET", "/api/notes", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to load notes.");

        let (status, body) = send(&app, "GET", "/api/notes/anything", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to load note.");
    }

    #[tokio::test]
    async fn test_corrupt_template_fails_create() {
        let (storage, app) = setup();
        storage.write_key(TEMPLATE_KEY, b"not json").unwrap();

        let (status, body) = send(&app, "POST", "/api/notes", Some(r#"{"title":"x"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to create note.");
    }

    #[tokio::test]
    async fn test_health() {
        let (_storage, app) = setup();

        let (status, body) = send(&app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("app.js"), "console.log('hi');").unwrap();
        let repo = NoteRepository::new(Arc::new(MemoryStorage::new()));
        let app = router(AppState::new(repo), Some(tmp.path().to_path_buf()));

        let request = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"console.log('hi');");

        let request = Request::builder().uri("/missing.css").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
