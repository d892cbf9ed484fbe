//! HTTP server for the RAG service

pub mod routes;
pub mod state;

use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::RagConfig;
use crate::error::Result;
use state::AppState;

/// RAG HTTP server
pub struct RagServer {
    config: RagConfig,
    state: AppState,
}

impl RagServer {
    /// Create a new server
    pub fn new(config: RagConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Create from existing state (used by tests with stub providers)
    pub fn from_state(config: RagConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the router with all routes
    fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
            .nest("/api", routes::api_routes(self.config.server.max_upload_size))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.server.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| crate::error::Error::InvalidConfig(format!("invalid address: {}", e)))?;

        let router = self.build_router();

        tracing::info!("Starting RAG server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::Error::InvalidConfig(format!("failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| crate::error::Error::Internal(format!("server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Root banner
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "minirag backend is running" }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::TextChunker;
    use crate::pipeline::RagPipeline;
    use crate::providers::stub::{EchoLlm, MemoryDocumentStore, StubEmbedder};
    use crate::providers::DocumentStore;
    use crate::retrieval::IndexStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Router over stub providers; "blank.txt" holds only whitespace
    async fn test_router(dir: &std::path::Path) -> Router {
        let documents = Arc::new(MemoryDocumentStore::new());
        documents.store("blank.txt", b"   \n  ").await.unwrap();

        let index = Arc::new(
            IndexStore::open(dir.join("index.json"), Arc::new(StubEmbedder::new())).unwrap(),
        );
        let chunker = TextChunker::new(20, 5).unwrap();
        let pipeline = RagPipeline::new(documents, chunker, index, Arc::new(EchoLlm::new()), 3);

        let config = RagConfig::default();
        let state = AppState::with_pipeline(config.clone(), pipeline);
        RagServer::from_state(config, state).build_router()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_document_is_ok_with_error_body() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        for request in [
            get("/api/documents/ghost.txt/text"),
            get("/api/documents/ghost.txt/chunks"),
            post("/api/documents/ghost.txt/index"),
        ] {
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await["error"], "File not found");
        }
    }

    #[tokio::test]
    async fn test_unextractable_document_is_ok_with_error_body() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        for request in [
            get("/api/documents/blank.txt/chunks"),
            post("/api/documents/blank.txt/index"),
        ] {
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await["error"],
                "No text extracted from file"
            );
        }
    }

    #[tokio::test]
    async fn test_upload_then_text_preview() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"sky.txt\"\r\n\
            \r\n\
            The sky is blue.\r\n\
            --BOUNDARY--\r\n";
        let request = Request::builder()
            .method("POST")
            .uri("/api/documents")
            .header("content-type", "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["filename"], "sky.txt");

        let response = router
            .oneshot(get("/api/documents/sky.txt/text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["text_preview"], "The sky is blue.");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"note\"\r\n\
            \r\n\
            hello\r\n\
            --BOUNDARY--\r\n";
        let request = Request::builder()
            .method("POST")
            .uri("/api/documents")
            .header("content-type", "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["type"], "bad_request");
    }

    #[tokio::test]
    async fn test_health_and_banner() {
        let dir = tempfile::tempdir().unwrap();
        let router = test_router(dir.path()).await;

        let response = router.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get("/")).await.unwrap();
        assert_eq!(
            body_json(response).await["message"],
            "minirag backend is running"
        );
    }
}
