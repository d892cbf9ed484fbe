//! API routes for the RAG server

pub mod documents;
pub mod ingest;
pub mod query;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::error::Error;
use crate::server::state::AppState;
use crate::types::response::ErrorBody;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Document upload and listing - with larger body limit for uploads
        .route(
            "/documents",
            post(documents::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/documents", get(documents::list_documents))
        // Extraction and chunk previews (no indexing side effect)
        .route("/documents/:filename/text", get(ingest::extract_text))
        .route("/documents/:filename/chunks", get(ingest::preview_chunks))
        // Indexing
        .route("/documents/:filename/index", post(ingest::index_document))
        // Questions
        .route("/ask", post(query::ask))
        // Info
        .route("/info", get(info))
}

/// Map the expected, recoverable conditions to their structured JSON
/// payloads; everything else propagates as a real error response.
pub(crate) fn recoverable(err: Error) -> Result<Response, Error> {
    match err {
        Error::NotFound(_) => Ok(Json(ErrorBody::file_not_found()).into_response()),
        Error::EmptyContent(_) => Ok(Json(ErrorBody::no_text_extracted()).into_response()),
        other => Err(other),
    }
}

/// API info endpoint
async fn info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "minirag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Minimal RAG service with document upload, chunk indexing, and grounded answers",
        "endpoints": {
            "POST /api/documents": "Upload a document (multipart)",
            "GET /api/documents": "List stored documents",
            "GET /api/documents/:filename/text": "Preview extracted text",
            "GET /api/documents/:filename/chunks": "Preview chunking (no side effect)",
            "POST /api/documents/:filename/index": "Chunk, embed, and index a document",
            "POST /api/ask": "Ask a question against indexed content"
        }
    }))
}
