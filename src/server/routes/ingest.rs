//! Extraction, chunk preview, and indexing endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::response::TextPreviewResponse;

use super::recoverable;

/// Preview length for extracted text, in characters
const TEXT_PREVIEW_CHARS: usize = 1000;

/// GET /api/documents/:filename/text - preview extracted text
pub async fn extract_text(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    match state.pipeline().extract_text(&filename).await {
        Ok(text) => Ok(Json(TextPreviewResponse {
            filename,
            text_preview: text.chars().take(TEXT_PREVIEW_CHARS).collect(),
        })
        .into_response()),
        Err(err) => recoverable(err),
    }
}

/// GET /api/documents/:filename/chunks - preview chunking, no side effect
pub async fn preview_chunks(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    match state.pipeline().preview_chunks(&filename).await {
        Ok(preview) => Ok(Json(preview).into_response()),
        Err(err) => recoverable(err),
    }
}

/// POST /api/documents/:filename/index - chunk, embed, and index
pub async fn index_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    match state.pipeline().index_document(&filename).await {
        Ok(result) => Ok(Json(result).into_response()),
        Err(err) => recoverable(err),
    }
}
