//! Document upload and listing endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::{DocumentListResponse, UploadResponse};

/// POST /api/documents - upload a document (multipart form)
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::bad_request(format!("multipart error: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::bad_request(format!("failed to read upload: {}", e)))?;

        tracing::info!("Uploading '{}' ({} bytes)", filename, data.len());
        state.pipeline().documents().store(&filename, &data).await?;

        return Ok(Json(UploadResponse {
            filename,
            status: "uploaded successfully".to_string(),
        }));
    }

    Err(Error::bad_request("upload must contain a file field"))
}

/// GET /api/documents - list stored documents
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<DocumentListResponse>> {
    let documents = state.pipeline().documents().list().await?;
    let total = documents.len();

    Ok(Json(DocumentListResponse { documents, total }))
}
