//! API response payloads

use serde::{Deserialize, Serialize};

use super::document::StoredDocument;

/// Response for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Stored filename
    pub filename: String,
    /// Status message
    pub status: String,
}

/// Response listing stored documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// Stored documents
    pub documents: Vec<StoredDocument>,
    /// Total count
    pub total: usize,
}

/// Response for the text extraction preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPreviewResponse {
    /// Document filename
    pub filename: String,
    /// First 1000 characters of the extracted text
    pub text_preview: String,
}

/// Response for the chunk preview (no indexing side effect)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkPreviewResponse {
    /// Document filename
    pub filename: String,
    /// Total number of chunks the document would produce
    pub total_chunks: usize,
    /// First 3 chunk texts
    pub sample_chunks: Vec<String>,
}

/// Response for a completed indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Document filename
    pub filename: String,
    /// Number of chunks embedded and stored
    pub chunks_indexed: usize,
    /// Status message
    pub status: String,
}

/// Response for a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// The question, verbatim
    pub question: String,
    /// The generated answer
    pub answer: String,
}

/// Structured error payload for recoverable conditions.
///
/// Returned with HTTP 200 so callers always get a JSON body to check,
/// never a transport-level failure, for the expected error cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short human-readable error string
    pub error: String,
}

impl ErrorBody {
    /// The requested document does not exist in storage
    pub fn file_not_found() -> Self {
        Self {
            error: "File not found".to_string(),
        }
    }

    /// Extraction produced no usable text
    pub fn no_text_extracted() -> Self {
        Self {
            error: "No text extracted from file".to_string(),
        }
    }
}
