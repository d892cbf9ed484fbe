//! Question answering endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::response::AskResponse;

/// Request body for POST /api/ask
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The question to answer
    pub question: String,
}

/// POST /api/ask - answer a question from indexed content
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();
    tracing::info!("Question: \"{}\"", request.question);

    let response = state.pipeline().ask(&request.question).await?;

    tracing::info!(
        "Answered in {}ms",
        start.elapsed().as_millis()
    );

    Ok(Json(response))
}
