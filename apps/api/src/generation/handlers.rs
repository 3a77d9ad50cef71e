//! Axum route handlers for stateless generation.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generate;
use crate::models::blueprint::ProductBlueprint;
use crate::models::content::AiContent;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub blueprint: ProductBlueprint,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: AiContent,
}

/// Runs the pure generator off the request path.
///
/// Generation is CPU-only string templating; spawn_blocking keeps the
/// interactive path responsive under load. Correctness never depends on the
/// scheduling — the result replaces the previous content wholesale.
pub(crate) async fn generate_off_path(blueprint: ProductBlueprint) -> Result<AiContent, AppError> {
    tokio::task::spawn_blocking(move || generate(&blueprint))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("generation task failed: {e}")))
}

/// POST /api/v1/generate
///
/// Stateless: blueprint in, full launch kit out. Total for any well-formed
/// body — empty fields fall back to placeholder phrases instead of erroring.
pub async fn handle_generate(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let content = generate_off_path(request.blueprint).await?;
    Ok(Json(GenerateResponse { content }))
}
