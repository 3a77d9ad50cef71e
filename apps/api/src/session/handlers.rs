//! Axum route handlers for the session lifecycle and per-session exports.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::handlers::generate_off_path;
use crate::layout::{plan_story_card, render_svg};
use crate::models::blueprint::ProductBlueprint;
use crate::session::hero_image::probe_dimensions;
use crate::session::store::LaunchSession;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Starting blueprint. Omitted means start from the sample product, so a
    /// fresh session always shows a fully populated kit.
    pub blueprint: Option<ProductBlueprint>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlueprintRequest {
    pub blueprint: ProductBlueprint,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<LaunchSession>, AppError> {
    let blueprint = request.blueprint.unwrap_or_else(ProductBlueprint::sample);
    let content = generate_off_path(blueprint.clone()).await?;
    let session = state.sessions.insert(blueprint, content);
    tracing::info!(session_id = %session.id, "session created");
    Ok(Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LaunchSession>, AppError> {
    let session = fetch_session(&state, id)?;
    Ok(Json(session))
}

/// PUT /api/v1/sessions/:id/blueprint
///
/// Replaces the blueprint and regenerates the whole kit in one step. There
/// is no partial update; the stored content always matches the stored
/// blueprint.
pub async fn handle_update_blueprint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBlueprintRequest>,
) -> Result<Json<LaunchSession>, AppError> {
    // Reject updates to unknown sessions before doing any generation work.
    fetch_session(&state, id)?;

    let content = generate_off_path(request.blueprint.clone()).await?;
    let session = state
        .sessions
        .replace(id, request.blueprint, content)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    tracing::info!(session_id = %session.id, "blueprint updated, kit regenerated");
    Ok(Json(session))
}

/// GET /api/v1/sessions/:id/export/youtube
///
/// Downloads the YouTube kit as pretty-printed JSON, named after the
/// product's slug.
pub async fn handle_export_youtube(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = fetch_session(&state, id)?;
    let json = serde_json::to_string_pretty(&session.content.youtube)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("youtube kit serialization: {e}")))?;

    let slug = slugify(&session.blueprint.name, "launch-kit");
    let headers = [
        (CONTENT_TYPE, "application/json".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{slug}-youtube.json\""),
        ),
    ];
    Ok((headers, json))
}

/// GET /api/v1/sessions/:id/story-card
///
/// The card plan as JSON, for clients that render on their own surface.
pub async fn handle_story_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = fetch_session(&state, id)?;
    let plan = plan_session_card(&state, &session);
    Ok(Json(plan))
}

/// GET /api/v1/sessions/:id/story-card.svg
pub async fn handle_story_card_svg(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = fetch_session(&state, id)?;
    let plan = plan_session_card(&state, &session);
    let svg = render_svg(&plan, session.blueprint.image_data_url.as_deref());

    let slug = slugify(&session.blueprint.name, "launch-kit");
    let headers = [
        (CONTENT_TYPE, "image/svg+xml".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{slug}-instagram-story.svg\""),
        ),
    ];
    Ok((headers, svg))
}

fn fetch_session(state: &AppState, id: Uuid) -> Result<LaunchSession, AppError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))
}

fn plan_session_card(state: &AppState, session: &LaunchSession) -> crate::layout::CardPlan {
    let image_dims = session
        .blueprint
        .image_data_url
        .as_deref()
        .and_then(probe_dimensions);
    plan_story_card(
        &session.blueprint.name,
        &session.content.promise,
        image_dims,
        &state.card_config,
    )
}

/// Lowercases and collapses non-alphanumeric runs to single hyphens.
/// Empty results (all-symbol names) fall back to the given default.
pub fn slugify(value: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}
