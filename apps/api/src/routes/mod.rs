pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless generation
        .route("/api/v1/generate", post(generation::handle_generate))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        .route(
            "/api/v1/sessions/:id/blueprint",
            put(sessions::handle_update_blueprint),
        )
        // Exports
        .route(
            "/api/v1/sessions/:id/export/youtube",
            get(sessions::handle_export_youtube),
        )
        .route(
            "/api/v1/sessions/:id/story-card",
            get(sessions::handle_story_card),
        )
        .route(
            "/api/v1/sessions/:id/story-card.svg",
            get(sessions::handle_story_card_svg),
        )
        .with_state(state)
}
