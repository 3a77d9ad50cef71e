use crate::config::Config;
use crate::layout::CardConfig;
use crate::session::store::SessionStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub card_config: CardConfig,
    pub config: Config,
}
