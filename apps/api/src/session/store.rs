//! In-memory session store — the only state in the system.
//!
//! A session owns the current blueprint and the content generated from it.
//! Regeneration swaps both under one write lock: readers see either the old
//! pair or the new pair, never a mix. No history is kept.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use crate::models::blueprint::ProductBlueprint;
use crate::models::content::AiContent;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSession {
    pub id: Uuid,
    pub blueprint: ProductBlueprint,
    pub content: AiContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, LaunchSession>>>,
}

impl SessionStore {
    /// Creates a session around a blueprint/content pair and returns a
    /// snapshot of it.
    pub fn insert(&self, blueprint: ProductBlueprint, content: AiContent) -> LaunchSession {
        let now = Utc::now();
        let session = LaunchSession {
            id: Uuid::new_v4(),
            blueprint,
            content,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Option<LaunchSession> {
        self.inner.read().get(&id).cloned()
    }

    /// Replaces a session's blueprint and content wholesale, bumping
    /// `updated_at`. Returns the new snapshot, or `None` for an unknown id.
    pub fn replace(
        &self,
        id: Uuid,
        blueprint: ProductBlueprint,
        content: AiContent,
    ) -> Option<LaunchSession> {
        let mut guard = self.inner.write();
        let session = guard.get_mut(&id)?;
        session.blueprint = blueprint;
        session.content = content;
        session.updated_at = Utc::now();
        Some(session.clone())
    }
}
