//! Generated marketing content — the output side of the generation core.
//!
//! Serialized in camelCase to keep the wire shape identical to what the
//! preview UI and the JSON export consume. `PartialEq` is derived so tests
//! can assert determinism structurally.

use serde::{Deserialize, Serialize};

/// One full set of launch assets, produced atomically from a blueprint
/// snapshot. Regeneration replaces the whole value; no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiContent {
    pub headline: String,
    pub promise: String,
    pub product_link: String,
    pub instagram: InstagramKit,
    pub youtube: YoutubeKit,
    pub email_snippet: EmailSnippet,
    pub video_storyboard: Vec<StoryboardScene>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramKit {
    pub caption: String,
    pub call_to_action: String,
    pub posting_tips: Vec<String>,
}

/// The "upload kit" block — this sub-object (alone) is what the JSON export
/// endpoint pretty-prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeKit {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub chapters: Vec<Chapter>,
    pub thumbnail_hook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Illustrative timestamp label ("00:00", "00:45", ...), not derived from
    /// any real video duration.
    pub marker: String,
    pub headline: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSnippet {
    pub subject: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardScene {
    pub scene: String,
    pub setting: String,
    pub script: String,
}
