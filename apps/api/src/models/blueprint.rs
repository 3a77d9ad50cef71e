//! The product blueprint — the user-supplied description every asset is derived from.

use serde::{Deserialize, Serialize};

/// Voice preset selector. Drives phrasing across every generated field.
///
/// The serde names match the values the product form submits, so
/// `"Bold Launch"` on the wire maps to `Voice::BoldLaunch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Momentum,
    #[serde(rename = "Bold Launch")]
    BoldLaunch,
    #[serde(rename = "Friendly Guide")]
    FriendlyGuide,
    #[serde(rename = "Luxury Premium")]
    LuxuryPremium,
}

/// Immutable input snapshot for one generation call.
///
/// Every string field defaults to empty when absent from the request body;
/// the generator substitutes placeholder phrases instead of failing, so an
/// all-empty blueprint is valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductBlueprint {
    pub name: String,
    /// Product URL, passed through unvalidated.
    pub link: String,
    /// Free text, e.g. "$97 launch bundle".
    pub price: String,
    pub audience: String,
    pub voice: Voice,
    /// Newline-separated benefit phrases.
    pub benefits: String,
    /// Comma- or newline-separated differentiator phrases.
    pub differentiator: String,
    pub guarantee: String,
    /// Externally-decoded hero image as a base64 data URL. Never re-encoded;
    /// only its pixel dimensions are read, at the service boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
}

impl ProductBlueprint {
    /// The demo product that seeds a session created without a blueprint.
    pub fn sample() -> Self {
        ProductBlueprint {
            name: "LaunchPad Vision".to_string(),
            link: "https://launchpad.vision".to_string(),
            price: "$97 launch bundle".to_string(),
            audience: "content creators and digital brands".to_string(),
            voice: Voice::Momentum,
            benefits: "Spin up story-driven promos in minutes\n\
                       AI captions dialed for Instagram and YouTube\n\
                       Sync media kits instantly to your team"
                .to_string(),
            differentiator: "Auto adapts to Instagram + YouTube formats,\
                             Canvas-ready thumbnails,\
                             Creator-tested CTA scripts"
                .to_string(),
            guarantee: "battle-tested with 500+ launch campaigns".to_string(),
            image_data_url: None,
        }
    }
}
