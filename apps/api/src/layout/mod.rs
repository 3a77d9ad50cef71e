// Story-card layout system.
// Implements: static font metrics, greedy word-wrap with injected measurer,
// card composition planning, SVG serialization. Everything here is pure; no
// rendering surface is touched.

pub mod card;
pub mod font_metrics;
pub mod svg;
pub mod wrap;

// Re-export the public API consumed by handlers and state.
pub use card::{plan_story_card, CardConfig, CardPlan};
pub use font_metrics::{measurer, FontStyle};
pub use svg::render_svg;
pub use wrap::{wrap_text, MAX_STORY_LINES};
