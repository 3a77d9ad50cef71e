// Launch session layer.
// A session pairs a blueprint with the content generated from it, held in
// memory for the lifetime of the process. Handlers here cover the session
// lifecycle plus the per-session export surfaces.

pub mod handlers;
pub mod hero_image;
pub mod store;
