// Content generation engine.
// Implements: blueprint normalization, voice calibration, keyword tags, and
// the pure generate() pipeline. Nothing here performs I/O — handlers own the
// async boundary.

pub mod fields;
pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod voice;

pub use generator::generate;
