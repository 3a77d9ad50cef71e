pub mod blueprint;
pub mod content;
