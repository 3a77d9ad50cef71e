//! Hero image dimension probing.
//!
//! Blueprints carry the hero image as a base64 data URL. Layout only needs
//! the pixel dimensions, so we decode the header region of the payload and
//! never hold a full decoded bitmap.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageReader;

/// Extracts `(width, height)` from a `data:image/...;base64,` URL.
///
/// Any failure — not a data URL, bad base64, unrecognized image format —
/// yields `None`: the card is simply planned without an image, matching the
/// preview's behavior when an image fails to load.
pub fn probe_dimensions(data_url: &str) -> Option<(u32, u32)> {
    let (header, payload) = data_url.split_once(";base64,")?;
    if !header.starts_with("data:") {
        return None;
    }

    let bytes = match STANDARD.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!("hero image base64 decode failed: {err}");
            return None;
        }
    };

    let reader = match ImageReader::new(Cursor::new(bytes)).with_guessed_format() {
        Ok(reader) => reader,
        Err(err) => {
            tracing::debug!("hero image format sniff failed: {err}");
            return None;
        }
    };

    match reader.into_dimensions() {
        Ok(dims) => Some(dims),
        Err(err) => {
            tracing::debug!("hero image dimension probe failed: {err}");
            None
        }
    }
}
