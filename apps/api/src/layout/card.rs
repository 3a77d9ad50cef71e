//! Story-card layout planning — the 1080×1920 vertical asset composition.
//!
//! A `CardPlan` is pure data: where every element sits, in card pixels.
//! Rendering surfaces (the SVG writer here, or any client-side canvas)
//! consume the plan without re-running layout. The hero image is never
//! decoded here; only its pixel dimensions arrive, for scale-to-fit math.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{measurer, FontStyle};
use crate::layout::wrap::wrap_text;

/// Title shown when the blueprint has no product name.
pub const FALLBACK_TITLE: &str = "Launch Mode";
/// The CTA panel label — fixed copy on every card.
pub const CTA_LABEL: &str = "Tap to claim launch bonus";

/// Geometry and type sizes for one card composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    pub title_size_px: f32,
    pub body_size_px: f32,
    pub cta_size_px: f32,
    /// Vertical advance between wrapped promise lines.
    pub body_line_advance_px: f32,
    /// Fraction of the card width the promise text may occupy.
    pub promise_width_frac: f32,
}

impl Default for CardConfig {
    /// The story format: 1080×1920, bold 52px title, 26px body wrapped at
    /// 70% width with a 32px line advance, 28px CTA.
    fn default() -> Self {
        CardConfig {
            width: 1080.0,
            height: 1920.0,
            title_size_px: 52.0,
            body_size_px: 26.0,
            cta_size_px: 28.0,
            body_line_advance_px: 32.0,
            promise_width_frac: 0.7,
        }
    }
}

/// One centered run of text. `x` is the center, `y` the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub style: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: String,
}

/// Scale-to-fit placement for the hero image. Dimensions preserve the source
/// aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The full card composition, back to front: gradient, optional image, text
/// layer, CTA panel and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPlan {
    pub width: f32,
    pub height: f32,
    pub gradient_from: String,
    pub gradient_to: String,
    pub title: TextBlock,
    pub promise_lines: Vec<TextBlock>,
    pub image: Option<ImagePlacement>,
    pub cta_panel: RectSpec,
    pub cta: TextBlock,
}

/// Plans the story card for a product name and promise line.
///
/// `image_dims` is the hero image's `(width, height)` in pixels when one was
/// supplied; `None` plans a text-only card, the same fallback the preview
/// uses when image decode fails.
pub fn plan_story_card(
    name: &str,
    promise: &str,
    image_dims: Option<(u32, u32)>,
    config: &CardConfig,
) -> CardPlan {
    let w = config.width;
    let h = config.height;

    let title_text = if name.trim().is_empty() {
        FALLBACK_TITLE
    } else {
        name.trim()
    };
    let title = TextBlock {
        text: title_text.to_string(),
        x: w / 2.0,
        y: h * 0.24,
        size_px: config.title_size_px,
        style: FontStyle::Bold,
    };

    let measure = measurer(FontStyle::Regular, config.body_size_px);
    let promise_lines = wrap_text(promise, w * config.promise_width_frac, measure)
        .into_iter()
        .enumerate()
        .map(|(index, line)| TextBlock {
            text: line,
            x: w / 2.0,
            y: h * 0.42 + index as f32 * config.body_line_advance_px,
            size_px: config.body_size_px,
            style: FontStyle::Regular,
        })
        .collect();

    let image = image_dims.map(|(image_w, image_h)| {
        let scale = ((w * 0.7) / image_w as f32).min((h * 0.4) / image_h as f32);
        let draw_w = image_w as f32 * scale;
        let draw_h = image_h as f32 * scale;
        ImagePlacement {
            x: (w - draw_w) / 2.0,
            y: h * 0.25 - draw_h / 2.0,
            width: draw_w,
            height: draw_h,
        }
    });

    let cta_panel = RectSpec {
        x: w * 0.2,
        y: h * 0.7,
        width: w * 0.6,
        height: 68.0,
        fill: "#0f172a".to_string(),
    };
    let cta = TextBlock {
        text: CTA_LABEL.to_string(),
        x: w / 2.0,
        y: h * 0.7 + 44.0,
        size_px: config.cta_size_px,
        style: FontStyle::Bold,
    };

    CardPlan {
        width: w,
        height: h,
        gradient_from: "#6d28d9".to_string(),
        gradient_to: "#ec4899".to_string(),
        title,
        promise_lines,
        image,
        cta_panel,
        cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::wrap::MAX_STORY_LINES;

    fn plan(name: &str, promise: &str, dims: Option<(u32, u32)>) -> CardPlan {
        plan_story_card(name, promise, dims, &CardConfig::default())
    }

    #[test]
    fn test_empty_name_falls_back_to_launch_mode() {
        let card = plan("", "A promise.", None);
        assert_eq!(card.title.text, "Launch Mode");
    }

    #[test]
    fn test_title_is_bold_and_centered() {
        let card = plan("Acme", "A promise.", None);
        assert_eq!(card.title.style, FontStyle::Bold);
        assert!((card.title.x - 540.0).abs() < 1e-3);
        assert!((card.title.y - 1920.0 * 0.24).abs() < 1e-3);
    }

    #[test]
    fn test_promise_lines_advance_by_32px() {
        let long_promise =
            "Spin up story-driven promos in minutes for content creators and digital brands \
             everywhere who want launch assets without the busywork";
        let card = plan("Acme", long_promise, None);
        assert!(card.promise_lines.len() >= 2);
        assert!(card.promise_lines.len() <= MAX_STORY_LINES);
        let y0 = card.promise_lines[0].y;
        let y1 = card.promise_lines[1].y;
        assert!((y1 - y0 - 32.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_image_plans_text_only_card() {
        let card = plan("Acme", "A promise.", None);
        assert!(card.image.is_none());
    }

    #[test]
    fn test_wide_image_scales_to_fit_width() {
        // 2000×500 source: width is the binding constraint (1080*0.7 = 756).
        let card = plan("Acme", "A promise.", Some((2000, 500)));
        let image = card.image.unwrap();
        assert!((image.width - 756.0).abs() < 1e-2);
        assert!((image.height - 189.0).abs() < 1e-2, "aspect preserved");
        assert!((image.x - (1080.0 - 756.0) / 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_tall_image_scales_to_fit_height() {
        // 500×2000 source: height binds (1920*0.4 = 768).
        let card = plan("Acme", "A promise.", Some((500, 2000)));
        let image = card.image.unwrap();
        assert!((image.height - 768.0).abs() < 1e-2);
        assert!((image.width - 192.0).abs() < 1e-2);
        // Centered vertically on 25% of card height.
        assert!((image.y - (1920.0 * 0.25 - 768.0 / 2.0)).abs() < 1e-2);
    }

    #[test]
    fn test_cta_panel_geometry() {
        let card = plan("Acme", "A promise.", None);
        assert!((card.cta_panel.x - 216.0).abs() < 1e-3);
        assert!((card.cta_panel.y - 1344.0).abs() < 1e-3);
        assert!((card.cta_panel.width - 648.0).abs() < 1e-3);
        assert_eq!(card.cta_panel.height, 68.0);
        assert_eq!(card.cta.text, CTA_LABEL);
        assert!((card.cta.y - (1344.0 + 44.0)).abs() < 1e-3);
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let card = plan("Acme", "A promise.", None);
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("gradientFrom").is_some());
        assert!(json.get("promiseLines").is_some());
        assert!(json.get("ctaPanel").is_some());
    }
}
