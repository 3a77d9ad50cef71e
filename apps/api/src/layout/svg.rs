//! SVG serialization of a planned story card.
//!
//! The service-side stand-in for the browser's canvas-to-PNG download: same
//! composition, vector output, no raster encoding.

use std::fmt::Write;

use crate::layout::card::{CardPlan, TextBlock};
use crate::layout::font_metrics::FontStyle;

/// Renders a card plan as a standalone SVG document.
///
/// `image_href` is the hero image's data URL, embedded verbatim when the plan
/// includes an image placement. The bytes are never inspected here.
pub fn render_svg(plan: &CardPlan, image_href: Option<&str>) -> String {
    let mut svg = String::with_capacity(2048);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = plan.width,
        h = plan.height
    );

    // Background gradient, top-left to bottom-right like the canvas version.
    let _ = write!(
        svg,
        r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="{w}" y2="{h}" gradientUnits="userSpaceOnUse"><stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/></linearGradient></defs>"##,
        w = plan.width,
        h = plan.height,
        from = xml_escape(&plan.gradient_from),
        to = xml_escape(&plan.gradient_to)
    );
    let _ = write!(
        svg,
        r##"<rect x="0" y="0" width="{}" height="{}" fill="url(#bg)"/>"##,
        plan.width, plan.height
    );

    if let (Some(image), Some(href)) = (&plan.image, image_href) {
        let _ = write!(
            svg,
            r#"<image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
            image.x,
            image.y,
            image.width,
            image.height,
            xml_escape(href)
        );
    }

    push_text(&mut svg, &plan.title, "#ffffff", Some(0.85));
    for line in &plan.promise_lines {
        push_text(&mut svg, line, "#ffffff", Some(0.85));
    }

    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        plan.cta_panel.x,
        plan.cta_panel.y,
        plan.cta_panel.width,
        plan.cta_panel.height,
        xml_escape(&plan.cta_panel.fill)
    );
    push_text(&mut svg, &plan.cta, "#f8fafc", None);

    svg.push_str("</svg>");
    svg
}

fn push_text(svg: &mut String, block: &TextBlock, fill: &str, opacity: Option<f32>) {
    let weight = match block.style {
        FontStyle::Regular => "normal",
        FontStyle::Bold => "bold",
    };
    let opacity_attr = opacity
        .map(|o| format!(r#" fill-opacity="{o}""#))
        .unwrap_or_default();
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="Inter, sans-serif" font-size="{}" font-weight="{}" fill="{}"{} text-anchor="middle">{}</text>"#,
        block.x,
        block.y,
        block.size_px,
        weight,
        fill,
        opacity_attr,
        xml_escape(&block.text)
    );
}

fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
