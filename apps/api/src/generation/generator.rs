//! The content generator — `ProductBlueprint → AiContent`.
//!
//! Total, pure, and deterministic: no I/O, no randomness, no failure path.
//! Every field of the output is string templating over the normalized
//! blueprint plus the voice preset table. An all-empty blueprint produces a
//! fully populated result built from placeholder phrases.

use crate::generation::fields::{
    clip, non_empty_or, parse_benefits, parse_differentiators, FALLBACK_AUDIENCE,
    FALLBACK_BENEFIT, FALLBACK_DIFFERENTIATOR, FALLBACK_GUARANTEE, FALLBACK_LINK, FALLBACK_NAME,
    FALLBACK_PRICE,
};
use crate::generation::keywords::derive_tags;
use crate::generation::voice::{voice_preset, VoicePreset};
use crate::models::blueprint::ProductBlueprint;
use crate::models::content::{
    AiContent, Chapter, EmailSnippet, InstagramKit, StoryboardScene, YoutubeKit,
};

/// Hard limit YouTube applies to titles; we clip rather than overflow.
const MAX_TITLE_CHARS: usize = 100;
/// Email subject and preview stay short enough for inbox list views.
const MAX_EMAIL_CHARS: usize = 80;
/// Chapter markers with an implied 45-second cadence. Labels only.
const CHAPTER_MARKERS: [&str; 5] = ["00:00", "00:45", "01:30", "02:15", "03:00"];

/// Blueprint fields after fallback substitution and list parsing. Borrows the
/// blueprint; built once per generation call.
struct Effective<'a> {
    name: &'a str,
    audience: &'a str,
    price: &'a str,
    guarantee: &'a str,
    link: &'a str,
    benefits: Vec<String>,
    differentiators: Vec<String>,
    preset: VoicePreset,
}

impl<'a> Effective<'a> {
    fn from_blueprint(blueprint: &'a ProductBlueprint) -> Self {
        Effective {
            name: non_empty_or(&blueprint.name, FALLBACK_NAME),
            audience: non_empty_or(&blueprint.audience, FALLBACK_AUDIENCE),
            price: non_empty_or(&blueprint.price, FALLBACK_PRICE),
            guarantee: non_empty_or(&blueprint.guarantee, FALLBACK_GUARANTEE),
            link: non_empty_or(&blueprint.link, FALLBACK_LINK),
            benefits: parse_benefits(&blueprint.benefits),
            differentiators: parse_differentiators(&blueprint.differentiator),
            preset: voice_preset(blueprint.voice),
        }
    }

    fn lead_benefit(&self) -> &str {
        self.benefits
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_BENEFIT)
    }

    fn lead_differentiator(&self) -> &str {
        self.differentiators
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_DIFFERENTIATOR)
    }

    /// Up to three caption benefits, with the placeholder standing in when the
    /// blueprint listed none.
    fn caption_benefits(&self) -> Vec<&str> {
        if self.benefits.is_empty() {
            vec![FALLBACK_BENEFIT]
        } else {
            self.benefits.iter().take(3).map(String::as_str).collect()
        }
    }
}

/// Generates the full launch kit from a blueprint snapshot.
pub fn generate(blueprint: &ProductBlueprint) -> AiContent {
    let fx = Effective::from_blueprint(blueprint);
    let t = fx.preset.terminal;

    let headline = format!("{} is live{t}", fx.name);
    let promise = format!(
        "{} for {}, backed by {}{t}",
        fx.lead_benefit(),
        fx.audience,
        fx.guarantee
    );

    AiContent {
        headline,
        promise,
        product_link: blueprint.link.clone(),
        instagram: build_instagram(&fx),
        youtube: build_youtube(&fx),
        email_snippet: build_email(&fx),
        video_storyboard: build_storyboard(&fx),
    }
}

fn build_instagram(fx: &Effective) -> InstagramKit {
    let preset = &fx.preset;
    let t = preset.terminal;

    let mut caption = format!("{} {}{t}\n\n", preset.opener, fx.name);
    for benefit in fx.caption_benefits() {
        caption.push_str(&format!("{} {}\n", preset.benefit_marker, benefit));
    }
    caption.push_str(&format!("\nBacked by {}{t}\n\n", fx.guarantee));
    caption.push_str(&format!(
        "{} yours at {} {}{t}",
        preset.cta_verb, fx.link, preset.urgency
    ));

    let call_to_action = format!(
        "{} the {} offer {}{t}",
        preset.cta_verb, fx.price, preset.urgency
    );

    let posting_tips = vec![
        format!(
            "Post when {} are winding down; evening scrolls convert best.",
            fx.audience
        ),
        "Pin the product link in the first comment so the caption stays clean.".to_string(),
        "Reply to every comment in the first hour to feed the ranking loop.".to_string(),
        format!(
            "Reshare the story card with a countdown sticker to bring {} back on launch day.",
            fx.audience
        ),
    ];

    InstagramKit {
        caption,
        call_to_action,
        posting_tips,
    }
}

fn build_youtube(fx: &Effective) -> YoutubeKit {
    let preset = &fx.preset;
    let t = preset.terminal;

    let title = clip(
        &format!("{}: {}", fx.name, fx.lead_benefit()),
        MAX_TITLE_CHARS,
    );

    let mut description = format!(
        "{} for {}.\n\nWhat you get:\n",
        fx.lead_benefit(),
        fx.audience
    );
    for benefit in fx.caption_benefits() {
        description.push_str(&format!("{} {}\n", preset.benefit_marker, benefit));
    }
    description.push_str(&format!("\nWhy {} is different:\n", fx.name));
    if fx.differentiators.is_empty() {
        description.push_str(&format!("- {FALLBACK_DIFFERENTIATOR}\n"));
    } else {
        for differentiator in &fx.differentiators {
            description.push_str(&format!("- {differentiator}\n"));
        }
    }
    description.push_str(&format!(
        "\n{} it here: {}\nBacked by {}{t}",
        preset.cta_verb, fx.link, fx.guarantee
    ));

    let tags = derive_tags(fx.name, fx.audience, &fx.differentiators);

    let chapters = vec![
        Chapter {
            marker: CHAPTER_MARKERS[0].to_string(),
            headline: "The hook".to_string(),
            details: format!("Why {} keep asking about {}.", fx.audience, fx.name),
        },
        Chapter {
            marker: CHAPTER_MARKERS[1].to_string(),
            headline: "The problem".to_string(),
            details: format!("The manual grind {} replaces.", fx.name),
        },
        Chapter {
            marker: CHAPTER_MARKERS[2].to_string(),
            headline: "The walkthrough".to_string(),
            details: format!("Live demo: {}.", fx.lead_benefit()),
        },
        Chapter {
            marker: CHAPTER_MARKERS[3].to_string(),
            headline: "What makes it different".to_string(),
            details: fx.lead_differentiator().to_string(),
        },
        Chapter {
            marker: CHAPTER_MARKERS[4].to_string(),
            headline: "Offer and next steps".to_string(),
            details: format!("Pricing ({}) and {}.", fx.price, fx.guarantee),
        },
    ];

    let thumbnail_hook = format!("{} with {}{t}", fx.lead_benefit(), fx.name);

    YoutubeKit {
        title,
        description,
        tags,
        chapters,
        thumbnail_hook,
    }
}

fn build_email(fx: &Effective) -> EmailSnippet {
    let t = fx.preset.terminal;
    let subject = clip(
        &format!("{}: {} at {}", fx.preset.email_lead, fx.name, fx.price),
        MAX_EMAIL_CHARS,
    );
    let preview = clip(
        &format!("{}. Backed by {}{t}", fx.lead_benefit(), fx.guarantee),
        MAX_EMAIL_CHARS,
    );
    EmailSnippet { subject, preview }
}

fn build_storyboard(fx: &Effective) -> Vec<StoryboardScene> {
    let preset = &fx.preset;
    let t = preset.terminal;

    vec![
        StoryboardScene {
            scene: "Hook".to_string(),
            setting: "Tight selfie framing, natural light, product in hand.".to_string(),
            script: format!(
                "{} {}{t} If you are {}, keep watching.",
                preset.opener, fx.name, fx.audience
            ),
        },
        StoryboardScene {
            scene: "Problem".to_string(),
            setting: "Overhead desk shot, cluttered screen full of tabs.".to_string(),
            script: format!(
                "Doing this by hand eats your week, and {} know it{t}",
                fx.audience
            ),
        },
        StoryboardScene {
            scene: "Solution".to_string(),
            setting: "Screen recording with quick cuts between features.".to_string(),
            script: format!(
                "{} flips it: {}. {}.",
                fx.name,
                fx.lead_benefit(),
                fx.lead_differentiator()
            ),
        },
        StoryboardScene {
            scene: "CTA".to_string(),
            setting: "Direct to camera, product link overlaid on the lower third.".to_string(),
            script: format!(
                "{} it at {} {}{t} Backed by {}.",
                preset.cta_verb, fx.link, preset.urgency, fx.guarantee
            ),
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blueprint::Voice;

    fn acme_blueprint() -> ProductBlueprint {
        ProductBlueprint {
            name: "Acme".to_string(),
            price: "$10".to_string(),
            benefits: "Save time".to_string(),
            voice: Voice::Momentum,
            ..ProductBlueprint::default()
        }
    }

    // ── determinism & totality ──────────────────────────────────────────────

    #[test]
    fn test_generate_is_deterministic() {
        let blueprint = ProductBlueprint::sample();
        assert_eq!(generate(&blueprint), generate(&blueprint));
    }

    #[test]
    fn test_all_empty_blueprint_is_fully_populated() {
        let content = generate(&ProductBlueprint::default());
        assert!(!content.headline.is_empty());
        assert!(!content.promise.is_empty());
        assert!(!content.instagram.caption.is_empty());
        assert!(!content.instagram.call_to_action.is_empty());
        assert_eq!(content.instagram.posting_tips.len(), 4);
        assert!(!content.youtube.title.is_empty());
        assert!(!content.youtube.description.is_empty());
        assert!(
            !content.youtube.tags.is_empty(),
            "fallback phrases still yield tags"
        );
        assert!(!content.youtube.thumbnail_hook.is_empty());
        assert!(!content.email_snippet.subject.is_empty());
        assert!(!content.email_snippet.preview.is_empty());
        assert_eq!(content.video_storyboard.len(), 4);
    }

    #[test]
    fn test_empty_name_uses_placeholder() {
        let content = generate(&ProductBlueprint::default());
        assert!(
            content.headline.contains("your product"),
            "headline was: {}",
            content.headline
        );
    }

    // ── voice sensitivity ───────────────────────────────────────────────────

    #[test]
    fn test_voice_changes_caption() {
        let mut bold = ProductBlueprint::sample();
        bold.voice = Voice::BoldLaunch;
        let mut luxury = ProductBlueprint::sample();
        luxury.voice = Voice::LuxuryPremium;

        let bold_caption = generate(&bold).instagram.caption;
        let luxury_caption = generate(&luxury).instagram.caption;
        assert_ne!(bold_caption, luxury_caption);
        assert!(bold_caption.contains('!'));
        assert!(
            !luxury_caption.contains('!'),
            "Luxury Premium stays restrained"
        );
    }

    #[test]
    fn test_voice_applies_uniformly() {
        let mut blueprint = ProductBlueprint::sample();
        blueprint.voice = Voice::BoldLaunch;
        let content = generate(&blueprint);
        // The Bold Launch CTA verb shows up in caption, description, and script.
        assert!(content.instagram.caption.contains("Claim"));
        assert!(content.youtube.description.contains("Claim"));
        assert!(content.video_storyboard[3].script.contains("Claim"));
    }

    // ── caption & benefits ──────────────────────────────────────────────────

    #[test]
    fn test_caption_includes_top_three_benefits_only() {
        let mut blueprint = ProductBlueprint::default();
        blueprint.benefits = "One\nTwo\nThree\nFour".to_string();
        let caption = generate(&blueprint).instagram.caption;
        assert!(caption.contains("One"));
        assert!(caption.contains("Three"));
        assert!(!caption.contains("Four"), "caption caps at three benefits");
    }

    #[test]
    fn test_caption_includes_guarantee() {
        let mut blueprint = acme_blueprint();
        blueprint.guarantee = "30-day refund".to_string();
        let caption = generate(&blueprint).instagram.caption;
        assert!(caption.contains("30-day refund"));
    }

    // ── youtube kit ─────────────────────────────────────────────────────────

    #[test]
    fn test_chapters_have_fixed_markers() {
        let content = generate(&acme_blueprint());
        let markers: Vec<&str> = content
            .youtube
            .chapters
            .iter()
            .map(|c| c.marker.as_str())
            .collect();
        assert_eq!(markers, vec!["00:00", "00:45", "01:30", "02:15", "03:00"]);
    }

    #[test]
    fn test_tags_dedup_differentiator_casing() {
        let mut blueprint = ProductBlueprint::default();
        blueprint.differentiator = "Fast,fast,FAST".to_string();
        let tags = generate(&blueprint).youtube.tags;
        assert_eq!(
            tags.iter().filter(|t| t.as_str() == "fast").count(),
            1,
            "tags were: {tags:?}"
        );
    }

    #[test]
    fn test_title_clipped_to_youtube_limit() {
        let mut blueprint = ProductBlueprint::default();
        blueprint.name = "N".repeat(90);
        blueprint.benefits = "B".repeat(90);
        let title = generate(&blueprint).youtube.title;
        assert!(title.chars().count() <= 100);
    }

    // ── email ───────────────────────────────────────────────────────────────

    #[test]
    fn test_email_fields_fit_inbox_preview() {
        let mut blueprint = ProductBlueprint::sample();
        blueprint.price = "the incredible once-in-a-lifetime mega launch bundle \
                           at a price you will not believe"
            .to_string();
        let snippet = generate(&blueprint).email_snippet;
        assert!(snippet.subject.chars().count() <= 80);
        assert!(snippet.preview.chars().count() <= 80);
    }

    #[test]
    fn test_email_uses_price_and_guarantee() {
        let content = generate(&acme_blueprint());
        assert!(content.email_snippet.subject.contains("$10"));
        assert!(content
            .email_snippet
            .preview
            .contains("our launch guarantee"));
    }

    // ── end-to-end scenario ─────────────────────────────────────────────────

    #[test]
    fn test_acme_scenario() {
        let content = generate(&acme_blueprint());
        assert!(
            content.youtube.tags.contains(&"acme".to_string()),
            "tags were: {:?}",
            content.youtube.tags
        );
        assert_eq!(content.video_storyboard.len(), 4);
        for scene in &content.video_storyboard {
            assert!(
                !scene.script.is_empty(),
                "scene {} has empty script",
                scene.scene
            );
            assert!(!scene.setting.is_empty());
        }
        let names: Vec<&str> = content
            .video_storyboard
            .iter()
            .map(|s| s.scene.as_str())
            .collect();
        assert_eq!(names, vec!["Hook", "Problem", "Solution", "CTA"]);
    }

    #[test]
    fn test_product_link_passes_through_raw() {
        let mut blueprint = acme_blueprint();
        blueprint.link = "https://acme.example".to_string();
        assert_eq!(generate(&blueprint).product_link, "https://acme.example");
        // Empty link stays empty on the passthrough field; templates use the
        // placeholder instead.
        let content = generate(&ProductBlueprint::default());
        assert_eq!(content.product_link, "");
        assert!(content.instagram.caption.contains("your product page"));
    }
}
