//! Voice calibration — maps the blueprint's voice to a fixed phrasing preset.
//!
//! Presets are plain data, not trait objects: the same blueprint must always
//! yield the same content, and every generated field must pull from the same
//! preset so the voice reads uniformly across caption, kit, email, and script.

use crate::models::blueprint::Voice;

/// Phrase fragments calibrated to one voice. All `'static` — the table is the
/// whole tone system.
#[derive(Debug, Clone, Copy)]
pub struct VoicePreset {
    /// Caption/script opener; the product name follows directly.
    pub opener: &'static str,
    /// Prefix for each benefit line in captions and descriptions.
    pub benefit_marker: &'static str,
    /// Imperative verb used in every call to action.
    pub cta_verb: &'static str,
    /// Urgency clause appended to CTAs. Bold Launch pushes hard; Luxury
    /// Premium deliberately does not.
    pub urgency: &'static str,
    /// Sentence terminal: exclamation for the loud voices, period otherwise.
    pub terminal: &'static str,
    /// Lead-in for the email subject line.
    pub email_lead: &'static str,
}

/// Returns the fixed preset for a voice.
pub fn voice_preset(voice: Voice) -> VoicePreset {
    match voice {
        Voice::Momentum => VoicePreset {
            opener: "Launch mode: on. Say hello to",
            benefit_marker: "⚡",
            cta_verb: "Grab",
            urgency: "while launch pricing lasts",
            terminal: "!",
            email_lead: "Your launch window is open",
        },
        Voice::BoldLaunch => VoicePreset {
            opener: "Stop scrolling. This is",
            benefit_marker: "🔥",
            cta_verb: "Claim",
            urgency: "right now, before it sells out",
            terminal: "!",
            email_lead: "Last call",
        },
        Voice::FriendlyGuide => VoicePreset {
            opener: "Hey friends, meet",
            benefit_marker: "✅",
            cta_verb: "Check out",
            urgency: "whenever you're ready, no rush",
            terminal: ".",
            email_lead: "A little something for you",
        },
        Voice::LuxuryPremium => VoicePreset {
            opener: "Introducing",
            benefit_marker: "◆",
            cta_verb: "Reserve",
            urgency: "at your convenience",
            terminal: ".",
            email_lead: "A quiet introduction",
        },
    }
}
