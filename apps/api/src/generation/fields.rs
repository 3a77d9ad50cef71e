//! Blueprint field normalization — list parsing, placeholder fallbacks, and
//! character-safe clipping.
//!
//! The generator is a total function: every helper here returns something
//! usable for any input, including the all-empty blueprint.

/// Placeholder substituted when `name` is empty.
pub const FALLBACK_NAME: &str = "your product";
/// Placeholder substituted when `audience` is empty.
pub const FALLBACK_AUDIENCE: &str = "your audience";
pub const FALLBACK_PRICE: &str = "launch pricing";
pub const FALLBACK_GUARANTEE: &str = "our launch guarantee";
pub const FALLBACK_LINK: &str = "your product page";
pub const FALLBACK_BENEFIT: &str = "a faster way to launch";
pub const FALLBACK_DIFFERENTIATOR: &str = "built for modern launches";

/// Splits the benefits field into trimmed, non-empty lines, in input order.
pub fn parse_benefits(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits the differentiator field on commas AND newlines, trimmed and
/// non-empty, in input order.
pub fn parse_differentiators(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the trimmed value, or the fallback when the value is blank.
pub fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Clips a string to at most `max_chars` characters, ending in an ellipsis
/// when anything was cut. Counts chars, not bytes, so multibyte input never
/// splits a character.
pub fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut clipped: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_benefits ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_benefits_drops_blank_lines() {
        let parsed = parse_benefits("A\nB\n\nC");
        assert_eq!(parsed, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_benefits_trims_whitespace() {
        let parsed = parse_benefits("  Save time  \n\t Ship faster ");
        assert_eq!(parsed, vec!["Save time", "Ship faster"]);
    }

    #[test]
    fn test_parse_benefits_empty_input() {
        assert!(parse_benefits("").is_empty());
        assert!(parse_benefits("\n\n").is_empty());
    }

    // ── parse_differentiators ───────────────────────────────────────────────

    #[test]
    fn test_parse_differentiators_splits_commas_and_newlines() {
        let parsed = parse_differentiators("Fast setup,No code\nCreator-tested");
        assert_eq!(parsed, vec!["Fast setup", "No code", "Creator-tested"]);
    }

    #[test]
    fn test_parse_differentiators_drops_empty_segments() {
        let parsed = parse_differentiators(",one,,two,\n");
        assert_eq!(parsed, vec!["one", "two"]);
    }

    // ── non_empty_or ────────────────────────────────────────────────────────

    #[test]
    fn test_non_empty_or_prefers_value() {
        assert_eq!(non_empty_or("Acme", FALLBACK_NAME), "Acme");
    }

    #[test]
    fn test_non_empty_or_falls_back_on_blank() {
        assert_eq!(non_empty_or("", FALLBACK_NAME), "your product");
        assert_eq!(non_empty_or("   ", FALLBACK_AUDIENCE), "your audience");
    }

    // ── clip ────────────────────────────────────────────────────────────────

    #[test]
    fn test_clip_short_string_untouched() {
        assert_eq!(clip("hello", 80), "hello");
    }

    #[test]
    fn test_clip_enforces_char_limit() {
        let long = "x".repeat(100);
        let clipped = clip(&long, 80);
        assert_eq!(clipped.chars().count(), 80);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_clip_is_char_boundary_safe() {
        let multibyte = "émoji café ".repeat(20);
        let clipped = clip(&multibyte, 40);
        assert_eq!(clipped.chars().count(), 40);
    }
}
