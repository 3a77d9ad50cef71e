//! Keyword tags for the YouTube kit — tokenized from name, audience, and
//! differentiators, lowercased and deduplicated case-insensitively.

use std::collections::HashSet;

/// Filler words that never make useful tags.
const STOPWORDS: &[&str] = &[
    "and", "the", "for", "with", "your", "from", "that", "this", "into", "are", "you",
];

const MIN_TOKEN_LEN: usize = 3;
const MAX_TAGS: usize = 15;

/// Derives the ordered tag list. First occurrence wins; later duplicates
/// (any casing) are dropped. Capped at 15 tags — YouTube stops reading long
/// before that anyway.
pub fn derive_tags(name: &str, audience: &str, differentiators: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tags: Vec<String> = Vec::new();

    let sources = std::iter::once(name)
        .chain(std::iter::once(audience))
        .chain(differentiators.iter().map(String::as_str));

    for source in sources {
        for token in tokenize(source) {
            if tags.len() >= MAX_TAGS {
                return tags;
            }
            if seen.insert(token.clone()) {
                tags.push(token);
            }
        }
    }
    tags
}

/// Lowercase alphanumeric tokens of a phrase, short tokens and stopwords
/// removed.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
}
