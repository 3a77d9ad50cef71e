//! Greedy word-wrap for the story card's promise text.

/// Lines beyond this are silently dropped — the card only has room for four,
/// and overflowing text is cut rather than surfaced as an error. Deliberate
/// product behavior, not a bug; testers should expect truncation.
pub const MAX_STORY_LINES: usize = 4;

/// Wraps `text` into lines no wider than `max_width`, measured by the
/// injected `measure` function (width of a rendered line, same units as
/// `max_width`).
///
/// Greedy line-fill: tokens come from splitting on single spaces; each token
/// is tentatively appended (with one separating space) and the candidate
/// line measured. When the candidate overflows and the buffer is non-empty,
/// the buffer is committed and the token starts a new line. A single token
/// wider than `max_width` still lands alone on its own line — there is no
/// character-level splitting. Empty input yields no lines. The result is
/// capped at [`MAX_STORY_LINES`].
pub fn wrap_text<M>(text: &str, max_width: f32, measure: M) -> Vec<String>
where
    M: Fn(&str) -> f32,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(MAX_STORY_LINES);
    lines
}
