//! Snippet cropping around highlight terms.
//!
//! Long text is cut down to a bounded window before it is segmented. When a
//! term already shows up near the start, the head of the text is kept.
//! Otherwise the result is a short lead-in followed by a small window around
//! each term's first whole-word occurrence, filled up with text from the
//! running cursor until the budget is used.
//!
//! The windowing is a heuristic. Overlapping windows, terms that never occur
//! and terms listed out of order are not corrected for.

use crate::{contains_any, find_whole_word, HighlightConfig};

/// Crop `text` around the terms of `phrase` using the default budget.
///
/// # Examples
/// ```
/// use impress_highlight::crop_around_matches;
/// let text = "short text mentioning rust";
/// assert_eq!(crop_around_matches(text, "rust"), text);
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn crop_around_matches(text: &str, phrase: &str) -> String {
    crop_around_matches_with(text, phrase, &HighlightConfig::default())
}

/// Crop `text` around the terms of `phrase` with an explicit configuration.
pub fn crop_around_matches_with(text: &str, phrase: &str, config: &HighlightConfig) -> String {
    let chars: Vec<char> = text.chars().collect();
    let terms: Vec<&str> = phrase.split(' ').collect();
    let max_length = to_offset(config.max_length);

    let head = slice_chars(&chars, 0, max_length);
    if contains_any(&terms, &head) {
        if chars.len() > config.max_length {
            return format!("{}{}", head, config.ellipsis);
        }
        return text.to_string();
    }

    tracing::debug!(
        "No highlight term in the first {} characters, cropping around {} term(s)",
        config.max_length,
        terms.len()
    );

    let padding = to_offset(config.context_padding);
    let mut cursor = to_offset(config.default_crop_length);
    let mut cropped = slice_chars(&chars, 0, cursor);
    cropped.push_str(&config.ellipsis);

    for term in &terms {
        let term_len = to_offset(term.chars().count());
        let position = find_whole_word(term, text).map_or(-1, to_offset);

        // Offsets saturate so oversized budgets cannot overflow
        let window_end = position.saturating_add(padding).saturating_add(term_len);
        let past_cursor = position.saturating_sub(padding) > cursor;
        let (window_start, advance) = if past_cursor {
            (position.saturating_sub(padding), padding.saturating_mul(2))
        } else {
            (position, padding)
        };
        cursor = cursor.saturating_add(term_len).saturating_add(advance);

        cropped.push(' ');
        cropped.push_str(&slice_chars(&chars, window_start, window_end));
        cropped.push_str(&config.ellipsis);
    }

    if cropped.chars().count() < config.max_length {
        cropped.push(' ');
        cropped.push_str(&slice_chars(&chars, cursor, max_length));
    }

    truncate_chars(cropped, config.max_length)
}

fn to_offset(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Characters `start..end` of `chars`. Negative bounds count back from the
/// end, bounds are clamped to the text, and an empty range yields "".
fn slice_chars(chars: &[char], start: isize, end: isize) -> String {
    let len = to_offset(chars.len());
    let clamp = |i: isize| if i < 0 { len.saturating_add(i).max(0) } else { i.min(len) };
    let (start, end) = (clamp(start), clamp(end));
    if start >= end {
        return String::new();
    }
    chars[start as usize..end as usize].iter().collect()
}

fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
    s
}
