//! Highlight phrase compilation and text segmentation.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::{crop_around_matches_with, HighlightConfig, Result, Segment};

lazy_static! {
    /// Characters stripped out of highlight phrases before matching
    static ref UNSUPPORTED_CHARS_RE: Regex =
        Regex::new(r"[°§%()\[\]{}\\?´`'#|;:+\-]+").unwrap();
}

/// Split `text` into plain and matched segments for `phrase`.
///
/// Unless `use_original_text` is set the text is cropped first (see
/// [`crate::crop_around_matches`]). An empty phrase yields the whole text as
/// one plain segment.
///
/// # Examples
/// ```
/// use impress_highlight::{highlight_segments, Segment};
/// let segments = highlight_segments("a Cat sat", "cat", true);
/// assert_eq!(
///     segments,
///     vec![Segment::plain("a "), Segment::matched("Cat"), Segment::plain(" sat")]
/// );
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn highlight_segments(text: &str, phrase: &str, use_original_text: bool) -> Vec<Segment> {
    highlight_segments_with(text, phrase, use_original_text, &HighlightConfig::default())
}

/// [`highlight_segments`] with an explicit configuration.
pub fn highlight_segments_with(
    text: &str,
    phrase: &str,
    use_original_text: bool,
    config: &HighlightConfig,
) -> Vec<Segment> {
    if phrase.is_empty() {
        return vec![Segment::plain(text)];
    }

    let searched = if use_original_text {
        text.to_string()
    } else {
        crop_around_matches_with(text, phrase, config)
    };

    match compile_phrase(phrase, config) {
        Ok(re) => split_segments(&searched, &re),
        Err(e) => {
            tracing::warn!("Highlighting disabled for phrase {:?}: {}", phrase, e);
            vec![Segment::plain(searched)]
        }
    }
}

/// Replace every run of unsupported characters in `phrase` with the sentinel.
///
/// # Examples
/// ```
/// use impress_highlight::sanitize_phrase;
/// assert_eq!(sanitize_phrase("f(x) y", "none"), "fnonexnone y");
/// ```
pub fn sanitize_phrase(phrase: &str, sentinel: &str) -> String {
    UNSUPPORTED_CHARS_RE
        .replace_all(phrase, regex::NoExpand(sentinel))
        .into_owned()
}

/// Lowercased terms of a sanitized phrase; empty terms become the sentinel.
pub fn phrase_terms(phrase: &str, config: &HighlightConfig) -> Vec<String> {
    sanitize_phrase(phrase, &config.sentinel)
        .split(' ')
        .map(|term| {
            if term.is_empty() {
                config.sentinel.to_lowercase()
            } else {
                term.to_lowercase()
            }
        })
        .collect()
}

/// Compile the case-insensitive alternation of a phrase's terms.
pub fn compile_phrase(phrase: &str, config: &HighlightConfig) -> Result<Regex> {
    let alternation = phrase_terms(phrase, config)
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Ok(RegexBuilder::new(&alternation).case_insensitive(true).build()?)
}

/// Partition `text` on matches of `re`, keeping matches as their own
/// segments. Empty pieces are dropped, so the segments concatenate back to
/// `text`.
fn split_segments(text: &str, re: &Regex) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        if !m.as_str().is_empty() {
            segments.push(Segment::matched(m.as_str()));
        }
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.content.as_str()).collect()
    }

    fn matched(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.content.as_str())
            .collect()
    }

    #[test]
    fn empty_phrase_single_plain_segment() {
        let text = "anything at all";
        assert_eq!(highlight_segments(text, "", false), vec![Segment::plain(text)]);
        assert_eq!(highlight_segments("", "", true), vec![Segment::plain("")]);
    }

    #[test]
    fn single_term_preserves_case() {
        let segments = highlight_segments("The QUICK brown fox", "quick", false);
        assert_eq!(matched(&segments), vec!["QUICK"]);
        assert_eq!(joined(&segments), "The QUICK brown fox");
    }

    #[test]
    fn multiple_terms_and_occurrences() {
        let segments = highlight_segments("fox and dog and Fox", "fox dog", true);
        assert_eq!(matched(&segments), vec!["fox", "dog", "Fox"]);
        assert_eq!(segments.len(), 5);
    }

    #[test]
    fn matches_inside_words() {
        let segments = highlight_segments("concatenate", "cat", true);
        assert_eq!(
            segments,
            vec![
                Segment::plain("con"),
                Segment::matched("cat"),
                Segment::plain("enate"),
            ]
        );
    }

    #[test]
    fn match_at_start_has_no_empty_segment() {
        let segments = highlight_segments("fox", "fox", true);
        assert_eq!(segments, vec![Segment::matched("fox")]);
    }

    #[test]
    fn sanitized_phrase_matches_nothing() {
        let text = "call f(x) with [brackets] and {braces}";
        let segments = highlight_segments(text, "()[]", true);
        assert!(matched(&segments).is_empty());
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn sanitize_replaces_runs() {
        assert_eq!(sanitize_phrase("a+-b", "X"), "aXb");
        assert_eq!(sanitize_phrase("it's", "X"), "itXs");
        assert_eq!(sanitize_phrase("50%", "X"), "50X");
        assert_eq!(sanitize_phrase("plain words", "X"), "plain words");
    }

    #[test]
    fn empty_terms_become_sentinel() {
        let config = HighlightConfig::default();
        assert_eq!(
            phrase_terms("Fox  Dog", &config),
            vec!["fox", "highlightnotdefined", "dog"]
        );
    }

    #[test]
    fn unsanitized_metacharacters_are_literal() {
        let segments = highlight_segments("a.b axb", "a.b", true);
        assert_eq!(matched(&segments), vec!["a.b"]);

        let segments = highlight_segments("2*3 = 6", "2*3", true);
        assert_eq!(matched(&segments), vec!["2*3"]);
    }

    #[test]
    fn original_text_is_not_cropped() {
        let text = format!("{}needle", "word ".repeat(200));
        let segments = highlight_segments(&text, "needle", true);
        assert_eq!(joined(&segments), text);
        assert_eq!(matched(&segments), vec!["needle"]);
    }

    #[test]
    fn long_text_is_cropped_before_splitting() {
        let text = format!("{}needle {}", "lorem ".repeat(100), "ipsum ".repeat(60));
        let segments = highlight_segments(&text, "needle", false);
        let searched = joined(&segments);
        assert_eq!(searched, crate::crop_around_matches(&text, "needle"));
        assert_eq!(matched(&segments), vec!["needle"]);
    }
}
