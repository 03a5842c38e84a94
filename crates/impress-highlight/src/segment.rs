//! Highlight segment type and markup rendering.

use serde::{Deserialize, Serialize};

/// A contiguous piece of output text, tagged matched or plain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Segment {
    pub content: String,
    pub matched: bool,
}

impl Segment {
    /// Segment rendered without emphasis.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            matched: false,
        }
    }

    /// Segment matching a highlight term.
    pub fn matched(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            matched: true,
        }
    }
}

/// Wrap matched segments in `open`/`close` markers and join everything back
/// into a single string.
///
/// # Examples
/// ```
/// use impress_highlight::{render_markup, Segment};
/// let segments = vec![Segment::plain("a "), Segment::matched("cat")];
/// assert_eq!(render_markup(&segments, "<b>", "</b>"), "a <b>cat</b>");
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn render_markup(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.matched {
            out.push_str(open);
            out.push_str(&segment.content);
            out.push_str(close);
        } else {
            out.push_str(&segment.content);
        }
    }
    out
}
