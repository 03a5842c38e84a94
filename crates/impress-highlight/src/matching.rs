//! Term lookup: case-insensitive containment and whole-word search.

use regex::RegexBuilder;

/// Check whether any term occurs in `text`, ignoring case.
///
/// Plain substring search: `"cat"` is found inside `"concatenate"`. An empty
/// term is contained in every text; an empty term list in none.
///
/// # Examples
/// ```
/// use impress_highlight::contains_any;
/// assert!(contains_any(&["Fox"], "the quick brown fox"));
/// assert!(!contains_any::<&str>(&[], "the quick brown fox"));
/// ```
pub fn contains_any<S: AsRef<str>>(terms: &[S], text: &str) -> bool {
    let text_lower = text.to_lowercase();
    terms
        .iter()
        .any(|term| text_lower.contains(&term.as_ref().to_lowercase()))
}

/// Character index of the first case-insensitive whole-word occurrence of
/// `word` in `text`.
///
/// The word is escaped before matching, so regex metacharacters in it are
/// taken literally.
///
/// # Examples
/// ```
/// use impress_highlight::find_whole_word;
/// assert_eq!(find_whole_word("cat", "a cat sat"), Some(2));
/// assert_eq!(find_whole_word("cat", "concatenate"), None);
/// ```
pub fn find_whole_word(word: &str, text: &str) -> Option<usize> {
    let pattern = format!(r"\b{}\b", regex::escape(word));
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Failed to compile whole-word pattern for {:?}: {}", word, e);
            return None;
        }
    };
    let m = re.find(text)?;
    Some(text[..m.start()].chars().count())
}

/// FFI-friendly wrapper over [`contains_any`].
#[cfg(feature = "native")]
#[uniffi::export]
pub fn text_contains_any(terms: Vec<String>, text: &str) -> bool {
    contains_any(&terms, text)
}
