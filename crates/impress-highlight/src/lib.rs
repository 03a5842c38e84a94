//! impress-highlight: search-term highlighting for result lists.
//!
//! Takes a block of text and a space-separated highlight phrase, crops long
//! text down to the regions around the matched terms, and splits it into
//! segments tagged as plain or matched. Rendering the segments (bold spans,
//! `<mark>` tags, terminal styling) is left to the caller.
//!
//! # Example
//! ```
//! use impress_highlight::highlight_segments;
//!
//! let segments = highlight_segments("The quick brown fox", "quick", false);
//! let matched: Vec<_> = segments.iter().filter(|s| s.matched).collect();
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].content, "quick");
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod crop;
pub mod error;
pub mod highlight;
pub mod matching;
pub mod segment;

pub use config::*;
pub use crop::*;
pub use error::*;
pub use highlight::*;
pub use matching::*;
pub use segment::*;
