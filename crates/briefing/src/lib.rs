//! Ranked morning news briefing.
//!
//! Headlines from per-section feeds are normalized, deduplicated, scored
//! against a keyword-weight model and the global top N are matched back to
//! their feed entries for a short summary and link.
//!
//! # Example
//!
//! ```
//! use briefing::{Scorer, normalize_title};
//!
//! let scorer = Scorer::default();
//! let title = normalize_title("[속보] 연준  금리 동결");
//!
//! assert_eq!(title, "연준 금리 동결");
//! assert_eq!(scorer.score(&title), 21);
//! assert_eq!(scorer.score("Missile strike near port"), 400);
//! ```

pub mod format;
pub mod matcher;
pub mod normalize;
mod pipeline;
mod profile;
pub mod scoring;
mod section;
pub mod select;
pub mod summarize;

pub use format::{format_header, format_item, safe_cut, BriefItem, MessageStyle, MAX_MESSAGE_BYTES};
pub use matcher::{MatchedSummary, SummaryMatcher};
pub use normalize::{dedup_titles, normalize_title};
pub use pipeline::{Brief, BriefBuilder, FeedSources};
pub use profile::BriefProfile;
pub use scoring::Scorer;
pub use section::Section;
pub use select::{select_top, ScoredCandidate};
