use serde::{Deserialize, Serialize};

/// A single `<item>` (RSS) or `<entry>` (Atom) of a feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Headline text, empty when the feed omitted it
    pub title: String,
    /// Raw description/summary, may contain HTML
    pub summary: Option<String>,
    /// Canonical article URL
    pub link: Option<String>,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
