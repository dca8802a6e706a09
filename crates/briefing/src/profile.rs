use crate::format::MessageStyle;

/// Pipeline knobs that differ between the two run modes
#[derive(Debug, Clone, PartialEq)]
pub struct BriefProfile {
    /// Number of items delivered after the header
    pub top_n: usize,
    /// Character cap for summaries
    pub summary_limit: usize,
    /// Minimum title similarity for keeping a matched summary
    pub match_threshold: Option<f64>,
    /// Shuffle before sorting so equal scores surface in random order
    pub shuffle_ties: bool,
    /// Compress matched summaries to at most two sentences
    pub extractive_summary: bool,
    /// Entries read per feed when collecting candidates
    pub entries_per_feed: usize,
    /// Coverage window shown in the header
    pub lookback_hours: i64,
    pub style: MessageStyle,
    pub war_boost: u32,
}

impl BriefProfile {
    /// Local run with a persisted token file
    pub fn interactive() -> Self {
        Self {
            top_n: 10,
            summary_limit: 140,
            match_threshold: None,
            shuffle_ties: false,
            extractive_summary: false,
            entries_per_feed: 12,
            lookback_hours: 14,
            style: MessageStyle::Compact,
            war_boost: crate::scoring::DEFAULT_WAR_BOOST,
        }
    }

    /// Scheduled run with env-only credentials
    pub fn ci(bilingual: bool) -> Self {
        Self {
            summary_limit: 160,
            match_threshold: Some(0.60),
            shuffle_ties: true,
            extractive_summary: true,
            style: MessageStyle::Annotated { bilingual },
            ..Self::interactive()
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

impl Default for BriefProfile {
    fn default() -> Self {
        Self::interactive()
    }
}
