//! Match a selected headline back to the richest entry of its section.

use regex::Regex;
use rss::FeedEntry;
use std::sync::LazyLock;
use similar::TextDiff;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&nbsp;?").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const ELLIPSIS: &str = "...";

/// Strip HTML, collapse whitespace and cap at `limit` characters.
///
/// Truncated text ends in `...` and is exactly `limit` characters long.
pub fn clean_summary(raw: &str, limit: usize) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = HTML_TAG.replace_all(raw, "");
    let text = NBSP.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Character alignment ratio `2·M / (|a| + |b|)` in `[0, 1]`, 1.0 for equal strings
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Summary and link taken from the best-matching entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchedSummary {
    pub summary: String,
    pub link: String,
    /// Similarity of the chosen entry, 0.0 when nothing matched
    pub ratio: f64,
}

#[derive(Debug, Clone)]
pub struct SummaryMatcher {
    summary_limit: usize,
    threshold: Option<f64>,
}

impl SummaryMatcher {
    pub fn new(summary_limit: usize, threshold: Option<f64>) -> Self {
        Self {
            summary_limit,
            threshold,
        }
    }

    /// Find the entry whose title is most similar to `title`.
    ///
    /// Only a strictly better ratio replaces the current best, so the first
    /// of several equal matches wins and zero-similarity entries never do.
    /// Below the threshold the summary is dropped but the link is kept.
    pub fn best_match(&self, title: &str, entries: &[FeedEntry]) -> MatchedSummary {
        let target = title.to_lowercase();
        let mut best: Option<(&FeedEntry, f64)> = None;

        for entry in entries {
            let ratio = similarity(&target, &entry.title.to_lowercase());
            if ratio > best.map(|(_, r)| r).unwrap_or(0.0) {
                best = Some((entry, ratio));
            }
        }

        let Some((entry, ratio)) = best else {
            return MatchedSummary::default();
        };

        let raw_summary = entry.summary.as_deref().unwrap_or_default();
        let mut summary = clean_summary(raw_summary, self.summary_limit);
        if let Some(threshold) = self.threshold {
            if ratio < threshold {
                tracing::debug!(
                    "Best match for '{}' below threshold ({:.2} < {:.2}), dropping summary",
                    title,
                    ratio,
                    threshold
                );
                summary.clear();
            }
        }

        MatchedSummary {
            summary,
            link: entry.link.clone().unwrap_or_default(),
            ratio,
        }
    }
}
