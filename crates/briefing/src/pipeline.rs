use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rss::{FeedEntry, FeedFetcher};
use translate::Translator;

use crate::format::{format_header, format_item, BriefItem, MessageStyle};
use crate::matcher::SummaryMatcher;
use crate::normalize::section_candidates;
use crate::profile::BriefProfile;
use crate::scoring::Scorer;
use crate::section::Section;
use crate::select::{score_candidates, select_top, ScoredCandidate};
use crate::summarize::extractive_summary;

/// Section → ordered feed URLs
pub type FeedSources = BTreeMap<Section, Vec<String>>;

/// Header plus the ranked items of one run
#[derive(Debug, Clone)]
pub struct Brief {
    pub header: String,
    pub items: Vec<BriefItem>,
    pub style: MessageStyle,
}

impl Brief {
    /// Item messages, numbered from 1
    pub fn item_messages(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format_item(item, Some(i + 1), self.style))
            .collect()
    }
}

/// Runs the collect → score → select → enrich pipeline over a feed fetcher
pub struct BriefBuilder<F> {
    fetcher: F,
    sources: FeedSources,
    profile: BriefProfile,
    scorer: Scorer,
    matcher: SummaryMatcher,
    translator: Translator,
    rng: StdRng,
}

impl<F: FeedFetcher> BriefBuilder<F> {
    pub fn new(
        fetcher: F,
        sources: FeedSources,
        profile: BriefProfile,
        translator: Translator,
    ) -> Self {
        let scorer = Scorer::new(profile.war_boost);
        let matcher = SummaryMatcher::new(profile.summary_limit, profile.match_threshold);
        Self {
            fetcher,
            sources,
            profile,
            scorer,
            matcher,
            translator,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the tie-break random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Build the header and items for a run happening at `now`
    pub async fn build(&mut self, now: DateTime<FixedOffset>) -> Brief {
        let candidates = self.collect_candidates().await;
        let selected = self.rank(&candidates);
        tracing::info!("Selected {} items", selected.len());

        let mut items = Vec::with_capacity(selected.len());
        for candidate in &selected {
            items.push(self.enrich(candidate).await);
        }

        Brief {
            header: format_header(
                now,
                Duration::hours(self.profile.lookback_hours),
                self.profile.top_n,
            ),
            items,
            style: self.profile.style,
        }
    }

    /// Normalized, per-section deduplicated titles from the first entries of every feed
    pub async fn collect_candidates(&self) -> BTreeMap<Section, Vec<String>> {
        let mut candidates = BTreeMap::new();

        for (section, urls) in &self.sources {
            let mut raw_titles = Vec::new();
            for url in urls {
                let entries = self.fetch_or_empty(url).await;
                raw_titles.extend(
                    entries
                        .into_iter()
                        .take(self.profile.entries_per_feed)
                        .map(|entry| entry.title),
                );
            }

            let titles = section_candidates(raw_titles.iter().map(String::as_str));
            tracing::debug!("Section {}: {} unique candidates", section, titles.len());
            candidates.insert(*section, titles);
        }

        candidates
    }

    /// Score all candidates and keep the global top N
    pub fn rank(&mut self, candidates: &BTreeMap<Section, Vec<String>>) -> Vec<ScoredCandidate> {
        let scored = score_candidates(candidates, &self.scorer);
        let shuffle = if self.profile.shuffle_ties {
            Some(&mut self.rng)
        } else {
            None
        };
        select_top(scored, self.profile.top_n, shuffle)
    }

    /// Attach summary, link and translation to a selected headline.
    ///
    /// The section's feeds are fetched again in full; nothing is cached from
    /// the candidate pass.
    pub async fn enrich(&self, candidate: &ScoredCandidate) -> BriefItem {
        let mut entries = Vec::new();
        if let Some(urls) = self.sources.get(&candidate.section) {
            for url in urls {
                entries.extend(self.fetch_or_empty(url).await);
            }
        }

        let matched = self.matcher.best_match(&candidate.title, &entries);
        tracing::debug!(
            "Matched '{}' with ratio {:.2}",
            candidate.title,
            matched.ratio
        );

        let summary = if self.profile.extractive_summary {
            extractive_summary(
                &matched.summary,
                self.profile.summary_limit,
                self.scorer.keywords(),
            )
        } else {
            matched.summary.clone()
        };

        let translation = self
            .translator
            .translate(&candidate.title, &matched.summary)
            .await;

        BriefItem {
            tag: candidate.section.label().to_string(),
            title: candidate.title.clone(),
            summary,
            link: matched.link,
            translation,
        }
    }

    async fn fetch_or_empty(&self, url: &str) -> Vec<FeedEntry> {
        match self.fetcher.fetch(url).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to fetch feed {}: {}", url, e);
                Vec::new()
            }
        }
    }
}
