//! Headline cleanup and per-section deduplication

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Bracketed tags such as [속보], [단독], [BREAKING]
static BRACKET_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs and trim.
pub fn clean_title(raw: &str) -> String {
    WHITESPACE.replace_all(raw, " ").trim().to_string()
}

/// Canonical form used for scoring and deduplication.
///
/// Examples:
/// - "[속보] 연준,  금리 동결" -> "연준, 금리 동결"
/// - "  Fed [BREAKING] holds " -> "Fed holds"
pub fn normalize_title(raw: &str) -> String {
    let stripped = BRACKET_TAG.replace_all(raw.trim(), "");
    clean_title(&stripped)
}

/// Keep the first occurrence of every case-folded title, in input order.
pub fn dedup_titles<I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|title| seen.insert(title.to_lowercase()))
        .collect()
}

/// Normalize raw feed titles for one section, dropping empties and duplicates.
pub fn section_candidates<'a, I>(raw_titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    dedup_titles(
        raw_titles
            .into_iter()
            .map(clean_title)
            .filter(|title| !title.is_empty())
            .map(|title| normalize_title(&title))
            .filter(|title| !title.is_empty()),
    )
}
