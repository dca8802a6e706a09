//! Extractive two-sentence summaries.

use regex::Regex;
use std::sync::LazyLock;

use crate::matcher::clean_summary;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

const MAX_SENTENCES: usize = 2;
const DIGIT_BONUS: u32 = 2;
const KEYWORD_CAP: u32 = 3;

/// Split after `.`, `!` or `?` followed by whitespace, keeping the punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        // the punctuation is a single ASCII byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

fn sentence_score(sentence: &str, keywords: &[(&str, u32)]) -> u32 {
    let mut score = 0;
    if sentence.chars().any(|c| c.is_numeric()) {
        score += DIGIT_BONUS;
    }
    let lower = sentence.to_lowercase();
    for (keyword, weight) in keywords {
        if lower.contains(keyword) {
            score += KEYWORD_CAP.min(weight / 4);
        }
    }
    score
}

/// Pick up to two high-scoring sentences that fit in `limit` characters.
///
/// Picks are joined in score order, not in their original order. If no
/// sentence fits, the raw text is cut to `limit` instead.
pub fn extractive_summary(summary: &str, limit: usize, keywords: &[(&str, u32)]) -> String {
    let mut ranked: Vec<(&str, u32)> = split_sentences(summary)
        .into_iter()
        .map(|s| (s, sentence_score(s, keywords)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut picked: Vec<&str> = Vec::new();
    for (sentence, _) in ranked {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let joined_len = picked.join(" ").chars().count() + 1 + sentence.chars().count();
        if joined_len > limit {
            break;
        }
        picked.push(sentence);
        if picked.len() >= MAX_SENTENCES {
            break;
        }
    }

    let text = if picked.is_empty() {
        summary.chars().take(limit).collect()
    } else {
        picked.join(" ")
    };
    clean_summary(&text, limit)
}
