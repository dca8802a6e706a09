use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::Scorer;
use crate::section::Section;

/// A deduplicated headline with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub section: Section,
    pub title: String,
    pub score: u32,
}

/// Score every candidate, flattened in fixed section order and then in
/// discovery order within each section.
pub fn score_candidates(
    candidates: &BTreeMap<Section, Vec<String>>,
    scorer: &Scorer,
) -> Vec<ScoredCandidate> {
    Section::ALL
        .iter()
        .filter_map(|section| candidates.get(section).map(|titles| (*section, titles)))
        .flat_map(|(section, titles)| {
            titles.iter().map(move |title| ScoredCandidate {
                section,
                title: title.clone(),
                score: scorer.score(title),
            })
        })
        .collect()
}

/// Pick the `top_n` highest scores across all sections.
///
/// When `shuffle` is given the sequence is shuffled before the stable sort,
/// which only changes the order among equal scores. Without it the result is
/// fully determined by the input order.
pub fn select_top<R>(
    mut scored: Vec<ScoredCandidate>,
    top_n: usize,
    shuffle: Option<&mut R>,
) -> Vec<ScoredCandidate>
where
    R: Rng + ?Sized,
{
    if let Some(rng) = shuffle {
        scored.shuffle(rng);
    }
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(section: Section, title: &str, score: u32) -> ScoredCandidate {
        ScoredCandidate {
            section,
            title: title.to_string(),
            score,
        }
    }

    #[test]
    fn test_score_candidates_follow_section_order() {
        let mut candidates = BTreeMap::new();
        candidates.insert(Section::Global, vec!["oil up".to_string()]);
        candidates.insert(Section::Korea, vec!["환율 상승".to_string(), "날씨".to_string()]);
        candidates.insert(Section::China, vec![]);

        let scored = score_candidates(&candidates, &Scorer::default());
        let order: Vec<_> = scored.iter().map(|c| (c.section, c.title.as_str())).collect();
        assert_eq!(
            order,
            vec![
                (Section::Korea, "환율 상승"),
                (Section::Korea, "날씨"),
                (Section::Global, "oil up"),
            ]
        );
        assert_eq!(scored[0].score, 9 + 2);
        assert_eq!(scored[1].score, 0);
        assert_eq!(scored[2].score, 9);
    }

    #[test]
    fn test_select_top_sorts_and_truncates() {
        let scored = vec![
            candidate(Section::Korea, "a", 5),
            candidate(Section::Us, "b", 400),
            candidate(Section::China, "c", 0),
            candidate(Section::Global, "d", 18),
        ];

        let top = select_top::<StdRng>(scored, 3, None);
        let titles: Vec<_> = top.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_select_top_is_stable_without_shuffle() {
        let scored = vec![
            candidate(Section::Korea, "k1", 7),
            candidate(Section::Us, "u1", 9),
            candidate(Section::Korea, "k2", 7),
            candidate(Section::China, "c1", 7),
        ];

        let first = select_top::<StdRng>(scored.clone(), 10, None);
        let second = select_top::<StdRng>(scored, 10, None);
        assert_eq!(first, second);

        let titles: Vec<_> = first.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["u1", "k1", "k2", "c1"]);
    }

    #[test]
    fn test_fewer_candidates_than_top_n() {
        let scored = vec![candidate(Section::Korea, "only", 1)];
        let top = select_top::<StdRng>(scored, 10, None);
        assert_eq!(top.len(), 1);

        let empty = select_top::<StdRng>(Vec::new(), 10, None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shuffle_only_reorders_ties() {
        let scored: Vec<_> = (0..20)
            .map(|i| candidate(Section::Global, &format!("t{}", i), if i < 3 { 50 } else { 1 }))
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        let top = select_top(scored, 5, Some(&mut rng));

        assert_eq!(top.len(), 5);
        assert!(top[..3].iter().all(|c| c.score == 50));
        assert!(top[3..].iter().all(|c| c.score == 1));
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let scored: Vec<_> = (0..12)
            .map(|i| candidate(Section::Us, &format!("t{}", i), (i % 3) as u32))
            .collect();

        let a = select_top(scored.clone(), 6, Some(&mut StdRng::seed_from_u64(42)));
        let b = select_top(scored, 6, Some(&mut StdRng::seed_from_u64(42)));
        assert_eq!(a, b);
    }
}
