//! Keyword-weight relevance scoring.
//!
//! A headline's score is the sum of the weights of every keyword that occurs
//! in it as a substring, plus a small bonus for top geopolitical/macro terms.
//! Any war/security term replaces all of that with a single large override.
//! Nothing is ever filtered out; low scores just sort last.

/// Score assigned when any war/security term appears
pub const DEFAULT_WAR_BOOST: u32 = 400;

/// Added on top of keyword weights for high-priority macro terms
pub const GEOPOLITICAL_BONUS: u32 = 2;

/// Keyword → weight. Overlapping keys ("bond", "bond yield") both count.
#[rustfmt::skip]
pub const KEYWORD_WEIGHTS: &[(&str, u32)] = &[
    // macro, rates, prices, growth
    ("연준", 10), ("fed", 10), ("federal reserve", 10), ("fomc", 10),
    ("금리", 9), ("interest rate", 9), ("rate hike", 9), ("rate cut", 9),
    ("cpi", 10), ("inflation", 10), ("deflation", 8), ("pce", 10),
    ("gdp", 8), ("growth", 7), ("고용", 7), ("실업", 7),
    ("환율", 9), ("exchange rate", 9), ("달러", 6), ("dollar", 6),
    ("국채", 7), ("treasury", 8), ("bond", 7), ("bond yield", 9), ("국채금리", 9),
    ("양적긴축", 8), ("양적완화", 8), ("qe", 7), ("qt", 7),
    ("재정", 7), ("부양책", 7), ("stimulus", 7), ("감세", 6), ("tax cut", 6),
    ("관세", 7), ("tariff", 7), ("무역수지", 8), ("trade balance", 8), ("수출", 7), ("export", 7),
    // sanctions, supply chain, industrial policy
    ("제재", 10), ("sanction", 10), ("export control", 10),
    ("칩스법", 10), ("chips act", 10), ("ira", 10), ("보조금", 7), ("subsidy", 7),
    ("공급망", 9), ("supply chain", 9), ("리쇼어링", 8), ("reshoring", 8), ("리슈어링", 8), ("우회수출", 8),
    // energy, commodities
    ("유가", 9), ("oil", 9), ("opec", 9), ("opec+", 9),
    ("천연가스", 8), ("natural gas", 8), ("gas", 7),
    ("wti", 7), ("brent", 7), ("브렌트", 7), ("구리", 7), ("copper", 7),
    // corporate impact, regulation
    ("반도체", 8), ("semiconductor", 8), ("ai", 5),
    ("실적", 8), ("earnings", 8), ("guidance", 7),
    ("감자", 9), ("증자", 9), ("ipo", 7),
    ("상장폐지", 10), ("delisting", 10), ("파산", 9), ("bankruptcy", 9), ("default", 9),
    ("리콜", 7), ("recall", 7),
    ("독점금지", 7), ("antitrust", 7), ("규제", 7), ("regulation", 7),
    ("공정위", 7), ("ftc", 7), ("doj", 7),
];

/// Conflict/security terms. Any match returns the override score.
#[rustfmt::skip]
pub const WAR_TERMS: &[&str] = &[
    "전쟁", "교전", "공습", "침공", "미사일", "핵", "핵실험", "핵개발", "동원령", "휴전",
    "분쟁", "봉쇄", "제해권", "격추", "무인기", "드론 공격",
    "우크라", "가자", "이스라엘", "하마스", "헤즈볼라",
    "홍해", "호르무즈", "타이완", "대만", "남중국해", "한반도", "북한",
    "war", "battle", "conflict", "clash", "missile", "strike", "airstrike", "shelling", "drone",
    "invasion", "ceasefire", "mobilization", "blockade", "shootdown",
    "ukraine", "russia", "gaza", "israel", "hamas", "hezbollah",
    "red sea", "hormuz", "taiwan", "south china sea", "north korea", "korean peninsula",
];

#[rustfmt::skip]
pub const GEOPOLITICAL_TERMS: &[&str] = &[
    "연준", "fed", "fomc", "opec", "opec+", "남중국해", "south china sea",
    "타이완", "taiwan", "홍해", "red sea", "호르무즈", "hormuz",
    "국채금리", "bond yield", "환율", "exchange rate",
];

/// Topics recognized as noise. They always score zero and never exclude.
#[rustfmt::skip]
pub const NOISE_TERMS: &[&str] = &[
    "연예", "배우", "아이돌", "드라마", "예능", "스캔들", "열애", "결혼",
    "스포츠", "야구", "축구", "농구", "배구", "골프", "e스포츠",
    "날씨", "폭염", "무더위", "비 예보", "해수욕장", "여행", "관광", "축제", "문화",
    "인플루언서", "유튜버", "틱톡", "소셜미디어", "사생활",
    "공항 터미널", "재개장", "교통통제", "사고 현장", "생활", "리빙", "건강 팁", "가십", "지역 뉴스",
    "celebrity", "gossip", "entertainment", "idol", "k-pop", "sports", "soccer", "baseball", "tennis",
    "weather", "heat wave", "travel", "festival", "lifestyle", "review", "how-to", "tips",
];

/// Headline scorer over fixed term tables
#[derive(Debug, Clone)]
pub struct Scorer {
    war_boost: u32,
    keywords: &'static [(&'static str, u32)],
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(DEFAULT_WAR_BOOST)
    }
}

impl Scorer {
    pub fn new(war_boost: u32) -> Self {
        Self {
            war_boost,
            keywords: KEYWORD_WEIGHTS,
        }
    }

    pub fn keywords(&self) -> &'static [(&'static str, u32)] {
        self.keywords
    }

    /// Relevance score of a normalized headline
    pub fn score(&self, title: &str) -> u32 {
        let t = title.to_lowercase();
        if t.is_empty() {
            return 0;
        }

        if contains_any(&t, WAR_TERMS) {
            return self.war_boost;
        }

        let mut score: u32 = self
            .keywords
            .iter()
            .filter(|(keyword, _)| t.contains(keyword))
            .map(|(_, weight)| weight)
            .sum();

        if contains_any(&t, GEOPOLITICAL_TERMS) {
            score += GEOPOLITICAL_BONUS;
        }

        score
    }

    /// Whether the headline mentions a noise topic. Informational only.
    pub fn is_noise(&self, title: &str) -> bool {
        contains_any(&title.to_lowercase(), NOISE_TERMS)
    }
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(keyword: &str) -> u32 {
        KEYWORD_WEIGHTS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, w)| *w)
            .unwrap()
    }

    #[test]
    fn test_war_terms_override_keywords() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score("Missile launch rattles markets; Fed on hold"), 400);
        assert_eq!(scorer.score("MISSILE TEST"), 400);
        assert_eq!(scorer.score("북한 미사일 발사에 환율 급등"), 400);
        assert_eq!(scorer.score("Red Sea shipping disrupted, oil up"), 400);
    }

    #[test]
    fn test_custom_war_boost() {
        let scorer = Scorer::new(1000);
        assert_eq!(scorer.score("ceasefire talks resume"), 1000);
    }

    #[test]
    fn test_unrecognized_title_scores_zero() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score("Local bakery opens new store"), 0);
        assert_eq!(scorer.score(""), 0);
    }

    #[test]
    fn test_noise_terms_score_zero_without_excluding() {
        let scorer = Scorer::default();
        let title = "Celebrity gossip and weather tips";
        assert!(scorer.is_noise(title));
        assert_eq!(scorer.score(title), 0);

        // Noise never subtracts from real signal
        let mixed = "연예 기획사 실적 발표";
        assert!(scorer.is_noise(mixed));
        assert_eq!(scorer.score(mixed), weight("실적"));
    }

    #[test]
    fn test_overlapping_keywords_are_additive() {
        let scorer = Scorer::default();
        let expected = weight("bond") + weight("bond yield") + GEOPOLITICAL_BONUS;
        assert_eq!(scorer.score("Bond yield climbs"), expected);
    }

    #[test]
    fn test_korean_keywords_with_bonus() {
        let scorer = Scorer::default();
        assert_eq!(
            scorer.score("연준 금리 동결"),
            weight("연준") + weight("금리") + GEOPOLITICAL_BONUS
        );
    }

    #[test]
    fn test_keywords_without_bonus() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score("반도체 수출 증가"), weight("반도체") + weight("수출"));
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "award" contains "war"; matching is substring-based by design
        let scorer = Scorer::default();
        assert_eq!(scorer.score("Film award season"), DEFAULT_WAR_BOOST);
    }

    #[test]
    fn test_tables_are_lowercase() {
        for (keyword, _) in KEYWORD_WEIGHTS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
        for term in WAR_TERMS.iter().chain(GEOPOLITICAL_TERMS).chain(NOISE_TERMS) {
            assert_eq!(*term, term.to_lowercase());
        }
    }
}
