//! Fixed EN→KO term substitution used when no translation endpoint answers.

use regex::Regex;
use std::sync::LazyLock;

/// Substitutions are applied in this order, each on the output of the last.
const EN_KO_GLOSSARY: &[(&str, &str)] = &[
    ("fomc", "연준회의(FOMC)"),
    ("fed", "연준(Fed)"),
    ("rate", "금리"),
    ("rates", "금리"),
    ("hike", "인상"),
    ("cut", "인하"),
    ("inflation", "인플레이션"),
    ("deflation", "디플레이션"),
    ("cpi", "CPI"),
    ("pce", "PCE"),
    ("gdp", "GDP"),
    ("yield", "수익률"),
    ("treasury", "미국 국채"),
    ("bond", "채권"),
    ("bonds", "채권"),
    ("oil", "유가"),
    ("brent", "브렌트유"),
    ("wti", "WTI"),
    ("dollar", "달러"),
    ("usd", "달러"),
    ("semiconductor", "반도체"),
    ("chips act", "칩스법"),
    ("ira", "IRA"),
    ("export control", "수출 통제"),
    ("sanction", "제재"),
    ("tariff", "관세"),
];

static GLOSSARY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    EN_KO_GLOSSARY
        .iter()
        .map(|(term, rendered)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            (Regex::new(&pattern).unwrap(), *rendered)
        })
        .collect()
});

/// Replace every whole-word glossary term, ignoring case.
///
/// Words outside the glossary are left untouched, so the result is a mixed
/// rendering rather than a real translation.
pub fn glossary_translate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();
    for (pattern, rendered) in GLOSSARY_PATTERNS.iter() {
        result = pattern.replace_all(&result, *rendered).into_owned();
    }
    result
}
