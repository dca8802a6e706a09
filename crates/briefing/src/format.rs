//! Message rendering for the header and each briefing item

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use translate::Translation;

/// Hard cap on a single message's UTF-8 length
pub const MAX_MESSAGE_BYTES: usize = 950;

/// One selected headline, ready to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefItem {
    /// Section display label, e.g. "미국"
    pub tag: String,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub translation: Option<Translation>,
}

/// How summary and translation lines are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStyle {
    /// `↳ summary`
    Compact,
    /// `• 요약: summary`, plus translation lines
    Annotated { bilingual: bool },
}

/// Longest prefix of `s` that fits in `limit` bytes without splitting a character
pub fn safe_cut(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Render one item as `N. [tag] title` followed by optional detail lines
pub fn format_item(item: &BriefItem, index: Option<usize>, style: MessageStyle) -> String {
    let mut head = format!("[{}] {}", item.tag, item.title);
    if let Some(index) = index {
        head = format!("{}. {}", index, head);
    }

    let mut lines = vec![head];
    match style {
        MessageStyle::Compact => {
            if !item.summary.is_empty() {
                lines.push(format!("↳ {}", item.summary));
            }
        }
        MessageStyle::Annotated { bilingual } => {
            if !item.summary.is_empty() {
                lines.push(format!("• 요약: {}", item.summary));
            }
            if let Some(translation) = &item.translation {
                lines.push(format!("• 번역: {}", translation.rendered));
                if bilingual {
                    lines.push(format!("• 원문: {}", translation.original));
                }
            }
        }
    }
    if !item.link.is_empty() {
        lines.push(format!("링크: {}", item.link));
    }

    safe_cut(&lines.join("\n"), MAX_MESSAGE_BYTES).to_string()
}

/// Opening message announcing the date, coverage window and item count
pub fn format_header(now: DateTime<FixedOffset>, lookback: Duration, top_n: usize) -> String {
    let since = now - lookback;
    let header = format!(
        "[아침 브리핑] {}\n기간: {}~{} (KST)\n상위 {}건을 순서대로 보냅니다.",
        now.format("%Y-%m-%d (%a)"),
        since.format("%m/%d %H:%M"),
        now.format("%m/%d %H:%M"),
        top_n
    );
    safe_cut(&header, MAX_MESSAGE_BYTES).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item() -> BriefItem {
        BriefItem {
            tag: "미국".to_string(),
            title: "Fed holds rates".to_string(),
            summary: "The FOMC left rates unchanged.".to_string(),
            link: "https://example.com/fed".to_string(),
            translation: None,
        }
    }

    #[test]
    fn test_safe_cut_respects_char_boundaries() {
        assert_eq!(safe_cut("abc", 10), "abc");
        // each Hangul syllable is 3 bytes
        assert_eq!(safe_cut("가나다", 7), "가나");
        assert_eq!(safe_cut("가나다", 6), "가나");
        assert_eq!(safe_cut("가나다", 2), "");
    }

    #[test]
    fn test_compact_format() {
        let text = format_item(&item(), Some(3), MessageStyle::Compact);
        assert_eq!(
            text,
            concat!(
                "3. [미국] Fed holds rates\n",
                "↳ The FOMC left rates unchanged.\n",
                "링크: https://example.com/fed"
            )
        );
    }

    #[test]
    fn test_annotated_format_with_translation() {
        let mut item = item();
        item.translation = Some(Translation {
            original: "The FOMC left rates unchanged.".to_string(),
            rendered: "The 연준회의(FOMC) left 금리 unchanged.".to_string(),
        });

        let bilingual = format_item(&item, Some(1), MessageStyle::Annotated { bilingual: true });
        let lines: Vec<_> = bilingual.lines().collect();
        assert_eq!(lines[0], "1. [미국] Fed holds rates");
        assert_eq!(lines[1], "• 요약: The FOMC left rates unchanged.");
        assert_eq!(lines[2], "• 번역: The 연준회의(FOMC) left 금리 unchanged.");
        assert_eq!(lines[3], "• 원문: The FOMC left rates unchanged.");
        assert_eq!(lines[4], "링크: https://example.com/fed");

        let single = format_item(&item, Some(1), MessageStyle::Annotated { bilingual: false });
        assert!(!single.contains("• 원문"));
        assert!(single.contains("• 번역"));
    }

    #[test]
    fn test_optional_lines_omitted() {
        let item = BriefItem {
            summary: String::new(),
            link: String::new(),
            ..item()
        };
        assert_eq!(format_item(&item, None, MessageStyle::Compact), "[미국] Fed holds rates");
    }

    #[test]
    fn test_long_message_is_capped() {
        let item = BriefItem {
            summary: "유가".repeat(400),
            ..item()
        };
        for style in [MessageStyle::Compact, MessageStyle::Annotated { bilingual: true }] {
            let text = format_item(&item, Some(10), style);
            assert!(text.len() <= MAX_MESSAGE_BYTES);
            assert!(text.len() > MAX_MESSAGE_BYTES - 4);
            assert!(std::str::from_utf8(text.as_bytes()).is_ok());
        }
    }

    #[test]
    fn test_header() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = kst.with_ymd_and_hms(2024, 3, 4, 7, 30, 0).unwrap();
        let header = format_header(now, Duration::hours(14), 10);
        assert_eq!(
            header,
            concat!(
                "[아침 브리핑] 2024-03-04 (Mon)\n",
                "기간: 03/03 17:30~03/04 07:30 (KST)\n",
                "상위 10건을 순서대로 보냅니다."
            )
        );
    }
}
